//! Digest de strings: content digest por defecto de los nodos de asset.

use blake3::Hasher;

/// Digest blake3 de `input` en hex (64 caracteres). Es el `contentDigest`
/// que produce `UuidNodeIdentity` a partir del fingerprint.
pub fn hash_str(input: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(input.as_bytes());
    hasher.finalize().to_hex().to_string()
}
