//! Colaboradores de identidad de nodos.
//!
//! El framework anfitrión es dueño de la generación de ids y digests; aquí se
//! modela como un trait inyectable. Las implementaciones deben ser
//! deterministas: mismo seed, mismo resultado.

use uuid::Uuid;

use crate::constants::DEFAULT_NAMESPACE;
use crate::hashing::hash_str;

/// Error opaco de un colaborador; se propaga sin transformar.
pub type IdentityError = Box<dyn std::error::Error + Send + Sync>;

/// Capacidad de derivar id y content digest a partir de un seed.
pub trait NodeIdentity: Send + Sync {
    fn make_id(&self, seed: &str) -> Result<String, IdentityError>;
    fn make_digest(&self, seed: &str) -> Result<String, IdentityError>;
}

/// Adapta dos closures (la forma de callbacks del framework) al trait.
pub struct FnIdentity<I, D> {
    make_id: I,
    make_digest: D,
}

impl<I, D> FnIdentity<I, D>
    where I: Fn(&str) -> String + Send + Sync,
          D: Fn(&str) -> String + Send + Sync
{
    pub fn new(make_id: I, make_digest: D) -> Self { Self { make_id, make_digest } }
}

impl<I, D> NodeIdentity for FnIdentity<I, D>
    where I: Fn(&str) -> String + Send + Sync,
          D: Fn(&str) -> String + Send + Sync
{
    fn make_id(&self, seed: &str) -> Result<String, IdentityError> { Ok((self.make_id)(seed)) }

    fn make_digest(&self, seed: &str) -> Result<String, IdentityError> { Ok((self.make_digest)(seed)) }
}

/// Implementación por defecto: ids UUID v5 bajo un namespace derivado del
/// nombre del plugin y digests blake3 en hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidNodeIdentity {
    namespace: Uuid,
}

impl UuidNodeIdentity {
    pub fn new(plugin_name: &str) -> Self {
        Self { namespace: Uuid::new_v5(&Uuid::NAMESPACE_URL, plugin_name.as_bytes()) }
    }

    pub fn namespace(&self) -> Uuid { self.namespace }
}

impl Default for UuidNodeIdentity {
    fn default() -> Self { Self::new(DEFAULT_NAMESPACE) }
}

impl NodeIdentity for UuidNodeIdentity {
    fn make_id(&self, seed: &str) -> Result<String, IdentityError> {
        Ok(Uuid::new_v5(&self.namespace, seed.as_bytes()).to_string())
    }

    fn make_digest(&self, seed: &str) -> Result<String, IdentityError> { Ok(hash_str(seed)) }
}
