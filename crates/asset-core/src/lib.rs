//! asset-core: primitivas deterministas para nodos de asset.
//!
//! Contiene la serialización ordenada (fingerprints), el hash de strings y el
//! trait `NodeIdentity` que abstrae la generación de ids y content digests del
//! framework anfitrión. No conoce la semántica de Cloudinary.
pub mod constants;
pub mod hashing;
pub mod model;

pub use constants::{DEFAULT_NAMESPACE, NODE_ID_PREFIX, NODE_TYPE};
pub use hashing::{hash_str, to_canonical_json, to_key_sorted_json};
pub use model::{fingerprint_object, FingerprintInput, FnIdentity, IdentityError, NodeIdentity, UuidNodeIdentity};
