//! Modelos neutrales (Fingerprint, identidad de nodos).

pub mod fingerprint;
pub mod identity;

pub use fingerprint::{fingerprint_object, FingerprintInput};
pub use identity::{FnIdentity, IdentityError, NodeIdentity, UuidNodeIdentity};
