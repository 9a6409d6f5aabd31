//! Cloudinary assets
//!
//! Crate fachada del workspace:
//! - Reexporta lo principal de `asset_core` (fingerprints, hashing, identidad de nodos) y
//!   `asset_domain` (opciones, breakpoints, builder de records).
//! - Expone `config` para cargar `PluginOptions` desde entorno o archivo.
//!
//! Puede usarse desde la CLI o por otros crates/clientes.

pub mod config;
pub mod errors;

pub use asset_core::{FnIdentity, NodeIdentity, UuidNodeIdentity};
pub use asset_domain::{build_asset_record, compute_breakpoints, AssetError, AssetRecord, AssetRecordInput, PluginOptions, UploadResult};
pub use errors::CloudinaryError;
