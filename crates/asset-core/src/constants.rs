//! Constantes compartidas por el builder de nodos.
//!
//! `NODE_TYPE` y los nombres de campo del record forman un contrato estable con
//! el código de esquema/queries aguas abajo; cambiarlos rompe compatibilidad.

/// Tipo interno de los nodos de asset.
pub const NODE_TYPE: &str = "CloudinaryAsset";

/// Prefijo aplicado al fingerprint antes de derivar el id del nodo.
pub const NODE_ID_PREFIX: &str = "CloudinaryAsset-";

/// Nombre del plugin usado como namespace por defecto para ids v5.
pub const DEFAULT_NAMESPACE: &str = "gatsby-transformer-cloudinary";
