use asset_core::IdentityError;
use thiserror::Error;

/// Errores del dominio de assets. La construcción de un record es todo o
/// nada: cualquier variante implica que no se emitió record.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Error de configuración: {0}")]
    Configuration(String),

    #[error("Validación fallida: {0}")]
    Validation(String),

    #[error("Fallo del colaborador de identidad: {0}")]
    Collaborator(#[source] IdentityError),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}
