use asset_domain::AssetError;
use thiserror::Error;

/// Errores de la capa de integración (carga de configuración y archivos).
#[derive(Debug, Error)]
pub enum CloudinaryError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("Error en IO ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
