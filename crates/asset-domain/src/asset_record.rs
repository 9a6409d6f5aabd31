// asset_record.rs
use asset_core::{FingerprintInput, NodeIdentity, NODE_ID_PREFIX, NODE_TYPE};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{compute_breakpoints, AssetError, PluginOptions, UploadResult};

/// Campos internos requeridos por el framework anfitrión.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInternal {
    #[serde(rename = "type")]
    pub node_type: String,
    /// El framework reprocesa el nodo sólo cuando cambia este digest.
    pub content_digest: String,
}

/// Nodo que describe un asset subido. Se construye una sola vez y no se muta;
/// el llamador es dueño de su almacenamiento.
///
/// Los nombres serializados son un contrato estable con el esquema aguas
/// abajo. Los campos auxiliares (`cloudName`, `public_id`, ...) existen sólo
/// para que los resolvers tengan acceso a ellos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "cloudName")]
    pub cloud_name: String,
    pub public_id: String,
    pub version: u64,
    #[serde(rename = "originalHeight")]
    pub original_height: u32,
    #[serde(rename = "originalWidth")]
    pub original_width: u32,
    pub breakpoints: Vec<u32>,
    pub id: String,
    pub parent: String,
    pub internal: NodeInternal,
}

/// Insumos del builder.
pub struct AssetRecordInput<'a> {
    pub upload: &'a UploadResult,
    pub parent_id: &'a str,
    pub options: &'a PluginOptions,
    pub identity: &'a dyn NodeIdentity,
}

/// Construye el `AssetRecord` de un upload.
///
/// Los breakpoints del servidor (`responsive_breakpoints[0].breakpoints`), si
/// existen, reemplazan a los calculados por `compute_breakpoints`. El id y el
/// content digest se derivan del fingerprint vía el colaborador de identidad.
///
/// # Errores
/// - `AssetError::Configuration` si las opciones no son válidas.
/// - `AssetError::Validation` si el upload no trae los campos requeridos.
/// - `AssetError::Collaborator` con el error original del colaborador.
pub fn build_asset_record(input: AssetRecordInput<'_>) -> Result<AssetRecord, AssetError> {
    let AssetRecordInput { upload, parent_id, options, identity } = input;
    options.validate()?;
    let upload = upload.validate()?;

    let breakpoints = match upload.server_breakpoints()? {
        Some(server) => {
            debug!("using {} server breakpoints for {}", server.len(), upload.public_id);
            server
        }
        None => compute_breakpoints(upload.width, options),
    };

    let fingerprint = FingerprintInput { responsive_breakpoints: upload.responsive_breakpoints,
                                         public_id: upload.public_id,
                                         version: upload.version,
                                         height: upload.height,
                                         width: upload.width }.fingerprint()?;

    let id = identity.make_id(&format!("{NODE_ID_PREFIX}{fingerprint}"))
                     .map_err(AssetError::Collaborator)?;
    let content_digest = identity.make_digest(&fingerprint).map_err(AssetError::Collaborator)?;

    debug!("built asset node id={id} public_id={} parent={parent_id}", upload.public_id);

    Ok(AssetRecord { cloud_name: options.cloud_name.clone(),
                     public_id: upload.public_id.to_string(),
                     version: upload.version,
                     original_height: upload.height,
                     original_width: upload.width,
                     breakpoints,
                     id,
                     parent: parent_id.to_string(),
                     internal: NodeInternal { node_type: NODE_TYPE.to_string(), content_digest } })
}
