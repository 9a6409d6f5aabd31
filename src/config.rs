//! Carga de `PluginOptions` desde el entorno (.env) o desde un archivo JSON.
//!
//! Variables: `CLOUDINARY_CLOUD_NAME` (obligatoria),
//! `CLOUDINARY_FLUID_MIN_WIDTH`, `CLOUDINARY_FLUID_MAX_WIDTH`,
//! `CLOUDINARY_BREAKPOINTS_MAX_IMAGES`. El resultado se pasa explícitamente a
//! quien lo necesite; no hay instancia global de opciones.
use std::env;
use std::path::Path;

use asset_domain::{AssetError, PluginOptions};
use log::warn;
use once_cell::sync::Lazy;

use crate::CloudinaryError;

pub const ENV_CLOUD_NAME: &str = "CLOUDINARY_CLOUD_NAME";
pub const ENV_FLUID_MIN_WIDTH: &str = "CLOUDINARY_FLUID_MIN_WIDTH";
pub const ENV_FLUID_MAX_WIDTH: &str = "CLOUDINARY_FLUID_MAX_WIDTH";
pub const ENV_BREAKPOINTS_MAX_IMAGES: &str = "CLOUDINARY_BREAKPOINTS_MAX_IMAGES";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    if let Err(e) = dotenvy::dotenv() {
        // un .env ausente no es un error
        if !e.not_found() {
            warn!("no se pudo cargar .env: {e}");
        }
    }
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() { Lazy::force(&DOTENV_LOADED); }

/// Lee las opciones del entorno del proceso (cargando .env primero).
pub fn options_from_env() -> Result<PluginOptions, CloudinaryError> {
    init_dotenv();
    Ok(options_from_lookup(|key| env::var(key).ok())?)
}

/// Construye opciones a partir de una función de búsqueda de variables.
/// Las variables numéricas ausentes toman el valor por defecto del plugin.
pub fn options_from_lookup<F>(lookup: F) -> Result<PluginOptions, AssetError>
    where F: Fn(&str) -> Option<String>
{
    let cloud_name = lookup(ENV_CLOUD_NAME).ok_or_else(|| AssetError::Configuration(format!("{ENV_CLOUD_NAME} no definido")))?;
    let mut opts = PluginOptions::new(cloud_name);
    if let Some(v) = parse_var(&lookup, ENV_FLUID_MIN_WIDTH)? {
        opts.fluid_min_width = v;
    }
    if let Some(v) = parse_var(&lookup, ENV_FLUID_MAX_WIDTH)? {
        opts.fluid_max_width = v;
    }
    if let Some(v) = parse_var(&lookup, ENV_BREAKPOINTS_MAX_IMAGES)? {
        opts.breakpoints_max_images = v;
    }
    opts.validate()?;
    Ok(opts)
}

/// Lee y valida opciones desde un archivo JSON (`{"cloudName": ..., ...}`).
pub fn load_options_file(path: &Path) -> Result<PluginOptions, CloudinaryError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CloudinaryError::Io { path: path.display().to_string(), source })?;
    Ok(PluginOptions::from_json_str(&raw)?)
}

fn parse_var<F>(lookup: &F, key: &str) -> Result<Option<u32>, AssetError>
    where F: Fn(&str) -> Option<String>
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim()
                        .parse::<u32>()
                        .map(Some)
                        .map_err(|e| AssetError::Configuration(format!("{key}={raw:?} no es un entero válido: {e}"))),
    }
}
