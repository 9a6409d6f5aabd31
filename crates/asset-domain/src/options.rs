//! Opciones del plugin.
//!
//! Se construyen una vez (desde entorno, JSON o código) y se pasan de forma
//! explícita al calculador y al builder; no hay estado global.

use serde::{Deserialize, Serialize};

use crate::AssetError;

pub const DEFAULT_FLUID_MIN_WIDTH: u32 = 200;
pub const DEFAULT_FLUID_MAX_WIDTH: u32 = 1000;
pub const DEFAULT_BREAKPOINTS_MAX_IMAGES: u32 = 5;

/// Configuración de solo lectura del plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    pub cloud_name: String,
    #[serde(default = "default_fluid_min_width")]
    pub fluid_min_width: u32,
    #[serde(default = "default_fluid_max_width")]
    pub fluid_max_width: u32,
    #[serde(default = "default_breakpoints_max_images")]
    pub breakpoints_max_images: u32,
}

fn default_fluid_min_width() -> u32 { DEFAULT_FLUID_MIN_WIDTH }
fn default_fluid_max_width() -> u32 { DEFAULT_FLUID_MAX_WIDTH }
fn default_breakpoints_max_images() -> u32 { DEFAULT_BREAKPOINTS_MAX_IMAGES }

impl PluginOptions {
    /// Opciones con los valores por defecto del plugin.
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self { cloud_name: cloud_name.into(),
               fluid_min_width: DEFAULT_FLUID_MIN_WIDTH,
               fluid_max_width: DEFAULT_FLUID_MAX_WIDTH,
               breakpoints_max_images: DEFAULT_BREAKPOINTS_MAX_IMAGES }
    }

    pub fn with_fluid_widths(mut self, min: u32, max: u32) -> Self {
        self.fluid_min_width = min;
        self.fluid_max_width = max;
        self
    }

    pub fn with_breakpoints_max_images(mut self, n: u32) -> Self {
        self.breakpoints_max_images = n;
        self
    }

    /// Verifica que la configuración sea utilizable antes de construir records.
    ///
    /// Anchos fluidos invertidos (`fluidMaxWidth < fluidMinWidth`) o un mínimo
    /// de 0 no son errores: el calculador los resuelve devolviendo `[max]`.
    ///
    /// # Errores
    /// `AssetError::Configuration` si falta `cloudName` o si
    /// `breakpointsMaxImages` es 0.
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.cloud_name.trim().is_empty() {
            return Err(AssetError::Configuration("cloudName es obligatorio".to_string()));
        }
        if self.breakpoints_max_images == 0 {
            return Err(AssetError::Configuration("breakpointsMaxImages debe ser >= 1".to_string()));
        }
        Ok(())
    }

    /// Parsea opciones desde JSON, aplica defaults y valida.
    pub fn from_json_str(raw: &str) -> Result<Self, AssetError> {
        let opts: PluginOptions =
            serde_json::from_str(raw).map_err(|e| AssetError::Configuration(format!("opciones inválidas: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_applies_defaults() {
        let opts = PluginOptions::from_json_str(r#"{"cloudName":"demo"}"#).unwrap();
        assert_eq!(opts, PluginOptions::new("demo"));
        assert_eq!(opts.fluid_min_width, 200);
        assert_eq!(opts.fluid_max_width, 1000);
        assert_eq!(opts.breakpoints_max_images, 5);
    }

    #[test]
    fn json_without_cloud_name_is_configuration_error() {
        let err = PluginOptions::from_json_str(r#"{"fluidMaxWidth":800}"#).unwrap_err();
        assert!(matches!(err, AssetError::Configuration(_)));
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(PluginOptions::new("  ").validate().is_err());
        assert!(PluginOptions::new("c").with_breakpoints_max_images(0).validate().is_err());
        assert!(PluginOptions::new("c").with_fluid_widths(100, 100).validate().is_ok());
    }

    #[test]
    fn validate_accepts_degenerate_widths() {
        assert!(PluginOptions::new("c").with_fluid_widths(0, 100).validate().is_ok());
        assert!(PluginOptions::new("c").with_fluid_widths(500, 100).validate().is_ok());
    }
}
