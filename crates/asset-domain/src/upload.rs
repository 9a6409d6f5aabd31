//! Resultado de un upload a Cloudinary.
//!
//! Los campos obligatorios son `Option` a nivel de wire para poder reportar su
//! ausencia como `AssetError::Validation` (y no como error de serde).
//! `responsive_breakpoints` se guarda como JSON crudo: entra completo en el
//! fingerprint, en el orden recibido. Los campos numéricos aceptan flotantes
//! sin parte decimal (`640.0`), igual que los anchos de breakpoints.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::AssetError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, deserialize_with = "integral", skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, deserialize_with = "integral", skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "integral", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_breakpoints: Option<Value>,
}

/// Vista validada de un `UploadResult`: todos los campos requeridos presentes.
#[derive(Debug, Clone, Copy)]
pub struct ValidUpload<'a> {
    pub public_id: &'a str,
    pub version: u64,
    pub height: u32,
    pub width: u32,
    pub responsive_breakpoints: Option<&'a Value>,
}

impl UploadResult {
    pub fn from_json_str(raw: &str) -> Result<Self, AssetError> {
        serde_json::from_str(raw).map_err(|e| AssetError::Validation(format!("upload result inválido: {e}")))
    }

    /// Comprueba los campos requeridos.
    ///
    /// # Errores
    /// `AssetError::Validation` si falta `public_id`, `version`, `height` o
    /// `width`, si `public_id` está vacío o si alguna dimensión es 0.
    pub fn validate(&self) -> Result<ValidUpload<'_>, AssetError> {
        let public_id = self.public_id.as_deref().ok_or_else(|| missing("public_id"))?;
        if public_id.is_empty() {
            return Err(AssetError::Validation("public_id vacío".to_string()));
        }
        let version = self.version.ok_or_else(|| missing("version"))?;
        let height = self.height.ok_or_else(|| missing("height"))?;
        let width = self.width.ok_or_else(|| missing("width"))?;
        if height == 0 || width == 0 {
            return Err(AssetError::Validation(format!("dimensiones inválidas para {public_id}: {width}x{height}")));
        }
        Ok(ValidUpload { public_id,
                         version,
                         height,
                         width,
                         responsive_breakpoints: self.responsive_breakpoints.as_ref() })
    }
}

impl ValidUpload<'_> {
    /// Anchos de `responsive_breakpoints[0].breakpoints`, en el orden recibido.
    ///
    /// `Ok(None)` si la secuencia no existe o está vacía. Una entrada sin
    /// `width` entero positivo es un error de validación.
    pub fn server_breakpoints(&self) -> Result<Option<Vec<u32>>, AssetError> {
        let entries = match self.responsive_breakpoints
                                .and_then(|rb| rb.get(0))
                                .and_then(|first| first.get("breakpoints"))
                                .and_then(Value::as_array)
        {
            Some(entries) if !entries.is_empty() => entries,
            _ => return Ok(None),
        };

        entries.iter()
               .enumerate()
               .map(|(idx, entry)| {
                   entry.get("width").and_then(positive_width).ok_or_else(|| {
                       AssetError::Validation(format!("responsive_breakpoints[0].breakpoints[{idx}] sin width válido en {}",
                                                      self.public_id))
                   })
               })
               .collect::<Result<Vec<_>, _>>()
               .map(Some)
    }
}

fn missing(field: &str) -> AssetError {
    AssetError::Validation(format!("falta el campo requerido `{field}` en el upload result"))
}

// Acepta enteros y flotantes sin parte decimal (p.ej. 640.0).
fn as_integral(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

fn positive_width(value: &Value) -> Option<u32> {
    as_integral(value).and_then(|w| u32::try_from(w).ok()).filter(|w| *w > 0)
}

fn integral<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where D: Deserializer<'de>,
          T: TryFrom<u64>
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => as_integral(&raw).and_then(|n| T::try_from(n).ok())
                                      .map(Some)
                                      .ok_or_else(|| D::Error::custom(format!("se esperaba un entero no negativo, se recibió {raw}"))),
    }
}
