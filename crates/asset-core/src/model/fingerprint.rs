use serde::Serialize;
use serde_json::{Map, Value};

use crate::hashing::to_key_sorted_json;

/// Subconjunto normalizado de un resultado de upload que identifica al asset.
/// NO es el fingerprint final sino el modelo previo a serializar.
///
/// Si `responsive_breakpoints` no viene en el upload, la clave se omite del
/// objeto (no se serializa como `null`). Los números flotantes sin parte
/// decimal (`640.0`) se escriben como enteros (`640`), igual que en JS.
#[derive(Debug, Clone, Serialize)]
pub struct FingerprintInput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_breakpoints: Option<&'a Value>,
    pub public_id: &'a str,
    pub version: u64,
    pub height: u32,
    pub width: u32,
}

impl FingerprintInput<'_> {
    /// Serializa el input con las claves de primer nivel ordenadas.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        match normalize_numbers(serde_json::to_value(self)?) {
            Value::Object(map) => Ok(fingerprint_object(&map)),
            // un struct siempre serializa a objeto
            other => Ok(other.to_string()),
        }
    }
}

/// Fingerprint de un objeto arbitrario: claves de primer nivel ordenadas, el
/// contenido anidado en el orden recibido.
pub fn fingerprint_object(map: &Map<String, Value>) -> String {
    to_key_sorted_json(map)
}

// Límite bajo el cual un f64 entero se convierte a i64 sin pérdida.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER => Value::from(f as i64),
            _ => Value::Number(n),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(map) => Value::Object(map.into_iter().map(|(k, v)| (k, normalize_numbers(v))).collect()),
        other => other,
    }
}
