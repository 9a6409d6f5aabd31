//! Serialización JSON ordenada por claves.
//!
//! Dos variantes:
//! - `to_canonical_json`: ordena las claves de forma recursiva (forma canónica
//!   completa, sin espacios).
//! - `to_key_sorted_json`: ordena sólo las claves del objeto superior; los
//!   valores anidados se serializan tal cual, en el orden recibido. Es la forma
//!   que usa el fingerprint de los assets y no debe cambiar sin migrar ids.

use serde_json::{Map, Value};

/// Serializa un `Value` de JSON a una representación canónica:
/// - Objetos con claves ordenadas (a cualquier profundidad)
/// - Sin espacios redundantes
///
/// La CLI la usa para imprimir records de forma estable.
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(to_canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => render_sorted(map, to_canonical_json),
        // escalares: la forma compacta de serde_json ya es canónica
        scalar => scalar.to_string(),
    }
}

/// Serializa un objeto ordenando únicamente sus claves de primer nivel.
pub fn to_key_sorted_json(map: &Map<String, Value>) -> String {
    render_sorted(map, Value::to_string)
}

fn render_sorted(map: &Map<String, Value>, render: impl Fn(&Value) -> String) -> String {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let items: Vec<String> = entries.into_iter()
                                    .map(|(k, v)| format!("{}:{}", Value::from(k.as_str()), render(v)))
                                    .collect();
    format!("{{{}}}", items.join(","))
}
