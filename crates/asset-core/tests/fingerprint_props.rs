//! Propiedades del fingerprint: determinismo frente al orden de inserción y
//! sensibilidad a cada campo del subconjunto normalizado.

use asset_core::{fingerprint_object, FingerprintInput};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn fields(public_id: &str, version: u64, height: u32, width: u32, rb: &Value) -> Vec<(String, Value)> {
    vec![("responsive_breakpoints".to_string(), rb.clone()),
         ("public_id".to_string(), json!(public_id)),
         ("version".to_string(), json!(version)),
         ("height".to_string(), json!(height)),
         ("width".to_string(), json!(width))]
}

fn arb_breakpoints() -> impl Strategy<Value = Value> {
    prop::collection::vec(1u32..4000, 0..6).prop_map(|widths| {
        let bps: Vec<Value> = widths.into_iter().map(|w| json!({ "width": w, "bytes": w * 10 })).collect();
        json!([{ "breakpoints": bps }])
    })
}

proptest! {
    /// El orden de inserción de las claves no altera el fingerprint.
    #[test]
    fn insertion_order_does_not_matter(public_id in "[a-z0-9/_-]{1,20}",
                                       version in any::<u64>(),
                                       height in 1u32..10_000,
                                       width in 1u32..10_000,
                                       rb in arb_breakpoints(),
                                       rotation in 0usize..5) {
        let f = fields(&public_id, version, height, width, &rb);
        let forward: Map<String, Value> = f.iter().cloned().collect();
        let mut rotated_fields = f.clone();
        rotated_fields.rotate_left(rotation);
        rotated_fields.reverse();
        let rotated: Map<String, Value> = rotated_fields.into_iter().collect();
        prop_assert_eq!(fingerprint_object(&forward), fingerprint_object(&rotated));
    }

    /// El struct tipado y el objeto armado a mano producen el mismo string.
    #[test]
    fn typed_input_matches_object(public_id in "[a-z0-9_]{1,12}",
                                  version in any::<u64>(),
                                  height in 1u32..10_000,
                                  width in 1u32..10_000,
                                  rb in arb_breakpoints()) {
        let typed = FingerprintInput { responsive_breakpoints: Some(&rb),
                                       public_id: &public_id,
                                       version,
                                       height,
                                       width }.fingerprint().unwrap();
        let map: Map<String, Value> = fields(&public_id, version, height, width, &rb).into_iter().collect();
        prop_assert_eq!(typed, fingerprint_object(&map));
    }

    /// Cambiar cualquier campo cambia el fingerprint.
    #[test]
    fn every_field_is_significant(public_id in "[a-z]{1,12}",
                                  version in 0u64..u64::MAX,
                                  height in 1u32..10_000,
                                  width in 1u32..10_000) {
        let rb = json!([{ "breakpoints": [{ "width": width }] }]);
        let base = FingerprintInput { responsive_breakpoints: Some(&rb), public_id: &public_id, version, height, width };
        let fp = base.fingerprint().unwrap();

        let other_id = format!("{public_id}x");
        let other_rb = json!([{ "breakpoints": [{ "width": width + 1 }] }]);
        let variants = [FingerprintInput { public_id: &other_id, ..base.clone() },
                        FingerprintInput { version: version + 1, ..base.clone() },
                        FingerprintInput { height: height + 1, ..base.clone() },
                        FingerprintInput { width: width + 1, ..base.clone() },
                        FingerprintInput { responsive_breakpoints: Some(&other_rb), ..base.clone() },
                        FingerprintInput { responsive_breakpoints: None, ..base.clone() }];
        for v in variants {
            prop_assert_ne!(&fp, &v.fingerprint().unwrap());
        }
    }
}
