//! Propiedades del calculador de breakpoints por defecto.
//!
//! Las estrategias generan directamente entradas que cumplen cada
//! precondición, sin descartar casos.

use asset_domain::{compute_breakpoints, PluginOptions};
use proptest::prelude::*;

fn arb_options() -> impl Strategy<Value = PluginOptions> {
    (1u32..2000, 0u32..4000, 1u32..12).prop_map(|(min, span, n)| {
        PluginOptions::new("demo").with_fluid_widths(min, min + span).with_breakpoints_max_images(n)
    })
}

/// Opciones con rango no vacío, n >= 2 y un ancho por encima del mínimo.
fn arb_interpolated() -> impl Strategy<Value = (PluginOptions, u32)> {
    (1u32..2000, 1u32..4000, 2u32..12).prop_flat_map(|(min, span, n)| {
        let opts = PluginOptions::new("demo").with_fluid_widths(min, min + span).with_breakpoints_max_images(n);
        (Just(opts), (min + 1)..8000)
    })
}

/// Opciones y un ancho que no supera el mínimo fluido.
fn arb_degenerate() -> impl Strategy<Value = (PluginOptions, u32)> {
    arb_options().prop_flat_map(|opts| {
        let min = opts.fluid_min_width;
        (Just(opts), 1u32..=min)
    })
}

proptest! {
    /// Con ancho por encima del mínimo y n >= 2: n valores, no crecientes,
    /// empezando en min(ancho, fluidMaxWidth) y terminando >= fluidMinWidth.
    #[test]
    fn interpolated_sequence_invariants((opts, width) in arb_interpolated()) {
        let max = width.min(opts.fluid_max_width);
        let bps = compute_breakpoints(width, &opts);
        prop_assert_eq!(bps.len(), opts.breakpoints_max_images as usize);
        prop_assert_eq!(bps[0], max);
        prop_assert!(bps.windows(2).all(|w| w[0] >= w[1]), "not non-increasing: {:?}", bps);
        prop_assert!(*bps.last().unwrap() >= opts.fluid_min_width);
    }

    /// Si min(ancho, fluidMaxWidth) <= fluidMinWidth el resultado es un único valor.
    #[test]
    fn degenerate_width_yields_single_value((opts, width) in arb_degenerate()) {
        prop_assert_eq!(compute_breakpoints(width, &opts), vec![width.min(opts.fluid_max_width)]);
    }

    /// Anchos fluidos invertidos: siempre `[max]`, sin importar n.
    #[test]
    fn inverted_widths_yield_single_value(max in 1u32..2000, extra in 1u32..2000, n in 1u32..12, width in 1u32..8000) {
        let opts = PluginOptions::new("demo").with_fluid_widths(max + extra, max).with_breakpoints_max_images(n);
        prop_assert_eq!(compute_breakpoints(width, &opts), vec![width.min(max)]);
    }

    /// Misma entrada, misma salida.
    #[test]
    fn calculator_is_deterministic(opts in arb_options(), width in 1u32..8000) {
        prop_assert_eq!(compute_breakpoints(width, &opts), compute_breakpoints(width, &opts));
    }
}
