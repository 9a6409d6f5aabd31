//! Cálculo de breakpoints por defecto (interpolación lineal).

use crate::PluginOptions;

/// Anchos objetivo para una imagen de `image_width` px.
///
/// `max = min(image_width, fluidMaxWidth)`, `min = fluidMinWidth`. Si
/// `max <= min` el resultado es `[max]`. Si no, se generan
/// `breakpointsMaxImages` valores descendentes desde `max`, interpolando
/// linealmente hacia `min` y redondeando (mitad lejos de cero).
///
/// Total sobre cualquier entrada: con opciones sin validar
/// (`breakpointsMaxImages == 0`) devuelve `[max]`.
pub fn compute_breakpoints(image_width: u32, options: &PluginOptions) -> Vec<u32> {
    let max = image_width.min(options.fluid_max_width);
    let min = options.fluid_min_width;

    if max <= min {
        return vec![max];
    }

    let count = options.breakpoints_max_images.max(1);
    let mut breakpoints = Vec::with_capacity(count as usize);
    breakpoints.push(max);
    if count == 1 {
        return breakpoints;
    }

    let step = f64::from(max - min) / f64::from(count - 1);
    for i in 1..count {
        let breakpoint = f64::from(max) - f64::from(i) * step;
        // dentro de [min, max], el cast no satura
        breakpoints.push(breakpoint.round() as u32);
    }
    breakpoints
}
