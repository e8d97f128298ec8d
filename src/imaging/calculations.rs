//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;

/// Scale `source` so its short side becomes exactly `short_edge` pixels.
///
/// The long side scales by the same factor and is rounded to the nearest
/// pixel, so it may exceed `short_edge`. Returns `None` for a zero target or a
/// degenerate source, where no meaningful image can be produced.
///
/// # Examples
/// ```
/// # use blogthumbs::imaging::{Dimensions, calculate_scaled_dimensions};
/// // 400x200 landscape at 100 → 200x100
/// let out = calculate_scaled_dimensions(Dimensions { width: 400, height: 200 }, 100);
/// assert_eq!(out, Some(Dimensions { width: 200, height: 100 }));
/// ```
pub fn calculate_scaled_dimensions(source: Dimensions, short_edge: u32) -> Option<Dimensions> {
    let short = source.short_side();
    if short_edge == 0 || short == 0 {
        return None;
    }

    // Multiply before dividing so the short side lands on `short_edge` exactly.
    let scale = |side: u32| (side as f64 * short_edge as f64 / short as f64).round() as u32;
    Some(Dimensions {
        width: scale(source.width),
        height: scale(source.height),
    })
}

/// Bytes a Catmull-Rom resample of `source` into `output` allocates: an f32
/// RGBA intermediate of source width by output height, plus the output itself
/// at up to 16 bits per channel.
pub fn resample_bytes(source: Dimensions, output: Dimensions) -> u64 {
    let intermediate = (source.width as u64)
        .saturating_mul(output.height as u64)
        .saturating_mul(16);
    let result = (output.width as u64)
        .saturating_mul(output.height as u64)
        .saturating_mul(8);
    intermediate.saturating_add(result)
}
