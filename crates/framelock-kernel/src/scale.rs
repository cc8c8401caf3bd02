//! UI canvas scale factor derivation.

use framelock_common::geometry::Resolution;

/// Screen extent treated as 1.0x scale.
pub const UI_SCALE_BASELINE: f32 = 1920.0;

/// Derives the canvas scale factor for the current screen dimensions.
///
/// Returns `None` when `ui_scale` is non-positive, which disables the
/// scale path entirely (the host default is retained). Otherwise the
/// factor is the larger screen extent relative to the 1920 baseline,
/// floored at 1.0, times the configured multiplier. Monotone
/// non-decreasing in the larger extent.
#[must_use]
pub fn scale_factor(current: Resolution, ui_scale: f32) -> Option<f32> {
    if ui_scale <= 0.0 {
        return None;
    }
    Some((current.max_extent() as f32 / UI_SCALE_BASELINE).max(1.0) * ui_scale)
}
