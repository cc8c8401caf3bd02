//! Aspect-fit arithmetic.
//!
//! Every geometric computation in the engine funnels through these
//! functions so that independently-invoked entry points agree on the same
//! target geometry. The defining invariant: a produced width/height pair
//! always satisfies the target ratio for the orientation it was computed
//! under.

use framelock_common::geometry::{AspectRatio, Orientation};
use glam::Vec3;

/// Computes the height companion for an anchored width.
#[must_use]
pub fn companion_height(width: f32, aspect: &AspectRatio, orientation: Orientation) -> f32 {
    width / aspect.ratio(orientation)
}

/// Computes the width companion for an anchored height.
#[must_use]
pub fn companion_width(height: f32, aspect: &AspectRatio, orientation: Orientation) -> f32 {
    height * aspect.ratio(orientation)
}

/// Raw width/height scale factor for the projection depth term.
///
/// Deliberately applies no orientation swap: this is a raw scale factor
/// fed to the host's z-component, not a geometric ratio application.
#[must_use]
pub fn depth_ratio(width: f32, height: f32) -> f32 {
    width / height
}

/// Rewrites the host's optimized-window-size vector.
///
/// The y component becomes the aspect-fit height companion of `width`
/// under the given orientation and z becomes the raw depth ratio. A zero
/// `width` passes `base` through untouched (the host sends zero when no
/// window exists yet).
#[must_use]
pub fn optimized_window_size(
    base: Vec3,
    width: i32,
    height: i32,
    aspect: &AspectRatio,
    orientation: Orientation,
) -> Vec3 {
    if width == 0 {
        return base;
    }
    Vec3::new(
        base.x,
        companion_height(width as f32, aspect, orientation),
        depth_ratio(width as f32, height as f32),
    )
}
