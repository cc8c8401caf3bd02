//! # Framelock Kernel
//!
//! Policy arithmetic for the display geometry consistency engine.
//!
//! Each module is a pure, total function of the frozen configuration and
//! per-call inputs; the one exception is [`resize::ResizeHysteresis`],
//! which carries the cross-call memory that keeps window resizing from
//! oscillating. The engine crate wires these policies to host callbacks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod aspect;
pub mod policy;
pub mod resize;
pub mod scale;

pub use policy::{Axis, DisplaySnapshot, ResolutionRequest};
pub use resize::ResizeHysteresis;

#[cfg(test)]
mod tests {
    use super::*;
    use framelock_common::prelude::*;

    #[test]
    fn test_query_and_resize_agree_on_geometry() {
        // The resolution override and the aspect-fit path must describe
        // the same target rectangle for one configuration.
        let config = GeometryConfig {
            render_target: Some(RenderTarget::new(1920.0, 1080.0, -1.0)),
            ..GeometryConfig::default()
        };
        let snapshot = DisplaySnapshot {
            physical: Resolution::new(1920, 1080),
            full_screen: false,
            portrait: false,
        };

        let width = policy::resolve_dimension(0, Axis::Width, &config, &snapshot);
        let height = policy::resolve_dimension(0, Axis::Height, &config, &snapshot);
        let fitted = aspect::companion_height(
            width as f32,
            &config.aspect_ratio,
            Orientation::Landscape,
        );
        assert!((fitted - height as f32).abs() < 1.0);
    }
}
