//! Geometry primitives shared by every Framelock subsystem.
//!
//! All stored ratios and resolutions follow the larger-value-first
//! convention (width >= height); orientation is a per-call interpretation
//! applied on top, never baked into stored values.

use serde::{Deserialize, Serialize};

/// A physical or requested display resolution in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Calculates the width/height ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// The larger of the two extents.
    #[must_use]
    pub const fn max_extent(&self) -> u32 {
        if self.width >= self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Classifies this resolution's orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.width as f32, self.height as f32)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Frame-of-reference orientation for a width/height pair.
///
/// Portrait is the "virtual" (rotated) frame some hosts report; every
/// aspect computation swaps its axes under portrait. Computed fresh per
/// call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Width >= height. Ties classify as landscape.
    #[default]
    Landscape,
    /// Height strictly greater than width.
    Portrait,
}

impl Orientation {
    /// Classifies a width/height pair. Equal extents are landscape.
    #[must_use]
    pub fn of(width: f32, height: f32) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Classifies from a portrait flag (host-reported orientation).
    #[must_use]
    pub const fn from_portrait(portrait: bool) -> Self {
        if portrait {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Whether this is the portrait (rotated) frame of reference.
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

/// Target aspect ratio, stored larger-value-first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    /// Larger axis of the ratio.
    pub width: f32,
    /// Smaller axis of the ratio.
    pub height: f32,
}

impl AspectRatio {
    /// Creates a ratio from two positive extents, swapping so width >= height.
    ///
    /// Positivity is the caller's responsibility (configuration loading
    /// rejects non-positive values before this point).
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        if height > width {
            Self {
                width: height,
                height: width,
            }
        } else {
            Self { width, height }
        }
    }

    /// Creates a ratio from a single positive number.
    ///
    /// Values above 1 are read as width/height, values at or below 1 as
    /// height/width, so both `1.777` and `0.5625` mean 16:9.
    #[must_use]
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio > 1.0 {
            Self {
                width: ratio,
                height: 1.0,
            }
        } else {
            Self {
                width: 1.0,
                height: ratio,
            }
        }
    }

    /// The ratio to fit against under the given orientation.
    ///
    /// Landscape yields width/height, portrait swaps the axes.
    #[must_use]
    pub fn ratio(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Landscape => self.width / self.height,
            Orientation::Portrait => self.height / self.width,
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 9.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_classification() {
        assert_eq!(Orientation::of(1920.0, 1080.0), Orientation::Landscape);
        assert_eq!(Orientation::of(1080.0, 1920.0), Orientation::Portrait);
    }

    #[test]
    fn test_orientation_tie_is_landscape() {
        assert_eq!(Orientation::of(1080.0, 1080.0), Orientation::Landscape);
        assert!(!Orientation::of(512.0, 512.0).is_portrait());
    }

    #[test]
    fn test_orientation_is_pure() {
        for _ in 0..3 {
            assert_eq!(Orientation::of(800.0, 600.0), Orientation::Landscape);
        }
    }

    #[test]
    fn test_aspect_ratio_normalizes_order() {
        let aspect = AspectRatio::new(9.0, 16.0);
        assert_eq!(aspect.width, 16.0);
        assert_eq!(aspect.height, 9.0);
    }

    #[test]
    fn test_aspect_ratio_from_number() {
        let wide = AspectRatio::from_ratio(2.0);
        assert_eq!(wide.width, 2.0);
        assert_eq!(wide.height, 1.0);

        let tall = AspectRatio::from_ratio(0.5625);
        assert_eq!(tall.width, 1.0);
        assert_eq!(tall.height, 0.5625);
    }

    #[test]
    fn test_aspect_ratio_orientation_swap() {
        let aspect = AspectRatio::default();
        let landscape = aspect.ratio(Orientation::Landscape);
        let portrait = aspect.ratio(Orientation::Portrait);
        assert!((landscape - 16.0 / 9.0).abs() < 1e-6);
        assert!((portrait - 9.0 / 16.0).abs() < 1e-6);
    }

    #[test]
    fn test_resolution_aspect_and_extent() {
        let res = Resolution::new(2560, 1440);
        assert!((res.aspect_ratio() - 16.0 / 9.0).abs() < 0.01);
        assert_eq!(res.max_extent(), 2560);
        assert_eq!(Resolution::new(1080, 1920).max_extent(), 1920);
    }

    #[test]
    fn test_resolution_zero_height() {
        assert_eq!(Resolution::new(100, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_resolution_orientation() {
        assert!(Resolution::new(1080, 1920).orientation().is_portrait());
        assert!(!Resolution::new(1920, 1080).orientation().is_portrait());
    }

    proptest::proptest! {
        #[test]
        fn aspect_ratio_stored_landscape_first(
            w in 0.001f32..10_000.0,
            h in 0.001f32..10_000.0,
        ) {
            let aspect = AspectRatio::new(w, h);
            proptest::prop_assert!(aspect.width >= aspect.height);
            proptest::prop_assert!(aspect.ratio(Orientation::Landscape) >= 1.0);
            proptest::prop_assert!(aspect.ratio(Orientation::Portrait) <= 1.0);
        }
    }
}
