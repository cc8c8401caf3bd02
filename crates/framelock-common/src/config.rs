//! Frozen geometry policy configuration.
//!
//! `GeometryConfig` is constructed once at load time and read-only
//! thereafter. Every field is plain data; validation and document parsing
//! live in the engine crate. The stored aspect ratio and render target
//! always keep the larger value first — orientation swaps happen per call.

use crate::geometry::AspectRatio;

/// Fixed rendering resolution override with an optional UI scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    /// Larger render extent in pixels.
    pub width: f32,
    /// Smaller render extent in pixels.
    pub height: f32,
    /// UI canvas scale multiplier; non-positive disables the scale path.
    pub ui_scale: f32,
}

impl RenderTarget {
    /// Creates a render target, swapping so width >= height.
    #[must_use]
    pub fn new(width: f32, height: f32, ui_scale: f32) -> Self {
        if width < height {
            Self {
                width: height,
                height: width,
                ui_scale,
            }
        } else {
            Self {
                width,
                height,
                ui_scale,
            }
        }
    }

    /// Whether the UI scale path is active.
    #[must_use]
    pub fn ui_scale_enabled(&self) -> bool {
        self.ui_scale > 0.0
    }
}

/// Multisampling sample count accepted by the host's quality settings.
///
/// The wire encoding also knows -1 ("leave the host default"), which maps
/// to the absence of an override rather than to a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsaaSamples {
    /// 2x multisampling.
    X2,
    /// 4x multisampling.
    X4,
    /// 8x multisampling.
    X8,
}

impl MsaaSamples {
    /// Parses the host's wire encoding (2, 4 or 8).
    #[must_use]
    pub const fn from_wire(value: i32) -> Option<Self> {
        match value {
            2 => Some(Self::X2),
            4 => Some(Self::X4),
            8 => Some(Self::X8),
            _ => None,
        }
    }

    /// The host's wire encoding for this sample count.
    #[must_use]
    pub const fn wire(self) -> i32 {
        match self {
            Self::X2 => 2,
            Self::X4 => 4,
            Self::X8 => 8,
        }
    }
}

/// Tri-state policy for the host's MSAA-allowed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MsaaPolicy {
    /// Leave the host's answer untouched.
    #[default]
    Auto,
    /// Force the query to answer "not allowed".
    Disable,
    /// Force the query to answer "allowed".
    Enable,
}

/// Antialiasing overrides, independent of geometry but sharing the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AntialiasConfig {
    /// Override for the host's global quality-settings sample count.
    pub global: Option<MsaaSamples>,
    /// Override for render-texture sample counts.
    pub render_texture: Option<MsaaSamples>,
    /// Policy for the MSAA-allowed query.
    pub allow_msaa: MsaaPolicy,
}

/// The complete geometry policy, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryConfig {
    /// Target aspect ratio, larger value first.
    pub aspect_ratio: AspectRatio,
    /// Fixed rendering resolution override, when configured.
    pub render_target: Option<RenderTarget>,
    /// Mirror the physical display resolution while full screen is active.
    pub auto_full_screen: bool,
    /// Request an aspect-correct window size once at startup.
    pub adjust_window_size: bool,
    /// Strip the resizable frame from pending window style changes.
    pub lock_window_size: bool,
    /// Target framerate override.
    pub max_fps: Option<i32>,
    /// Antialiasing overrides.
    pub antialiasing: AntialiasConfig,
    /// Graphics quality tier override.
    pub graphics_quality: Option<i32>,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: AspectRatio::default(),
            render_target: None,
            auto_full_screen: false,
            adjust_window_size: false,
            lock_window_size: false,
            max_fps: None,
            antialiasing: AntialiasConfig::default(),
            graphics_quality: None,
        }
    }
}

impl GeometryConfig {
    /// The pass-through fallback used after a fatal configuration error.
    ///
    /// No overrides are active; every entry point becomes the identity on
    /// its inputs.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Whether the UI scale path is active.
    #[must_use]
    pub fn ui_scale_enabled(&self) -> bool {
        self.render_target
            .as_ref()
            .is_some_and(RenderTarget::ui_scale_enabled)
    }

    /// Configured UI scale multiplier, if the path is active.
    #[must_use]
    pub fn ui_scale(&self) -> Option<f32> {
        self.render_target
            .as_ref()
            .filter(|target| target.ui_scale_enabled())
            .map(|target| target.ui_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_target_normalizes_order() {
        let target = RenderTarget::new(1080.0, 1920.0, -1.0);
        assert_eq!(target.width, 1920.0);
        assert_eq!(target.height, 1080.0);
    }

    #[test]
    fn test_ui_scale_disabled_when_non_positive() {
        assert!(!RenderTarget::new(1920.0, 1080.0, -1.0).ui_scale_enabled());
        assert!(!RenderTarget::new(1920.0, 1080.0, 0.0).ui_scale_enabled());
        assert!(RenderTarget::new(1920.0, 1080.0, 1.5).ui_scale_enabled());
    }

    #[test]
    fn test_msaa_wire_round_trip() {
        for samples in [MsaaSamples::X2, MsaaSamples::X4, MsaaSamples::X8] {
            assert_eq!(MsaaSamples::from_wire(samples.wire()), Some(samples));
        }
        assert_eq!(MsaaSamples::from_wire(-1), None);
        assert_eq!(MsaaSamples::from_wire(3), None);
        assert_eq!(MsaaSamples::from_wire(16), None);
    }

    #[test]
    fn test_disabled_has_no_overrides() {
        let config = GeometryConfig::disabled();
        assert!(config.render_target.is_none());
        assert!(!config.auto_full_screen);
        assert!(!config.adjust_window_size);
        assert!(!config.lock_window_size);
        assert!(config.max_fps.is_none());
        assert!(config.graphics_quality.is_none());
        assert_eq!(config.antialiasing, AntialiasConfig::default());
    }

    #[test]
    fn test_config_ui_scale_accessor() {
        let mut config = GeometryConfig::default();
        assert_eq!(config.ui_scale(), None);

        config.render_target = Some(RenderTarget::new(1920.0, 1080.0, 2.0));
        assert_eq!(config.ui_scale(), Some(2.0));

        config.render_target = Some(RenderTarget::new(1920.0, 1080.0, -1.0));
        assert_eq!(config.ui_scale(), None);
    }
}
