//! Resolution override and set-resolution interception policies.
//!
//! Both policies are pure functions of the frozen configuration and a
//! fresh display snapshot. Nothing here caches: full-screen state can
//! change between calls, so every query re-evaluates from scratch.

use framelock_common::config::GeometryConfig;
use framelock_common::geometry::{Orientation, Resolution};

/// Which axis of the geometry a query is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal extent.
    Width,
    /// The vertical extent.
    Height,
}

/// Host display state sampled at the moment of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// Current physical display resolution.
    pub physical: Resolution,
    /// Whether the host reports full screen as currently active.
    pub full_screen: bool,
    /// Whether the host reports the portrait (virtual) frame of reference.
    pub portrait: bool,
}

/// A resize request crossing the set-resolution entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Requested width in pixels.
    pub width: i32,
    /// Requested height in pixels.
    pub height: i32,
    /// Whether the caller asked for full screen.
    pub full_screen: bool,
}

/// Resolves one axis of a resolution query.
///
/// Decision order, first match wins:
/// 1. Auto-full-screen active and the host is full screen: mirror the
///    physical display exactly, bypassing aspect and orientation logic.
/// 2. A fixed render target is configured: return its value for this
///    axis, with the axes swapped under portrait orientation.
/// 3. The host's original answer.
#[must_use]
pub fn resolve_dimension(
    native: i32,
    axis: Axis,
    config: &GeometryConfig,
    snapshot: &DisplaySnapshot,
) -> i32 {
    if config.auto_full_screen && snapshot.full_screen {
        return match axis {
            Axis::Width => snapshot.physical.width as i32,
            Axis::Height => snapshot.physical.height as i32,
        };
    }
    if let Some(target) = &config.render_target {
        let value = match (axis, snapshot.portrait) {
            (Axis::Width, false) | (Axis::Height, true) => target.width,
            (Axis::Width, true) | (Axis::Height, false) => target.height,
        };
        return value as i32;
    }
    native
}

/// Intercepts a set-resolution request.
///
/// Under auto-full-screen, a request whose orientation matches the
/// physical display is read as a fullscreen-equivalent resize: it is
/// overridden to the physical resolution with full screen forced on. An
/// orientation mismatch means a rotation is in flight and the request
/// passes through unchanged. Idempotent: re-submitting a matched output
/// yields the same output.
#[must_use]
pub fn intercept_set_resolution(
    request: ResolutionRequest,
    config: &GeometryConfig,
    physical: Resolution,
) -> ResolutionRequest {
    if config.auto_full_screen {
        let display = physical.orientation();
        let window = Orientation::of(request.width as f32, request.height as f32);
        if display == window {
            return ResolutionRequest {
                width: physical.width as i32,
                height: physical.height as i32,
                full_screen: true,
            };
        }
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use framelock_common::config::RenderTarget;

    fn snapshot(physical: Resolution, full_screen: bool, portrait: bool) -> DisplaySnapshot {
        DisplaySnapshot {
            physical,
            full_screen,
            portrait,
        }
    }

    fn config_with_target(width: f32, height: f32) -> GeometryConfig {
        GeometryConfig {
            render_target: Some(RenderTarget::new(width, height, -1.0)),
            ..GeometryConfig::default()
        }
    }

    #[test]
    fn test_pass_through_without_overrides() {
        let config = GeometryConfig::disabled();
        let snap = snapshot(Resolution::new(2560, 1440), false, false);
        assert_eq!(resolve_dimension(640, Axis::Width, &config, &snap), 640);
        assert_eq!(resolve_dimension(480, Axis::Height, &config, &snap), 480);
    }

    #[test]
    fn test_full_screen_mirrors_hardware() {
        let config = GeometryConfig {
            auto_full_screen: true,
            ..config_with_target(1280.0, 720.0)
        };
        let snap = snapshot(Resolution::new(2560, 1440), true, false);
        // Full screen wins over the configured render target.
        assert_eq!(resolve_dimension(640, Axis::Width, &config, &snap), 2560);
        assert_eq!(resolve_dimension(480, Axis::Height, &config, &snap), 1440);
    }

    #[test]
    fn test_render_target_axis_swap_in_portrait() {
        let config = config_with_target(1920.0, 1080.0);
        let portrait = snapshot(Resolution::new(1080, 1920), false, true);
        assert_eq!(resolve_dimension(640, Axis::Width, &config, &portrait), 1080);
        assert_eq!(
            resolve_dimension(480, Axis::Height, &config, &portrait),
            1920
        );

        let landscape = snapshot(Resolution::new(1920, 1080), false, false);
        assert_eq!(
            resolve_dimension(640, Axis::Width, &config, &landscape),
            1920
        );
        assert_eq!(
            resolve_dimension(480, Axis::Height, &config, &landscape),
            1080
        );
    }

    #[test]
    fn test_resolve_dimension_is_deterministic() {
        let config = GeometryConfig {
            auto_full_screen: true,
            ..config_with_target(1920.0, 1080.0)
        };
        let snap = snapshot(Resolution::new(3840, 2160), true, false);
        let first = resolve_dimension(100, Axis::Width, &config, &snap);
        for _ in 0..5 {
            assert_eq!(resolve_dimension(100, Axis::Width, &config, &snap), first);
        }
    }

    #[test]
    fn test_set_resolution_orientation_mismatch_passes_through() {
        let config = GeometryConfig {
            auto_full_screen: true,
            ..GeometryConfig::default()
        };
        let request = ResolutionRequest {
            width: 1920,
            height: 1080,
            full_screen: false,
        };
        let out = intercept_set_resolution(request, &config, Resolution::new(1080, 1920));
        assert_eq!(out, request);
        assert!(!out.full_screen);
    }

    #[test]
    fn test_set_resolution_orientation_match_forces_full_screen() {
        let config = GeometryConfig {
            auto_full_screen: true,
            ..GeometryConfig::default()
        };
        let request = ResolutionRequest {
            width: 1280,
            height: 720,
            full_screen: false,
        };
        let physical = Resolution::new(2560, 1440);
        let out = intercept_set_resolution(request, &config, physical);
        assert_eq!(out.width, 2560);
        assert_eq!(out.height, 1440);
        assert!(out.full_screen);
    }

    #[test]
    fn test_set_resolution_is_idempotent() {
        let config = GeometryConfig {
            auto_full_screen: true,
            ..GeometryConfig::default()
        };
        let physical = Resolution::new(2560, 1440);
        let first = intercept_set_resolution(
            ResolutionRequest {
                width: 800,
                height: 600,
                full_screen: false,
            },
            &config,
            physical,
        );
        let second = intercept_set_resolution(first, &config, physical);
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_resolution_disabled_passes_through() {
        let request = ResolutionRequest {
            width: 800,
            height: 600,
            full_screen: true,
        };
        let out = intercept_set_resolution(
            request,
            &GeometryConfig::disabled(),
            Resolution::new(2560, 1440),
        );
        assert_eq!(out, request);
    }
}
