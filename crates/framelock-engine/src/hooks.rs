//! Hook-point registration.
//!
//! The mechanism that intercepts host entry points (binary hooking,
//! virtual dispatch, function pointers) is an external capability; the
//! engine only names the interception sites and drives per-feature
//! installation against the [`HookRegistry`] abstraction. A feature that
//! fails to install is disabled on its own — every other feature still
//! activates.

use framelock_common::config::{GeometryConfig, MsaaPolicy};
use framelock_common::error::SetupError;
use tracing::{info, warn};

/// An interception site in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Target framerate setter.
    TargetFramerate,
    /// Resolution-change request.
    SetResolution,
    /// Screen width query.
    ScreenWidth,
    /// Screen height query.
    ScreenHeight,
    /// UI reference resolution setter.
    ReferenceResolution,
    /// Optimized window size query.
    OptimizedWindowSize,
    /// Native window procedure.
    WindowProc,
    /// UI resize notification.
    ResizeUi,
    /// Global antialiasing setter.
    GlobalAntialiasing,
    /// Render-texture antialiasing setter.
    RenderTextureAntialiasing,
    /// MSAA-allowed query.
    MsaaQuery,
    /// Graphics quality application.
    GraphicsQuality,
}

impl HookPoint {
    /// Stable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TargetFramerate => "target_framerate",
            Self::SetResolution => "set_resolution",
            Self::ScreenWidth => "screen_width",
            Self::ScreenHeight => "screen_height",
            Self::ReferenceResolution => "reference_resolution",
            Self::OptimizedWindowSize => "optimized_window_size",
            Self::WindowProc => "window_proc",
            Self::ResizeUi => "resize_ui",
            Self::GlobalAntialiasing => "global_antialiasing",
            Self::RenderTextureAntialiasing => "render_texture_antialiasing",
            Self::MsaaQuery => "msaa_query",
            Self::GraphicsQuality => "graphics_quality",
        }
    }
}

/// Registers engine behavior at host interception sites.
///
/// Contract: after a successful `install`, the host calls the matching
/// engine entry point in place of the original, and the replacement is
/// able to call through to the original.
pub trait HookRegistry {
    /// Installs the hook for one interception site.
    fn install(&mut self, point: HookPoint) -> Result<(), SetupError>;
}

/// Independently-toggled feature groups.
///
/// Each feature owns the hook points its configuration toggle gates;
/// installation failures are isolated at this granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Window geometry consistency: resize hysteresis, resolution-set
    /// interception and the optimized-window-size rewrite. Always active.
    WindowGeometry,
    /// Resolution query overrides and UI reference resolution.
    ResolutionOverride,
    /// UI canvas rescaling on UI resize events.
    UiRescale,
    /// Target framerate override.
    FrameLimit,
    /// Global antialiasing override.
    GlobalAntialiasing,
    /// Render-texture antialiasing override.
    RenderTextureAntialiasing,
    /// MSAA-allowed policy.
    MsaaOverride,
    /// Graphics quality tier override.
    QualityOverride,
}

impl Feature {
    /// Every feature, in installation order.
    pub const ALL: [Self; 8] = [
        Self::WindowGeometry,
        Self::ResolutionOverride,
        Self::UiRescale,
        Self::FrameLimit,
        Self::GlobalAntialiasing,
        Self::RenderTextureAntialiasing,
        Self::MsaaOverride,
        Self::QualityOverride,
    ];

    /// Stable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WindowGeometry => "window_geometry",
            Self::ResolutionOverride => "resolution_override",
            Self::UiRescale => "ui_rescale",
            Self::FrameLimit => "frame_limit",
            Self::GlobalAntialiasing => "global_antialiasing",
            Self::RenderTextureAntialiasing => "render_texture_antialiasing",
            Self::MsaaOverride => "msaa_override",
            Self::QualityOverride => "quality_override",
        }
    }

    /// The hook points this feature installs.
    #[must_use]
    pub const fn hook_points(self) -> &'static [HookPoint] {
        match self {
            Self::WindowGeometry => &[
                HookPoint::OptimizedWindowSize,
                HookPoint::WindowProc,
                HookPoint::SetResolution,
            ],
            Self::ResolutionOverride => &[
                HookPoint::ScreenWidth,
                HookPoint::ScreenHeight,
                HookPoint::ReferenceResolution,
            ],
            Self::UiRescale => &[HookPoint::ResizeUi],
            Self::FrameLimit => &[HookPoint::TargetFramerate],
            Self::GlobalAntialiasing => &[HookPoint::GlobalAntialiasing],
            Self::RenderTextureAntialiasing => &[HookPoint::RenderTextureAntialiasing],
            Self::MsaaOverride => &[HookPoint::MsaaQuery],
            Self::QualityOverride => &[HookPoint::GraphicsQuality],
        }
    }

    /// Whether the configuration toggles this feature on.
    #[must_use]
    pub fn enabled(self, config: &GeometryConfig) -> bool {
        match self {
            Self::WindowGeometry => true,
            Self::ResolutionOverride => config.auto_full_screen || config.render_target.is_some(),
            Self::UiRescale => config.render_target.is_some(),
            Self::FrameLimit => config.max_fps.is_some(),
            Self::GlobalAntialiasing => config.antialiasing.global.is_some(),
            Self::RenderTextureAntialiasing => config.antialiasing.render_texture.is_some(),
            Self::MsaaOverride => config.antialiasing.allow_msaa != MsaaPolicy::Auto,
            Self::QualityOverride => config.graphics_quality.is_some(),
        }
    }
}

/// Outcome of a per-feature installation pass.
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Features whose hook points all installed.
    pub installed: Vec<Feature>,
    /// Features disabled by an installation failure.
    pub failed: Vec<(Feature, SetupError)>,
    /// Features whose configuration toggle was off.
    pub skipped: Vec<Feature>,
}

impl InstallReport {
    /// Whether a feature ended up active.
    #[must_use]
    pub fn is_active(&self, feature: Feature) -> bool {
        self.installed.contains(&feature)
    }
}

/// Installs every enabled feature, isolating failures per feature.
pub fn install_features(config: &GeometryConfig, registry: &mut dyn HookRegistry) -> InstallReport {
    let mut report = InstallReport::default();
    for feature in Feature::ALL {
        if !feature.enabled(config) {
            report.skipped.push(feature);
            continue;
        }
        match install_feature(feature, registry) {
            Ok(()) => {
                info!(feature = feature.name(), "feature installed");
                report.installed.push(feature);
            },
            Err(err) => {
                warn!(feature = feature.name(), %err, "feature disabled, continuing without it");
                report.failed.push((feature, err));
            },
        }
    }
    report
}

fn install_feature(feature: Feature, registry: &mut dyn HookRegistry) -> Result<(), SetupError> {
    for &point in feature.hook_points() {
        registry.install(point)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use framelock_common::config::{MsaaSamples, RenderTarget};

    /// Registry that rejects a chosen set of hook points.
    struct FlakyRegistry {
        rejected: Vec<HookPoint>,
        attempted: Vec<HookPoint>,
    }

    impl FlakyRegistry {
        fn rejecting(rejected: Vec<HookPoint>) -> Self {
            Self {
                rejected,
                attempted: Vec::new(),
            }
        }
    }

    impl HookRegistry for FlakyRegistry {
        fn install(&mut self, point: HookPoint) -> Result<(), SetupError> {
            self.attempted.push(point);
            if self.rejected.contains(&point) {
                Err(SetupError::MissingTarget {
                    point: point.name().into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn full_config() -> GeometryConfig {
        GeometryConfig {
            render_target: Some(RenderTarget::new(1920.0, 1080.0, 1.0)),
            auto_full_screen: true,
            max_fps: Some(60),
            ..GeometryConfig::default()
        }
    }

    #[test]
    fn test_window_geometry_always_enabled() {
        assert!(Feature::WindowGeometry.enabled(&GeometryConfig::disabled()));
    }

    #[test]
    fn test_toggles_gate_features() {
        let disabled = GeometryConfig::disabled();
        assert!(!Feature::ResolutionOverride.enabled(&disabled));
        assert!(!Feature::UiRescale.enabled(&disabled));
        assert!(!Feature::FrameLimit.enabled(&disabled));

        let mut config = GeometryConfig::disabled();
        config.auto_full_screen = true;
        assert!(Feature::ResolutionOverride.enabled(&config));
        assert!(!Feature::UiRescale.enabled(&config));

        config.antialiasing.global = Some(MsaaSamples::X4);
        assert!(Feature::GlobalAntialiasing.enabled(&config));
    }

    #[test]
    fn test_install_all_enabled() {
        let config = full_config();
        let mut registry = FlakyRegistry::rejecting(Vec::new());
        let report = install_features(&config, &mut registry);

        assert!(report.is_active(Feature::WindowGeometry));
        assert!(report.is_active(Feature::ResolutionOverride));
        assert!(report.is_active(Feature::UiRescale));
        assert!(report.is_active(Feature::FrameLimit));
        assert!(report.failed.is_empty());
        assert!(report.skipped.contains(&Feature::QualityOverride));
    }

    #[test]
    fn test_failed_feature_does_not_block_others() {
        let config = full_config();
        let mut registry = FlakyRegistry::rejecting(vec![HookPoint::ScreenWidth]);
        let report = install_features(&config, &mut registry);

        assert!(!report.is_active(Feature::ResolutionOverride));
        assert_eq!(report.failed.len(), 1);
        // Everything else still came up.
        assert!(report.is_active(Feature::WindowGeometry));
        assert!(report.is_active(Feature::UiRescale));
        assert!(report.is_active(Feature::FrameLimit));
        // The UI rescale hook was attempted even after the earlier failure.
        assert!(registry.attempted.contains(&HookPoint::ResizeUi));
    }

    #[test]
    fn test_disabled_config_installs_only_window_geometry() {
        let config = GeometryConfig::disabled();
        let mut registry = FlakyRegistry::rejecting(Vec::new());
        let report = install_features(&config, &mut registry);

        assert_eq!(report.installed, vec![Feature::WindowGeometry]);
        assert_eq!(report.skipped.len(), Feature::ALL.len() - 1);
    }
}
