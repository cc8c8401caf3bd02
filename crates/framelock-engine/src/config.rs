//! Geometry configuration loading.
//!
//! The configuration document is read once at attach and frozen into a
//! [`GeometryConfig`]. Required shapes are fail-closed: a malformed aspect
//! ratio or a half-specified render target aborts the load and the engine
//! falls back to pass-through behavior. Soft inconsistencies (a render
//! target that disagrees with the configured aspect ratio) only log a
//! diagnostic; the render target stays authoritative.

use framelock_common::config::{
    AntialiasConfig, GeometryConfig, MsaaPolicy, MsaaSamples, RenderTarget,
};
use framelock_common::error::ConfigError;
use framelock_common::geometry::AspectRatio;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "framelock.toml";

/// Tolerance for the render-target versus aspect-ratio consistency check.
const ASPECT_MISMATCH_TOLERANCE: f32 = 0.001;

/// Raw configuration document, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigDocument {
    max_fps: Option<i32>,
    aspect_ratio: Option<AspectRatioField>,
    rendering_resolution: Option<RenderTargetField>,
    auto_full_screen: bool,
    adjust_window_size: bool,
    lock_window_size: bool,
    antialiasing: Option<AntialiasField>,
    graphics_quality: Option<i32>,
}

/// Aspect ratio as either a `{width, height}` table or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AspectRatioField {
    Pair { width: f32, height: f32 },
    Ratio(f32),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RenderTargetField {
    width: Option<f32>,
    height: Option<f32>,
    ui_scale: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AntialiasField {
    global: Option<i32>,
    render_texture: Option<i32>,
    allow_msaa: Option<String>,
}

/// Loads and validates configuration from a file.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<GeometryConfig, ConfigError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config = from_toml_str(&contents)?;
    info!(path = %path.as_ref().display(), "loaded geometry config");
    Ok(config)
}

/// Loads configuration, falling back to pass-through on any error.
///
/// A missing file is the quiet default case; an invalid file reports the
/// violated constraint and disables every override rather than crashing
/// the host or proceeding with an ambiguous geometry policy.
pub fn load_or_disabled<P: AsRef<Path>>(path: P) -> GeometryConfig {
    let path = path.as_ref();
    if !path.exists() {
        info!("geometry config not found, all overrides disabled");
        return GeometryConfig::disabled();
    }
    match load_from(path) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid geometry config, all overrides disabled");
            GeometryConfig::disabled()
        },
    }
}

/// Parses and validates a configuration document.
pub fn from_toml_str(contents: &str) -> Result<GeometryConfig, ConfigError> {
    let document: ConfigDocument =
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(document)
}

fn validate(document: ConfigDocument) -> Result<GeometryConfig, ConfigError> {
    let aspect_ratio = match document.aspect_ratio {
        None => AspectRatio::default(),
        Some(AspectRatioField::Pair { width, height }) => {
            for value in [width, height] {
                if value <= 0.0 {
                    return Err(ConfigError::NonPositiveAspectRatio { value });
                }
            }
            AspectRatio::new(width, height)
        },
        Some(AspectRatioField::Ratio(ratio)) => {
            if ratio <= 0.0 {
                return Err(ConfigError::NonPositiveAspectRatio { value: ratio });
            }
            AspectRatio::from_ratio(ratio)
        },
    };

    let render_target = match document.rendering_resolution {
        None => None,
        Some(field) => {
            if field.width.is_some() != field.height.is_some() {
                return Err(ConfigError::PartialRenderTarget);
            }
            let width = field.width.unwrap_or(1920.0);
            let height = field.height.unwrap_or(1080.0);
            let target = RenderTarget::new(width, height, field.ui_scale.unwrap_or(-1.0));
            let mismatch = (target.width / aspect_ratio.width
                - target.height / aspect_ratio.height)
                .abs();
            if mismatch >= ASPECT_MISMATCH_TOLERANCE {
                warn!(
                    target_width = target.width,
                    target_height = target.height,
                    "rendering_resolution does not match aspect_ratio; using it anyway"
                );
            }
            Some(target)
        },
    };

    let max_fps = match document.max_fps {
        Some(fps) if fps > 0 => Some(fps),
        Some(fps) => {
            debug!(fps, "non-positive max_fps, frame limit disabled");
            None
        },
        None => None,
    };

    let antialiasing = document
        .antialiasing
        .map_or_else(AntialiasConfig::default, validate_antialiasing);

    Ok(GeometryConfig {
        aspect_ratio,
        render_target,
        auto_full_screen: document.auto_full_screen,
        adjust_window_size: document.adjust_window_size,
        lock_window_size: document.lock_window_size,
        max_fps,
        antialiasing,
        graphics_quality: document.graphics_quality,
    })
}

fn validate_antialiasing(field: AntialiasField) -> AntialiasConfig {
    let samples = |name: &str, value: Option<i32>| {
        // -1 is the document's way of spelling "no override".
        let value = value.filter(|&v| v != -1)?;
        let parsed = MsaaSamples::from_wire(value);
        if parsed.is_none() {
            warn!(
                name,
                value, "antialiasing must be -1, 2, 4, or 8; ignoring"
            );
        }
        parsed
    };
    let allow_msaa = match field.allow_msaa.as_deref() {
        None | Some("auto") => MsaaPolicy::Auto,
        Some("disable") => MsaaPolicy::Disable,
        Some("enable") => MsaaPolicy::Enable,
        Some(other) => {
            warn!(
                value = other,
                "allow_msaa must be \"auto\", \"disable\", or \"enable\"; ignoring"
            );
            MsaaPolicy::Auto
        },
    };
    AntialiasConfig {
        global: samples("global", field.global),
        render_texture: samples("render_texture", field.render_texture),
        allow_msaa,
    }
}
