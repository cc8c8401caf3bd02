//! Error types for Framelock.

use thiserror::Error;

/// Top-level error type for Framelock operations.
#[derive(Debug, Error)]
pub enum FramelockError {
    /// Configuration loading or validation errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Hook installation errors
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
}

/// Configuration loading and validation errors.
///
/// All of these are fatal to the section that produced them: the engine
/// falls back to pass-through behavior rather than proceeding with an
/// ambiguous geometry policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Aspect ratio given as a non-positive number or with a non-positive axis
    #[error("aspect_ratio must be positive, got {value}")]
    NonPositiveAspectRatio {
        /// The offending value
        value: f32,
    },

    /// Only one of the render target dimensions was supplied
    #[error("rendering_resolution width and height must be specified together")]
    PartialRenderTarget,

    /// Document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Hook installation errors.
///
/// Installation is all-or-nothing per feature, never per call; a failure
/// here disables one feature and leaves every other feature untouched.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The interception target for a hook point could not be located
    #[error("hook target not found for {point}")]
    MissingTarget {
        /// Name of the hook point
        point: String,
    },

    /// The registry located the target but could not install the hook
    #[error("hook installation failed for {point}: {reason}")]
    InstallFailed {
        /// Name of the hook point
        point: String,
        /// Registry-provided failure description
        reason: String,
    },
}

/// Result type alias for Framelock operations.
pub type FramelockResult<T> = Result<T, FramelockError>;
