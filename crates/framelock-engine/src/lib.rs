//! # Framelock Engine
//!
//! Host wiring for the display geometry consistency engine.
//!
//! This crate ties the kernel policies to a host environment:
//! - Configuration loading and validation ([`config`])
//! - The host abstraction the engine samples and calls back into
//!   ([`host`])
//! - Hook-point registration with per-feature failure isolation
//!   ([`hooks`])
//! - The [`engine::GeometryEngine`] entry points themselves
//!
//! A typical host attaches like this:
//!
//! ```no_run
//! use framelock_engine::config;
//! use framelock_engine::engine::GeometryEngine;
//!
//! let config = config::load_or_disabled("framelock.toml");
//! let engine = GeometryEngine::new(config);
//! // engine.install(&mut registry) wires the host's interception
//! // mechanism; each host callback then calls one engine entry point.
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod engine;
pub mod hooks;
pub mod host;
pub mod window;

pub use engine::GeometryEngine;
pub use hooks::{Feature, HookPoint, HookRegistry, InstallReport};
pub use host::GeometryHost;
pub use window::{WindowMessage, WindowRect, WindowStyle};
