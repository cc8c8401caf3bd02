//! # Framelock Common
//!
//! Common types and shared abstractions for Framelock, the display
//! geometry consistency engine.
//!
//! This crate provides the foundational types used across all Framelock
//! subsystems:
//! - Geometry primitives (resolution, orientation, aspect ratio)
//! - The frozen geometry policy configuration
//! - Opaque handles for host-owned objects
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::geometry::*;
    pub use crate::ids::*;
}

pub use prelude::*;
