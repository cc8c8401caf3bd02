//! Opaque handle types for host-owned objects.

use serde::{Deserialize, Serialize};

/// Handle to a host-owned UI canvas scaler.
///
/// The engine never tracks canvas identities across events; handles are
/// enumerated fresh by the host for each triggering event and consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasScalerId(u64);

impl CanvasScalerId {
    /// Creates a handle from a raw host value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw host value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}
