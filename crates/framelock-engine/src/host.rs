//! Host environment abstraction.
//!
//! Everything the engine consumes from its host goes through this trait:
//! display state queries, window rectangle access, and UI canvas scaler
//! enumeration. Implementations wrap whatever object model the host
//! process exposes; the engine itself stays host-agnostic and testable.

use framelock_common::geometry::Resolution;
use framelock_common::ids::CanvasScalerId;

use crate::window::WindowRect;

/// The host environment's display, window and UI surface.
///
/// All queries are sampled fresh at each call; the engine never caches
/// answers because full-screen state and orientation can change between
/// calls. `move_window` and `set_canvas_scale` are the engine's only
/// outbound side effects.
pub trait GeometryHost {
    /// Current physical display resolution.
    fn current_resolution(&self) -> Resolution;

    /// Whether full screen is currently active.
    fn full_screen(&self) -> bool;

    /// The host's own portrait-orientation flag.
    ///
    /// Kept as a host query rather than derived from a resolution so the
    /// engine's interpretation stays consistent with host-side logic.
    fn portrait_display(&self) -> bool;

    /// Current window client size.
    fn client_size(&self) -> (i32, i32);

    /// Current outer window rectangle.
    fn outer_rect(&self) -> WindowRect;

    /// Requests an outer window resize.
    fn move_window(&self, rect: WindowRect);

    /// Enumerates the active UI canvas scalers for the current frame.
    ///
    /// Consumed once per triggering event; handles are not tracked across
    /// events.
    fn canvas_scalers(&self) -> Vec<CanvasScalerId>;

    /// Applies a scale factor to one canvas scaler.
    fn set_canvas_scale(&self, canvas: CanvasScalerId, factor: f32);
}
