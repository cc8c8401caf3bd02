//! Window resize hysteresis.
//!
//! Naive aspect correction oscillates when a user drag changes both
//! dimensions in one gesture: each correction triggers another resize
//! notification. Comparing the new rectangle against the previously
//! accepted size identifies which axis the user is actively driving, and
//! the other axis is derived from the target ratio.

use tracing::debug;

/// Cross-call memory for the resize handler.
///
/// Single instance per process, seeded from the first observed window
/// size. The host contract is serialized delivery of window messages;
/// callers that cannot guarantee one thread wrap this in a mutex.
#[derive(Debug, Default)]
pub struct ResizeHysteresis {
    last: Option<(f32, f32)>,
    initial_pass_done: bool,
}

impl ResizeHysteresis {
    /// Creates the handler with no observed history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last accepted width/height, if any size was observed yet.
    #[must_use]
    pub fn last_accepted(&self) -> Option<(f32, f32)> {
        self.last
    }

    /// Runs the hysteresis transition for a size-changed notification.
    ///
    /// `ratio` is the target aspect ratio for the current orientation.
    /// Returns the accepted width/height pair; history is seeded from the
    /// first observation and updated to the accepted pair on every call.
    /// Feeding a stable rectangle twice produces no further change.
    pub fn adjust(&mut self, current_width: f32, current_height: f32, ratio: f32) -> (f32, f32) {
        let (last_width, last_height) = self.last.unwrap_or((current_width, current_height));
        let mut width = current_width;
        let mut height = current_height;

        let new_ratio = width / height;
        if new_ratio > ratio && (height >= last_height || width < last_width) {
            // Too wide and the user is driving the width: derive height.
            height = width / ratio;
        } else if new_ratio < ratio && (width >= last_width || height < last_height) {
            // Too tall and the user is driving the height: derive width.
            width = height * ratio;
        }

        if width != current_width || height != current_height {
            debug!(
                current_width,
                current_height, width, height, "resize corrected toward target ratio"
            );
        }
        self.last = Some((width, height));
        (width, height)
    }

    /// Latches the one-shot correction run on the first style change.
    ///
    /// Returns true exactly once per process lifetime; the latch is never
    /// reset.
    pub fn take_initial_pass(&mut self) -> bool {
        if self.initial_pass_done {
            false
        } else {
            self.initial_pass_done = true;
            true
        }
    }
}
