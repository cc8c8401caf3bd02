//! The geometry engine: host-facing entry points.
//!
//! Each entry point is a thin wiring of one kernel policy to fresh host
//! state. The entry points may be invoked in any order, any number of
//! times, from different host threads; the frozen configuration makes
//! that safe without locking, and the one piece of cross-call memory
//! (resize history) sits behind a mutex because the engine cannot verify
//! the host's serialized-delivery contract for window messages.

use framelock_common::config::{GeometryConfig, MsaaPolicy, MsaaSamples};
use framelock_common::geometry::{Orientation, Resolution};
use framelock_common::ids::CanvasScalerId;
use framelock_kernel::policy::{self, Axis, DisplaySnapshot, ResolutionRequest};
use framelock_kernel::resize::ResizeHysteresis;
use framelock_kernel::{aspect, scale};
use glam::{Vec2, Vec3};
use parking_lot::Mutex;

use crate::hooks::{self, HookRegistry, InstallReport};
use crate::host::GeometryHost;
use crate::window::{WindowMessage, WindowRect, WindowStyle};

/// The display geometry consistency engine.
///
/// Constructed once at attach with a frozen [`GeometryConfig`]; lives for
/// the process lifetime.
#[derive(Debug)]
pub struct GeometryEngine {
    config: GeometryConfig,
    resize: Mutex<ResizeHysteresis>,
}

impl GeometryEngine {
    /// Creates the engine for a frozen configuration.
    #[must_use]
    pub fn new(config: GeometryConfig) -> Self {
        Self {
            config,
            resize: Mutex::new(ResizeHysteresis::new()),
        }
    }

    /// The frozen configuration.
    #[must_use]
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Installs every enabled feature against the registry.
    pub fn install(&self, registry: &mut dyn HookRegistry) -> InstallReport {
        hooks::install_features(&self.config, registry)
    }

    fn snapshot(&self, host: &dyn GeometryHost) -> DisplaySnapshot {
        DisplaySnapshot {
            physical: host.current_resolution(),
            full_screen: host.full_screen(),
            portrait: host.portrait_display(),
        }
    }

    /// Target framerate interceptor.
    #[must_use]
    pub fn target_framerate(&self, requested: i32) -> i32 {
        self.config.max_fps.unwrap_or(requested)
    }

    /// Screen width query interceptor.
    #[must_use]
    pub fn screen_width(&self, host: &dyn GeometryHost, native: i32) -> i32 {
        policy::resolve_dimension(native, Axis::Width, &self.config, &self.snapshot(host))
    }

    /// Screen height query interceptor.
    #[must_use]
    pub fn screen_height(&self, host: &dyn GeometryHost, native: i32) -> i32 {
        policy::resolve_dimension(native, Axis::Height, &self.config, &self.snapshot(host))
    }

    /// Set-resolution request interceptor.
    #[must_use]
    pub fn set_resolution(
        &self,
        host: &dyn GeometryHost,
        request: ResolutionRequest,
    ) -> ResolutionRequest {
        policy::intercept_set_resolution(request, &self.config, host.current_resolution())
    }

    /// Optimized-window-size query interceptor.
    #[must_use]
    pub fn optimized_window_size(
        &self,
        host: &dyn GeometryHost,
        base: Vec3,
        width: i32,
        height: i32,
    ) -> Vec3 {
        aspect::optimized_window_size(
            base,
            width,
            height,
            &self.config.aspect_ratio,
            Orientation::from_portrait(host.portrait_display()),
        )
    }

    /// The screen size as the host would see it through the query
    /// interceptors, with a zero native fallback.
    fn reported_screen(&self, host: &dyn GeometryHost) -> Resolution {
        let snapshot = self.snapshot(host);
        let width = policy::resolve_dimension(0, Axis::Width, &self.config, &snapshot);
        let height = policy::resolve_dimension(0, Axis::Height, &self.config, &snapshot);
        Resolution::new(width.max(0) as u32, height.max(0) as u32)
    }

    fn apply_canvas_scale(&self, host: &dyn GeometryHost, canvas: CanvasScalerId) {
        let Some(multiplier) = self.config.ui_scale() else {
            return;
        };
        if let Some(factor) = scale::scale_factor(self.reported_screen(host), multiplier) {
            host.set_canvas_scale(canvas, factor);
        }
    }

    /// UI reference-resolution interceptor.
    ///
    /// Applies the UI scale to the triggering canvas when the scale path
    /// is active, then adjusts the reference size: under auto-full-screen
    /// with matching orientation it mirrors the physical display; with a
    /// render target configured it recomputes x as the aspect-fit
    /// companion of y.
    #[must_use]
    pub fn reference_resolution(
        &self,
        host: &dyn GeometryHost,
        canvas: CanvasScalerId,
        requested: Vec2,
    ) -> Vec2 {
        if self.config.ui_scale_enabled() {
            self.apply_canvas_scale(host, canvas);
        }
        if self.config.auto_full_screen {
            let physical = host.current_resolution();
            let requested_orientation = Orientation::of(requested.x, requested.y);
            if physical.orientation() == requested_orientation {
                return Vec2::new(physical.width as f32, physical.height as f32);
            }
            requested
        } else if self.config.render_target.is_some() {
            let orientation = Orientation::of(requested.x, requested.y);
            Vec2::new(
                aspect::companion_width(requested.y, &self.config.aspect_ratio, orientation),
                requested.y,
            )
        } else {
            requested
        }
    }

    /// UI resize interceptor: rescale every active canvas scaler.
    pub fn resize_ui(&self, host: &dyn GeometryHost) {
        for canvas in host.canvas_scalers() {
            self.apply_canvas_scale(host, canvas);
        }
    }

    /// Startup window-size request for the adjust-window-size toggle.
    ///
    /// Returns a windowed request slightly shorter than the physical
    /// display with the aspect-fit companion width for a portrait frame,
    /// or `None` when the toggle is off.
    #[must_use]
    pub fn initial_window_request(&self, host: &dyn GeometryHost) -> Option<ResolutionRequest> {
        if !self.config.adjust_window_size {
            return None;
        }
        let physical = host.current_resolution();
        let height = physical.height as f32 - 100.0;
        let width = aspect::companion_width(height, &self.config.aspect_ratio, Orientation::Portrait);
        Some(ResolutionRequest {
            width: width as i32,
            height: height as i32,
            full_screen: false,
        })
    }

    /// Window message interceptor.
    ///
    /// Returns a rewritten style word for a pending style change when the
    /// window is locked against manual resizing; every message is still
    /// forwarded by the host afterward.
    pub fn handle_window_message(
        &self,
        host: &dyn GeometryHost,
        message: WindowMessage,
    ) -> Option<WindowStyle> {
        match message {
            WindowMessage::StyleChanged => {
                // One-shot correction of any mismatch introduced before
                // interception was in place.
                if self.resize.lock().take_initial_pass() {
                    let (width, height) = host.client_size();
                    self.correct_window(host, width, height);
                }
                None
            },
            WindowMessage::StyleChanging { style } => {
                if self.config.lock_window_size {
                    Some(style.without_thick_frame())
                } else {
                    None
                }
            },
            WindowMessage::SizeRestored { width, height } => {
                self.correct_window(host, width, height);
                None
            },
            WindowMessage::Other => None,
        }
    }

    /// Runs the hysteresis transition and requests the outer resize.
    fn correct_window(&self, host: &dyn GeometryHost, current_width: i32, current_height: i32) {
        let ratio = self
            .config
            .aspect_ratio
            .ratio(Orientation::from_portrait(host.portrait_display()));
        let (width, height) =
            self.resize
                .lock()
                .adjust(current_width as f32, current_height as f32, ratio);

        let rect = host.outer_rect();
        let outer_width = rect.width - current_width + width as i32;
        let outer_height = rect.height - current_height + height as i32;
        if outer_width != rect.width || outer_height != rect.height {
            host.move_window(WindowRect::new(rect.x, rect.y, outer_width, outer_height));
        }
    }

    /// Global antialiasing setter interceptor.
    #[must_use]
    pub fn global_antialiasing(&self, requested: i32) -> i32 {
        self.config
            .antialiasing
            .global
            .map_or(requested, MsaaSamples::wire)
    }

    /// Render-texture antialiasing setter interceptor.
    #[must_use]
    pub fn render_texture_antialiasing(&self, requested: i32) -> i32 {
        self.config
            .antialiasing
            .render_texture
            .map_or(requested, MsaaSamples::wire)
    }

    /// MSAA-allowed query interceptor.
    #[must_use]
    pub fn allow_msaa(&self, requested: bool) -> bool {
        match self.config.antialiasing.allow_msaa {
            MsaaPolicy::Auto => requested,
            MsaaPolicy::Disable => false,
            MsaaPolicy::Enable => true,
        }
    }

    /// Graphics quality interceptor.
    #[must_use]
    pub fn graphics_quality(&self, requested: i32) -> i32 {
        self.config.graphics_quality.unwrap_or(requested)
    }
}
