//! Platform-neutral window message model.
//!
//! The host's message pump decodes its native messages into
//! [`WindowMessage`] values before handing them to the engine. The engine
//! never swallows a message: it returns at most a rewritten style word,
//! and the host always forwards to the original handler afterward.

/// Outer window rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Outer width including frame.
    pub width: i32,
    /// Outer height including frame.
    pub height: i32,
}

impl WindowRect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Native window style word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStyle(u32);

impl WindowStyle {
    /// Style bit granting the thick resizable frame.
    pub const THICK_FRAME: u32 = 0x0004_0000;

    /// Wraps a raw style word.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw style word.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether the style grants the thick resizable frame.
    #[must_use]
    pub const fn has_thick_frame(self) -> bool {
        self.0 & Self::THICK_FRAME != 0
    }

    /// The same style with the thick resizable frame stripped.
    #[must_use]
    pub const fn without_thick_frame(self) -> Self {
        Self(self.0 & !Self::THICK_FRAME)
    }
}

/// A decoded native window message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    /// The client area changed size through a plain restore/drag
    /// (minimize and maximize transitions are not decoded into this).
    SizeRestored {
        /// New client width.
        width: i32,
        /// New client height.
        height: i32,
    },
    /// A style change is pending; the style word may be rewritten before
    /// the host applies it.
    StyleChanging {
        /// The style the host is about to apply.
        style: WindowStyle,
    },
    /// A style change was applied.
    StyleChanged,
    /// Any message the engine has no interest in.
    Other,
}
