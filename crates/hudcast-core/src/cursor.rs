#![forbid(unsafe_code)]

//! The measurement cursor shared between the engine and a text backend.
//!
//! A [`TextCursor`] carries the inputs of a measure or draw call (origin,
//! font size, flags, wrap width) and receives its outputs (`x` advance,
//! `line_count`, `fitted_bytes`). Cursors are cheap `Copy` values; the
//! engine builds a fresh one per call.

use bitflags::bitflags;

bitflags! {
    /// Behavior flags for a measure or draw call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CursorFlags: u8 {
        /// Stop consuming input at the wrap-width boundary (or after a
        /// newline) instead of flowing onto further lines.
        const STOP_AT_END = 1 << 0;
    }
}

/// Cursor state for one measure or draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCursor {
    start_x: f32,
    start_y: f32,
    /// Current horizontal pen position. Backends advance this.
    pub x: f32,
    /// Current vertical pen position.
    pub y: f32,
    /// Font size in logical units.
    pub font_size: f32,
    /// Behavior flags.
    pub flags: CursorFlags,
    /// Wrap width in logical units; unbounded by default.
    pub line_width: f32,
    /// Number of lines the consumed text occupies. Starts at 1.
    pub line_count: u32,
    /// Bytes of the input consumed, always whole code points.
    pub fitted_bytes: usize,
}

impl TextCursor {
    /// Create a cursor at `(x, y)` with the given font size and flags.
    #[must_use]
    pub fn new(x: f32, y: f32, font_size: f32, flags: CursorFlags) -> Self {
        Self {
            start_x: x,
            start_y: y,
            x,
            y,
            font_size,
            flags,
            line_width: f32::INFINITY,
            line_count: 1,
            fitted_bytes: 0,
        }
    }

    /// Set the wrap width (builder style).
    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// The x position the cursor started at.
    #[inline]
    #[must_use]
    pub fn start_x(&self) -> f32 {
        self.start_x
    }

    /// The y position the cursor started at.
    #[inline]
    #[must_use]
    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    /// Horizontal distance the pen has advanced since the call began.
    ///
    /// After a measure this is the rendered width of the consumed text
    /// (of its last line, if the call flowed over several).
    #[inline]
    #[must_use]
    pub fn advance_x(&self) -> f32 {
        self.x - self.start_x
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
