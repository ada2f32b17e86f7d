#![forbid(unsafe_code)]

//! The measurement/draw seam.
//!
//! The engine never touches glyphs or pixels itself; it talks to a
//! [`Backend`] through cursor-based calls. Colors travel as an explicit
//! [`Ink`] argument on every draw, so a backend holds no color state that
//! would need resetting between callers.

use crate::color::Rgba;
use crate::cursor::TextCursor;
use crate::geometry::Rect;

/// Fill and outline colors for a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ink {
    /// Glyph fill color.
    pub fill: Rgba,
    /// Glyph outline color, used by backends that render an outline pass.
    pub outline: Rgba,
}

impl Ink {
    /// Create an ink from fill and outline colors.
    #[must_use]
    pub const fn new(fill: Rgba, outline: Rgba) -> Self {
        Self { fill, outline }
    }
}

impl Default for Ink {
    /// Opaque white fill with a soft dark outline.
    fn default() -> Self {
        Self::new(Rgba::WHITE, Rgba::BLACK.with_opacity(0.3))
    }
}

/// A text measurement and drawing surface.
///
/// # Cursor contract
///
/// Both [`measure`](Backend::measure) and [`draw`](Backend::draw) consume
/// `text` from the cursor's current position and fill the cursor's output
/// fields:
///
/// - `fitted_bytes`: bytes of `text` consumed, always a whole number of
///   code points. With [`STOP_AT_END`] set, consumption stops before the
///   first glyph whose advance would cross `line_width` (a maximal fit);
///   a newline is consumed, adds no advance, and ends the run. Without
///   the flag the whole input is consumed: crossing `line_width` or
///   meeting a newline starts a new line (`line_count` grows, `x` returns
///   to the start).
/// - `line_count`: lines the consumed text occupies, starting at 1.
/// - `x`: the pen position; `cursor.advance_x()` is the rendered width.
///
/// A byte limit is imposed by slicing `text` before the call. Measuring
/// must never split a code point; callers rely on `fitted_bytes` being a
/// valid slice boundary.
///
/// [`STOP_AT_END`]: crate::cursor::CursorFlags::STOP_AT_END
pub trait Backend {
    /// Measure `text`, advancing the cursor without emitting glyphs.
    fn measure(&mut self, cursor: &mut TextCursor, text: &str);

    /// Draw `text` with the given ink, advancing the cursor identically
    /// to [`measure`](Backend::measure).
    fn draw(&mut self, cursor: &mut TextCursor, text: &str, ink: Ink);

    /// Fill `rect` with a vertical gradient from `top` to `bottom`.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
