#![forbid(unsafe_code)]

//! Draw-call recording for tests.
//!
//! [`RecordingBackend`] advances cursors exactly like [`FixedMetrics`] but
//! also logs every text draw and gradient fill, so tests can assert on
//! positions, colors, and call order. Only built with the `test-helpers`
//! feature.

use crate::backend::{Backend, Ink};
use crate::color::Rgba;
use crate::cursor::TextCursor;
use crate::fixed::FixedMetrics;
use crate::geometry::Rect;

/// One recorded text draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    /// Pen x at the start of the call.
    pub x: f32,
    /// Pen y at the start of the call.
    pub y: f32,
    /// Font size of the call.
    pub font_size: f32,
    /// Wrap width in effect.
    pub line_width: f32,
    /// The text passed to the call.
    pub text: String,
    /// The ink passed to the call.
    pub ink: Ink,
}

/// One recorded gradient fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientFill {
    pub rect: Rect,
    pub top: Rgba,
    pub bottom: Rgba,
}

/// A [`Backend`] that records draw calls while measuring like
/// [`FixedMetrics`].
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Text draws, in call order.
    pub draws: Vec<TextDraw>,
    /// Gradient fills, in call order.
    pub gradients: Vec<GradientFill>,
}

impl RecordingBackend {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.draws.clear();
        self.gradients.clear();
    }

    /// Concatenation of all drawn text, in call order.
    #[must_use]
    pub fn drawn_text(&self) -> String {
        self.draws.iter().map(|d| d.text.as_str()).collect()
    }
}

impl Backend for RecordingBackend {
    fn measure(&mut self, cursor: &mut TextCursor, text: &str) {
        FixedMetrics.measure(cursor, text);
    }

    fn draw(&mut self, cursor: &mut TextCursor, text: &str, ink: Ink) {
        self.draws.push(TextDraw {
            x: cursor.x,
            y: cursor.y,
            font_size: cursor.font_size,
            line_width: cursor.line_width,
            text: text.to_owned(),
            ink,
        });
        FixedMetrics.draw(cursor, text, ink);
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgba, bottom: Rgba) {
        self.gradients.push(GradientFill { rect, top, bottom });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
