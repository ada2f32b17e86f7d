#![forbid(unsafe_code)]

//! A deterministic, headless [`Backend`].
//!
//! `FixedMetrics` models a monospace-style face: every glyph advances
//! `font_size * GLYPH_ASPECT` per display column (East Asian wide glyphs
//! take two columns, combining marks zero). It emits nothing; draws
//! advance the cursor exactly like measures. This is what headless layout
//! and the test suites run against.

use unicode_width::UnicodeWidthChar;

use crate::backend::{Backend, Ink};
use crate::color::Rgba;
use crate::cursor::{CursorFlags, TextCursor};
use crate::geometry::Rect;

/// Monospace-style measurement backend with no output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetrics;

impl FixedMetrics {
    /// Advance per display column, as a fraction of the font size.
    pub const GLYPH_ASPECT: f32 = 0.5;

    /// Advance width of a single glyph at `font_size`.
    #[must_use]
    pub fn advance(ch: char, font_size: f32) -> f32 {
        let columns = UnicodeWidthChar::width(ch).unwrap_or(0) as f32;
        font_size * Self::GLYPH_ASPECT * columns
    }

    /// Advance width of a whole string on one line at `font_size`.
    #[must_use]
    pub fn line_advance(text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| Self::advance(ch, font_size)).sum()
    }

    // Shared traversal for measure and draw. `fitted_bytes` accumulates
    // across calls on the same cursor.
    fn run(cursor: &mut TextCursor, text: &str) {
        let stop_at_end = cursor.flags.contains(CursorFlags::STOP_AT_END);
        for ch in text.chars() {
            if ch == '\n' {
                cursor.fitted_bytes += 1;
                if stop_at_end {
                    return;
                }
                cursor.line_count += 1;
                cursor.x = cursor.start_x();
                continue;
            }
            let advance = Self::advance(ch, cursor.font_size);
            if cursor.advance_x() + advance > cursor.line_width {
                if stop_at_end {
                    return;
                }
                cursor.line_count += 1;
                cursor.x = cursor.start_x();
            }
            cursor.x += advance;
            cursor.fitted_bytes += ch.len_utf8();
        }
    }
}

impl Backend for FixedMetrics {
    fn measure(&mut self, cursor: &mut TextCursor, text: &str) {
        Self::run(cursor, text);
    }

    fn draw(&mut self, cursor: &mut TextCursor, text: &str, _ink: Ink) {
        Self::run(cursor, text);
    }

    fn fill_vertical_gradient(&mut self, _rect: Rect, _top: Rgba, _bottom: Rgba) {}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fitted_bytes_is_a_char_boundary(
            text in ".{0,40}",
            width in 0.0f32..60.0,
            font_size in 1.0f32..20.0,
        ) {
            let mut cursor = TextCursor::new(0.0, 0.0, font_size, CursorFlags::STOP_AT_END)
                .with_line_width(width);
            FixedMetrics.measure(&mut cursor, &text);
            prop_assert!(cursor.fitted_bytes <= text.len());
            prop_assert!(text.is_char_boundary(cursor.fitted_bytes));
        }

        #[test]
        fn stop_at_end_fit_is_maximal(
            text in "[a-z 漢]{0,30}",
            width in 0.0f32..40.0,
            font_size in 1.0f32..16.0,
        ) {
            let mut cursor = TextCursor::new(0.0, 0.0, font_size, CursorFlags::STOP_AT_END)
                .with_line_width(width);
            FixedMetrics.measure(&mut cursor, &text);
            if cursor.fitted_bytes < text.len() {
                let fitted = &text[..cursor.fitted_bytes];
                if !fitted.ends_with('\n') {
                    // The next glyph must genuinely not fit.
                    let next = text[cursor.fitted_bytes..].chars().next().unwrap();
                    let next_advance = FixedMetrics::advance(next, font_size);
                    prop_assert!(cursor.advance_x() + next_advance > width);
                }
            }
        }

        #[test]
        fn flow_consumes_all_input(
            text in ".{0,40}",
            width in 1.0f32..60.0,
            font_size in 1.0f32..20.0,
        ) {
            let mut cursor = TextCursor::new(0.0, 0.0, font_size, CursorFlags::empty())
                .with_line_width(width);
            FixedMetrics.measure(&mut cursor, &text);
            prop_assert_eq!(cursor.fitted_bytes, text.len());
            prop_assert!(cursor.line_count >= 1);
        }
    }
}
