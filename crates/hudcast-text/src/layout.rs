#![forbid(unsafe_code)]

//! Line breaking for broadcast text.
//!
//! [`wrap_lines`] splits a message into at most [`MAX_LINES`] display
//! lines for a given wrap width, using whatever [`Backend`] measures the
//! text. Breaks prefer whitespace: after measuring the maximal prefix
//! that fits, the break point backs up to the nearest space, tab or
//! newline, so words survive intact. A word longer than the whole line
//! is cut hard instead.
//!
//! Lines are byte ranges into the original text plus their measured
//! width, so the caller can re-slice the text for drawing without
//! copying it.

use hudcast_core::{Backend, CursorFlags, TextCursor};
use smallvec::SmallVec;
use tracing::trace;

/// Display lines per broadcast; anything past this is dropped.
pub const MAX_LINES: usize = 10;

/// One display line: a byte range into the source text and its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Byte offset of the line's first byte.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    /// Measured advance width of the line.
    pub width: f32,
}

impl Line {
    /// Byte offset just past the line's last byte.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice this line back out of the text it was wrapped from.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end()]
    }
}

/// The wrapped form of one broadcast message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineLayout {
    lines: SmallVec<[Line; MAX_LINES]>,
}

impl LineLayout {
    /// Number of lines.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the layout holds no lines.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line at `index`, top to bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Iterate lines top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Total bytes covered by all lines. Less than the text length when
    /// the line cap dropped a tail.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.lines.iter().map(|line| line.len).sum()
    }

    fn push(&mut self, line: Line) {
        debug_assert!(self.lines.len() < MAX_LINES);
        self.lines.push(line);
    }
}

/// Whether `text` occupies a single line at `font_size` within
/// `wrap_width`. Embedded newlines count as line breaks.
#[must_use]
pub fn fits_on_one_line<B: Backend>(
    backend: &mut B,
    text: &str,
    wrap_width: f32,
    font_size: f32,
) -> bool {
    let mut cursor =
        TextCursor::new(0.0, 0.0, font_size, CursorFlags::empty()).with_line_width(wrap_width);
    backend.measure(&mut cursor, text);
    cursor.line_count <= 1
}

/// Wrap `text` into at most [`MAX_LINES`] lines of at most `wrap_width`.
///
/// Lines past the cap are dropped without error; an empty text yields an
/// empty layout.
#[must_use]
pub fn wrap_lines<B: Backend>(
    backend: &mut B,
    text: &str,
    wrap_width: f32,
    font_size: f32,
) -> LineLayout {
    let mut layout = LineLayout::default();
    let mut start = 0;
    while start < text.len() && layout.len() < MAX_LINES {
        let remaining = &text[start..];
        let mut cursor = stop_cursor(font_size, wrap_width);
        backend.measure(&mut cursor, remaining);

        let mut len = cursor.fitted_bytes;
        let mut width = cursor.advance_x();
        if len == 0 {
            // A glyph wider than the wrap width still has to land
            // somewhere; hard-cut one code point so the loop advances.
            len = remaining
                .chars()
                .next()
                .map_or(remaining.len(), char::len_utf8);
            let mut forced = TextCursor::new(0.0, 0.0, font_size, CursorFlags::STOP_AT_END);
            backend.measure(&mut forced, &remaining[..len]);
            width = forced.advance_x();
        } else if start + len < text.len() && !remaining[..len].ends_with('\n') {
            // The break fell mid-word; back up to the nearest whitespace
            // if one is in reach. Newline-terminated runs already broke
            // on the newline itself.
            let back = word_length_back(remaining.as_bytes(), len);
            if back > 0 && back < len {
                len -= back;
                let mut shortened = stop_cursor(font_size, wrap_width);
                backend.measure(&mut shortened, &remaining[..len]);
                width = shortened.advance_x();
            }
        }

        layout.push(Line { start, len, width });
        start += len;
    }
    trace!(
        text_bytes = text.len(),
        lines = layout.len(),
        fitted = layout.total_bytes(),
        "wrapped broadcast text"
    );
    layout
}

fn stop_cursor(font_size: f32, wrap_width: f32) -> TextCursor {
    TextCursor::new(0.0, 0.0, font_size, CursorFlags::STOP_AT_END).with_line_width(wrap_width)
}

/// Distance from the fit boundary at `fitted` back to the nearest
/// wrap-friendly byte, examining `bytes[fitted]` down to `bytes[1]`.
/// Zero when no whitespace is in reach (or the boundary itself is one).
fn word_length_back(bytes: &[u8], fitted: usize) -> usize {
    debug_assert!(fitted < bytes.len());
    (0..fitted)
        .find(|&back| is_wrap_space(bytes[fitted - back]))
        .unwrap_or(0)
}

/// Whitespace the wrapper is willing to break on. Continuation bytes of
/// multi-byte glyphs never match, so scanning raw bytes is safe.
#[inline]
fn is_wrap_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
