#![forbid(unsafe_code)]

//! Parsed broadcast payloads.
//!
//! A [`BroadcastPayload`] is what the markup parser produces and the
//! render path consumes: a bounded plain-text buffer, an ordered list of
//! color spans, and the arrival timestamp. Buffers are pre-sized and
//! capacity-checked; overflow drops input silently instead of growing.

use std::time::Duration;

use hudcast_core::Rgba;

/// Plain-text capacity in bytes.
pub const MAX_MESSAGE_BYTES: usize = 127;
/// Span capacity, counting the seeded default span.
pub const MAX_COLOR_SPANS: usize = 128;

/// A color effective from `start` until the next span's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpan {
    /// Byte offset into the plain text where this color takes effect.
    pub start: usize,
    /// The span's color, opaque.
    pub color: Rgba,
}

/// The covering color at some offset, with the extent of its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRun {
    /// Color covering the queried offset.
    pub color: Rgba,
    /// Byte offset where the next span takes over, `None` through
    /// end-of-text.
    pub end: Option<usize>,
}

/// Ordered color spans with guaranteed full coverage.
///
/// The list is seeded with a white span at offset 0, so every byte offset
/// resolves to a color. Starts are non-decreasing in insertion order;
/// with equal starts, the later span wins lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanList {
    spans: Vec<ColorSpan>,
}

impl SpanList {
    /// Create a list holding only the default white span at offset 0.
    #[must_use]
    pub fn new() -> Self {
        let mut spans = Vec::with_capacity(MAX_COLOR_SPANS);
        spans.push(ColorSpan {
            start: 0,
            color: Rgba::WHITE,
        });
        Self { spans }
    }

    /// Number of spans, never less than 1.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Always false; the default span cannot be removed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The span at `index`, in insertion order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ColorSpan> {
        self.spans.get(index)
    }

    /// Iterate spans in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorSpan> {
        self.spans.iter()
    }

    /// Append a span starting at `start`. Silently dropped at capacity.
    pub fn push(&mut self, start: usize, color: Rgba) {
        debug_assert!(
            self.spans.last().is_none_or(|s| s.start <= start),
            "span starts must be non-decreasing"
        );
        if self.spans.len() < MAX_COLOR_SPANS {
            self.spans.push(ColorSpan { start, color });
        }
    }

    /// Resolve the color covering `offset`: the last span whose start is
    /// `<= offset`, and the start of the first span past it.
    ///
    /// The seeded default span makes this total. A list without coverage
    /// is an internal logic error: debug builds assert, release builds
    /// fall back to white.
    #[must_use]
    pub fn run_at(&self, offset: usize) -> ColorRun {
        let mut color = None;
        let mut end = None;
        for span in &self.spans {
            if span.start <= offset {
                color = Some(span.color);
            } else {
                end = Some(span.start);
                break;
            }
        }
        debug_assert!(color.is_some(), "span list lost its default span");
        ColorRun {
            color: color.unwrap_or(Rgba::WHITE),
            end,
        }
    }
}

impl Default for SpanList {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed broadcast: stripped text, color spans, arrival time.
#[derive(Debug, Clone, PartialEq)]
pub struct BroadcastPayload {
    text: String,
    spans: SpanList,
    received_at: Duration,
}

impl BroadcastPayload {
    /// Create an empty payload received at `now`.
    #[must_use]
    pub fn new(now: Duration) -> Self {
        Self {
            text: String::with_capacity(MAX_MESSAGE_BYTES),
            spans: SpanList::new(),
            received_at: now,
        }
    }

    /// The plain text with every color directive stripped.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Plain-text length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the plain text is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The color spans.
    #[inline]
    #[must_use]
    pub fn spans(&self) -> &SpanList {
        &self.spans
    }

    /// Engine time at which this payload became current.
    #[inline]
    #[must_use]
    pub fn received_at(&self) -> Duration {
        self.received_at
    }

    /// Append one code point if capacity allows; drop it silently
    /// otherwise.
    pub(crate) fn push_code_point(&mut self, cp: &str) {
        debug_assert_eq!(cp.chars().count(), 1, "push_code_point takes one code point");
        if self.text.len() + cp.len() <= MAX_MESSAGE_BYTES {
            self.text.push_str(cp);
        }
    }

    /// Append a span taking effect at the current end of text.
    pub(crate) fn push_span(&mut self, color: Rgba) {
        self.spans.push(self.text.len(), color);
    }
}

impl Default for BroadcastPayload {
    /// An empty payload received at time zero.
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

/// Clip `text` to at most `max_bytes`, never splitting a code point.
#[must_use]
pub fn clip_to_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
