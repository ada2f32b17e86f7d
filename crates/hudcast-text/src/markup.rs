#![forbid(unsafe_code)]

//! Inline color markup.
//!
//! Server broadcasts embed color directives in the message text: a caret
//! followed by exactly three ASCII digits, `^RGB`. Each digit selects one
//! channel level out of ten, mapped onto `39..=255` so even "black"
//! (`^000`) stays legible against the dark panel. Parsing strips the
//! directives from the text and records a [`ColorSpan`] at the byte
//! offset where each one sat.
//!
//! Anything that is not a complete directive passes through untouched: a
//! caret followed by fewer than three digits is literal text, and a
//! directive needs at least one byte after it, so a trailing `^999` at
//! the very end of input is still a directive while `^99` is not.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use hudcast_text::parse;
//!
//! let payload = parse("^911boom", Duration::ZERO);
//! assert_eq!(payload.text(), "boom");
//! assert_eq!(payload.spans().len(), 2);
//! ```
//!
//! [`ColorSpan`]: crate::ColorSpan

use std::time::Duration;

use hudcast_core::Rgba;
use tracing::trace;

use crate::payload::BroadcastPayload;

const DIRECTIVE_MARKER: u8 = b'^';

/// Map one directive digit onto its channel level.
#[inline]
const fn channel(digit: u8) -> u8 {
    digit * 24 + 39
}

/// Parse raw broadcast text into a payload received at `now`.
///
/// Directives are consumed even once the text buffer is full, so a
/// too-long message keeps its colors for the part that survives. Span
/// and text capacity overflow drop input silently.
#[must_use]
pub fn parse(raw: &str, now: Duration) -> BroadcastPayload {
    let mut payload = BroadcastPayload::new(now);
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        // `i` always sits on a code-point boundary, so a caret byte here
        // is the character itself, never the tail of a multi-byte glyph.
        if bytes[i] == DIRECTIVE_MARKER
            && i + 3 < bytes.len()
            && bytes[i + 1].is_ascii_digit()
            && bytes[i + 2].is_ascii_digit()
            && bytes[i + 3].is_ascii_digit()
        {
            let color = Rgba::rgb(
                channel(bytes[i + 1] - b'0'),
                channel(bytes[i + 2] - b'0'),
                channel(bytes[i + 3] - b'0'),
            );
            payload.push_span(color);
            i += 4;
            continue;
        }
        let Some(ch) = raw[i..].chars().next() else {
            break;
        };
        let cp = &raw[i..i + ch.len_utf8()];
        payload.push_code_point(cp);
        i += cp.len();
    }
    trace!(
        raw_bytes = raw.len(),
        text_bytes = payload.len(),
        spans = payload.spans().len(),
        "parsed broadcast markup"
    );
    payload
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{ColorSpan, MAX_COLOR_SPANS, MAX_MESSAGE_BYTES};

    fn spans_of(payload: &BroadcastPayload) -> Vec<ColorSpan> {
        payload.spans().iter().copied().collect()
    }

    // ---- directive recognition ----

    #[test]
    fn strips_directives_and_records_spans() {
        let p = parse("^000red^999text", Duration::ZERO);
        assert_eq!(p.text(), "redtext");
        assert_eq!(
            spans_of(&p),
            vec![
                ColorSpan {
                    start: 0,
                    color: Rgba::WHITE
                },
                ColorSpan {
                    start: 0,
                    color: Rgba::rgb(39, 39, 39)
                },
                ColorSpan {
                    start: 3,
                    color: Rgba::rgb(255, 255, 255)
                },
            ]
        );
        // Equal starts resolve to the directive, not the default.
        assert_eq!(p.spans().run_at(0).color, Rgba::rgb(39, 39, 39));
    }

    #[test]
    fn digit_levels_span_39_to_255() {
        let p = parse("^059x", Duration::ZERO);
        assert_eq!(
            p.spans().run_at(0).color,
            Rgba::rgb(channel(0), channel(5), channel(9))
        );
        assert_eq!(channel(0), 39);
        assert_eq!(channel(5), 159);
        assert_eq!(channel(9), 255);
    }

    #[test]
    fn short_directive_is_literal_text() {
        let p = parse("^12", Duration::ZERO);
        assert_eq!(p.text(), "^12");
        assert_eq!(p.spans().len(), 1);

        let p = parse("ab^9", Duration::ZERO);
        assert_eq!(p.text(), "ab^9");
    }

    #[test]
    fn non_digit_after_caret_is_literal_text() {
        let p = parse("^abc^1x2", Duration::ZERO);
        assert_eq!(p.text(), "^abc^1x2");
        assert_eq!(p.spans().len(), 1);
    }

    #[test]
    fn directive_at_end_of_input_is_recognized() {
        // `i + 3` is the last byte index: still a directive, covering
        // nothing.
        let p = parse("red^999", Duration::ZERO);
        assert_eq!(p.text(), "red");
        assert_eq!(
            spans_of(&p)[1],
            ColorSpan {
                start: 3,
                color: Rgba::rgb(255, 255, 255)
            }
        );
    }

    #[test]
    fn directive_only_message_parses_to_empty_text() {
        let p = parse("^999", Duration::ZERO);
        assert!(p.is_empty());
        assert_eq!(p.spans().len(), 2);
    }

    #[test]
    fn doubled_caret_escapes_nothing() {
        // The first caret is literal (next byte is not a digit); the
        // rest forms a directive.
        let p = parse("^^123", Duration::ZERO);
        assert_eq!(p.text(), "^");
        assert_eq!(p.spans().run_at(1).color, Rgba::rgb(63, 87, 111));
    }

    #[test]
    fn four_digits_consume_only_three() {
        let p = parse("^1234", Duration::ZERO);
        assert_eq!(p.text(), "4");
        assert_eq!(p.spans().len(), 2);
    }

    #[test]
    fn caret_before_multibyte_is_literal() {
        let p = parse("^é99", Duration::ZERO);
        assert_eq!(p.text(), "^é99");
        assert_eq!(p.spans().len(), 1);
    }

    // ---- capacity ----

    #[test]
    fn text_is_truncated_at_capacity() {
        let raw = "a".repeat(MAX_MESSAGE_BYTES + 30);
        let p = parse(&raw, Duration::ZERO);
        assert_eq!(p.len(), MAX_MESSAGE_BYTES);
    }

    #[test]
    fn directives_are_consumed_even_after_text_is_full() {
        let mut raw = "a".repeat(MAX_MESSAGE_BYTES);
        raw.push_str("^900zz");
        let p = parse(&raw, Duration::ZERO);
        assert_eq!(p.len(), MAX_MESSAGE_BYTES);
        assert!(!p.text().contains('z'));
        // The span still lands, at the clipped end of text.
        assert_eq!(p.spans().len(), 2);
        assert_eq!(p.spans().get(1).unwrap().start, MAX_MESSAGE_BYTES);
    }

    #[test]
    fn spans_are_capped_at_capacity() {
        let raw = "^123".repeat(MAX_COLOR_SPANS + 20);
        let p = parse(&raw, Duration::ZERO);
        assert_eq!(p.spans().len(), MAX_COLOR_SPANS);
        assert!(p.is_empty());
    }

    // ---- passthrough ----

    #[test]
    fn unicode_text_passes_through() {
        let p = parse("héllo → 漢字", Duration::ZERO);
        assert_eq!(p.text(), "héllo → 漢字");
    }

    #[test]
    fn empty_input_parses_to_empty_payload() {
        let p = parse("", Duration::ZERO);
        assert!(p.is_empty());
        assert_eq!(p.spans().len(), 1);
    }

    #[test]
    fn received_at_is_recorded() {
        let now = Duration::from_millis(12_345);
        assert_eq!(parse("hi", now).received_at(), now);
    }
}
