#![forbid(unsafe_code)]

//! Broadcast text handling for hudcast.
//!
//! This crate turns raw server broadcast strings into something drawable:
//! - [`parse`] - strip `^RGB` color directives into a [`BroadcastPayload`]
//! - [`BroadcastPayload`] - bounded plain text plus ordered [`ColorSpan`]s
//! - [`SpanList`] - span storage with total color coverage via [`run_at`]
//! - [`wrap_lines`] - whitespace-aware line breaking into a [`LineLayout`]
//! - [`clip_to_boundary`] - byte-capped clipping that respects UTF-8
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use hudcast_core::FixedMetrics;
//! use hudcast_text::{parse, wrap_lines};
//!
//! let payload = parse("^900alert: ^999server restarting", Duration::ZERO);
//! assert_eq!(payload.text(), "alert: server restarting");
//!
//! // Color coverage is total: every byte offset resolves.
//! let run = payload.spans().run_at(0);
//! assert_eq!(run.end, Some(7));
//!
//! // Wrap for an 80-unit panel at font size 10.
//! let layout = wrap_lines(&mut FixedMetrics, payload.text(), 80.0, 10.0);
//! let lines: Vec<&str> = layout.iter().map(|l| l.slice(payload.text())).collect();
//! assert_eq!(lines, vec!["alert: server", " restarting"]);
//! ```
//!
//! [`run_at`]: SpanList::run_at

pub mod layout;
pub mod markup;
pub mod payload;

pub use layout::{Line, LineLayout, MAX_LINES, fits_on_one_line, wrap_lines};
pub use markup::parse;
pub use payload::{
    BroadcastPayload, ColorRun, ColorSpan, MAX_COLOR_SPANS, MAX_MESSAGE_BYTES, SpanList,
    clip_to_boundary,
};
