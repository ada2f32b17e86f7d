#![forbid(unsafe_code)]

//! hudcast public facade crate.
//!
//! This crate provides the stable surface area for hosts embedding the
//! broadcast engine. It re-exports the common types from the internal
//! crates and offers a lightweight prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use hudcast::prelude::*;
//!
//! let mut hud = Broadcast::new(BroadcastConfig::default());
//! hud.on_message("^922low gravity ^999enabled", Duration::ZERO);
//!
//! // Any Backend works; FixedMetrics runs the full layout headless.
//! let mut backend = FixedMetrics;
//! hud.render(
//!     &mut backend,
//!     &ActiveOverlays::empty(),
//!     16.0 / 9.0,
//!     Duration::from_secs(3),
//! );
//! ```

// --- Core re-exports -------------------------------------------------------

pub use hudcast_core::{Backend, CursorFlags, FixedMetrics, Ink, Rect, Rgba, TextCursor};

// --- Text re-exports -------------------------------------------------------

pub use hudcast_text::{
    BroadcastPayload, ColorRun, ColorSpan, Line, LineLayout, MAX_COLOR_SPANS, MAX_LINES,
    MAX_MESSAGE_BYTES, SpanList, clip_to_boundary, fits_on_one_line, parse, wrap_lines,
};

// --- Widget re-exports -----------------------------------------------------

pub use hudcast_widgets::{
    ActiveOverlays, Broadcast, BroadcastConfig, DISPLAY_DURATION, DISPLAY_START_FADE,
    OverlayState, fade_factor, screen_rect,
};

/// Convenience imports for typical hosts.
pub mod prelude {
    pub use crate::{
        ActiveOverlays, Backend, Broadcast, BroadcastConfig, BroadcastPayload, FixedMetrics, Ink,
        OverlayState, Rgba,
    };

    pub use crate::{core, text, widgets};
}

pub use hudcast_core as core;
pub use hudcast_text as text;
pub use hudcast_widgets as widgets;
