#![forbid(unsafe_code)]

//! Core primitives for the hudcast broadcast engine.
//!
//! This crate holds everything the text pipeline and the HUD component
//! share: logical-unit geometry, packed RGBA color, the measurement
//! cursor, and the [`Backend`] trait the engine draws through. It also
//! ships [`FixedMetrics`], a deterministic monospace-style backend for
//! headless layout and tests.
//!
//! # Example
//!
//! ```
//! use hudcast_core::{Backend, CursorFlags, FixedMetrics, TextCursor};
//!
//! let mut cursor = TextCursor::new(0.0, 0.0, 10.0, CursorFlags::STOP_AT_END)
//!     .with_line_width(20.0);
//! FixedMetrics.measure(&mut cursor, "hello");
//! // Four 5.0-unit glyphs fit in 20.0 units.
//! assert_eq!(cursor.fitted_bytes, 4);
//! assert_eq!(cursor.advance_x(), 20.0);
//! ```

pub mod backend;
pub mod color;
pub mod cursor;
pub mod fixed;
pub mod geometry;
#[cfg(feature = "test-helpers")]
pub mod recording;

pub use backend::{Backend, Ink};
pub use color::Rgba;
pub use cursor::{CursorFlags, TextCursor};
pub use fixed::FixedMetrics;
pub use geometry::Rect;
#[cfg(feature = "test-helpers")]
pub use recording::{GradientFill, RecordingBackend, TextDraw};
