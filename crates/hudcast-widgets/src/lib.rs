#![forbid(unsafe_code)]

//! HUD components for hudcast.
//!
//! The one component that matters lives here: [`Broadcast`], which owns
//! the latest server broadcast and an optional local line, and redraws
//! them every frame against any [`Backend`]:
//! - [`Broadcast`] - gates, fade, fit, wrap, and the colored draw
//! - [`BroadcastConfig`] - host-owned feature flags
//! - [`OverlayState`] / [`ActiveOverlays`] - suppression queries
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use hudcast_core::FixedMetrics;
//! use hudcast_widgets::{ActiveOverlays, Broadcast, BroadcastConfig};
//!
//! let mut hud = Broadcast::new(BroadcastConfig::default());
//! hud.on_message("^900server restarting in 10s", Duration::ZERO);
//!
//! // FixedMetrics renders headless: full layout, no pixels.
//! let mut backend = FixedMetrics;
//! hud.render(
//!     &mut backend,
//!     &ActiveOverlays::empty(),
//!     16.0 / 9.0,
//!     Duration::from_secs(1),
//! );
//! ```
//!
//! [`Backend`]: hudcast_core::Backend

pub mod broadcast;
pub mod config;
pub mod overlay;

pub use broadcast::{Broadcast, DISPLAY_DURATION, DISPLAY_START_FADE, fade_factor, screen_rect};
pub use config::BroadcastConfig;
pub use overlay::{ActiveOverlays, OverlayState};
