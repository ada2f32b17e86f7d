#![forbid(unsafe_code)]

//! Overlay suppression queries.
//!
//! Broadcasts share screen space with other HUD overlays. The component
//! asks the host which of them are open through [`OverlayState`] and
//! suppresses itself accordingly: the scoreboard and the message of the
//! day hide everything, open chat hides only the server panel.
//!
//! [`ActiveOverlays`] is a ready-made bitflags implementation for hosts
//! that track overlay visibility as plain state.

use bitflags::bitflags;

bitflags! {
    /// Overlays that can suppress broadcast rendering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ActiveOverlays: u8 {
        /// The chat input/backlog is open.
        const CHAT = 1 << 0;
        /// The scoreboard is open.
        const SCOREBOARD = 1 << 1;
        /// The server's message of the day is open.
        const MOTD = 1 << 2;
    }
}

/// Host-supplied visibility queries, read once per frame.
pub trait OverlayState {
    /// Whether the chat overlay is open.
    fn chat_active(&self) -> bool;
    /// Whether the scoreboard is open.
    fn scoreboard_active(&self) -> bool;
    /// Whether the message of the day is open.
    fn motd_active(&self) -> bool;
}

impl OverlayState for ActiveOverlays {
    fn chat_active(&self) -> bool {
        self.contains(Self::CHAT)
    }

    fn scoreboard_active(&self) -> bool {
        self.contains(Self::SCOREBOARD)
    }

    fn motd_active(&self) -> bool {
        self.contains(Self::MOTD)
    }
}
