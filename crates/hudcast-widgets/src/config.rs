#![forbid(unsafe_code)]

//! Host-owned configuration read by the broadcast component each frame.

/// Feature flags for the broadcast component.
///
/// The host owns persistence and mutation; the component only reads these
/// while rendering. Defaults show colored broadcasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastConfig {
    /// Render server broadcasts at all.
    pub show_server_broadcast: bool,
    /// Honor inline color directives; off draws plain white text.
    pub colored_broadcast: bool,
    /// Suppress server broadcasts without disabling the feature.
    pub mute_server_broadcast: bool,
}

impl BroadcastConfig {
    /// The default configuration: shown, colored, not muted.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_server_broadcast: true,
            colored_broadcast: true,
            mute_server_broadcast: false,
        }
    }

    /// Toggle rendering of server broadcasts.
    #[must_use]
    pub const fn show(mut self, on: bool) -> Self {
        self.show_server_broadcast = on;
        self
    }

    /// Toggle inline color directives.
    #[must_use]
    pub const fn colored(mut self, on: bool) -> Self {
        self.colored_broadcast = on;
        self
    }

    /// Toggle muting.
    #[must_use]
    pub const fn muted(mut self, on: bool) -> Self {
        self.mute_server_broadcast = on;
        self
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self::new()
    }
}
