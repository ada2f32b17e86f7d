#![forbid(unsafe_code)]

//! The broadcast component.
//!
//! Holds the most recent server broadcast plus an optional self-issued
//! local line, and draws both into the HUD each frame. The server panel
//! path runs the full pipeline: visibility gates, time-based fade, panel
//! geometry, a binary font-size fit test, word-preserving wrap, and a
//! per-span colored draw with a luminance-driven outline. The local line
//! is the simpler sibling: measured once at issuance, redrawn verbatim
//! until it expires.
//!
//! Layout is recomputed from the stored payload on every rendered frame
//! and discarded; nothing here caches geometry between frames.

use std::time::Duration;

use hudcast_core::{Backend, CursorFlags, Ink, Rect, Rgba, TextCursor};
use hudcast_text::{
    BroadcastPayload, Line, MAX_MESSAGE_BYTES, clip_to_boundary, fits_on_one_line, parse,
    wrap_lines,
};

use crate::config::BroadcastConfig;
use crate::overlay::OverlayState;

/// How long a broadcast stays on screen.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(10);
/// Age at which the fade-out begins.
pub const DISPLAY_START_FADE: Duration = Duration::from_secs(9);

/// Logical screen height; width is `aspect` times this.
const SCREEN_HEIGHT: f32 = 300.0;

const FONT_SIZE_LARGE: f32 = 11.0;
const FONT_SIZE_SMALL: f32 = 6.5;

const TITLE_LABEL: &str = "Server broadcast";
const TITLE_FONT_SIZE: f32 = 5.5;
const TITLE_NUDGE: f32 = 1.5;
const TITLE_ALPHA: f32 = 0.6;

const PANEL_STRIP_HEIGHT: f32 = 10.0;
const PANEL_SIDE_MARGIN: f32 = 5.0;
const PANEL_BOTTOM_PADDING: f32 = 2.0;
const BACKGROUND_ALPHA: f32 = 0.4;

const DARK_LUMINANCE_THRESHOLD: f32 = 0.25;
const LIGHT_OUTLINE_ALPHA: f32 = 0.6;

const LOCAL_FONT_SIZE: f32 = 12.0;
const LOCAL_BROADCAST_Y: f32 = 40.0;

/// Opacity multiplier for a broadcast of the given age: 1.0 until
/// [`DISPLAY_START_FADE`], then linearly down to 0.0 at
/// [`DISPLAY_DURATION`].
#[must_use]
pub fn fade_factor(elapsed: Duration) -> f32 {
    let start = DISPLAY_START_FADE.as_secs_f32();
    let full = DISPLAY_DURATION.as_secs_f32();
    1.0 - ((elapsed.as_secs_f32() - start) / (full - start)).clamp(0.0, 1.0)
}

/// The logical screen for a display with the given aspect ratio:
/// height-normalized to 300 units, origin at the top left.
#[must_use]
pub fn screen_rect(aspect: f32) -> Rect {
    Rect::from_size(SCREEN_HEIGHT * aspect, SCREEN_HEIGHT)
}

/// A self-issued single line with its own expiry.
#[derive(Debug, Clone, PartialEq)]
struct LocalLine {
    text: String,
    offset: f32,
    expires_at: Duration,
}

/// Server broadcast panel plus local broadcast line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Broadcast {
    /// Feature flags, read once per rendered frame.
    pub config: BroadcastConfig,
    payload: BroadcastPayload,
    local: Option<LocalLine>,
}

impl Broadcast {
    /// Create the component with the given configuration and no active
    /// message.
    #[must_use]
    pub fn new(config: BroadcastConfig) -> Self {
        Self {
            config,
            payload: BroadcastPayload::default(),
            local: None,
        }
    }

    /// Parse an inbound server broadcast, replacing the current one
    /// wholesale.
    pub fn on_message(&mut self, raw: &str, now: Duration) {
        self.payload = parse(raw, now);
    }

    /// The currently stored payload.
    #[must_use]
    pub fn payload(&self) -> &BroadcastPayload {
        &self.payload
    }

    /// Issue a local (client-side) broadcast line.
    ///
    /// The text is clipped to the message byte cap at a code-point
    /// boundary and measured once, here; rendering reuses the stored
    /// centering offset every frame without re-measuring.
    pub fn issue_local<B: Backend>(
        &mut self,
        backend: &mut B,
        text: &str,
        aspect: f32,
        now: Duration,
    ) {
        let clipped = clip_to_boundary(text, MAX_MESSAGE_BYTES);
        let screen = screen_rect(aspect);
        let mut cursor = TextCursor::new(0.0, 0.0, LOCAL_FONT_SIZE, CursorFlags::STOP_AT_END)
            .with_line_width(screen.w);
        backend.measure(&mut cursor, clipped);
        self.local = Some(LocalLine {
            text: clipped.to_owned(),
            offset: screen.w / 2.0 - cursor.advance_x() / 2.0,
            expires_at: now + DISPLAY_DURATION,
        });
    }

    /// Drop both the server payload and the local line, as on a round
    /// change.
    pub fn reset(&mut self) {
        self.payload = BroadcastPayload::default();
        self.local = None;
    }

    /// Draw the component for this frame.
    ///
    /// The scoreboard and message-of-the-day overlays suppress everything;
    /// open chat suppresses only the server panel. `now` is monotonic
    /// engine time on the same clock the payloads were stamped with.
    pub fn render<B: Backend, O: OverlayState>(
        &self,
        backend: &mut B,
        overlays: &O,
        aspect: f32,
        now: Duration,
    ) {
        if overlays.scoreboard_active() || overlays.motd_active() {
            return;
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("broadcast_render").entered();
        self.render_local(backend, aspect, now);
        self.render_server(backend, overlays, aspect, now);
    }

    fn render_server<B: Backend, O: OverlayState>(
        &self,
        backend: &mut B,
        overlays: &O,
        aspect: f32,
        now: Duration,
    ) {
        if !self.config.show_server_broadcast
            || self.config.mute_server_broadcast
            || self.payload.is_empty()
            || overlays.chat_active()
        {
            return;
        }
        let elapsed = now.saturating_sub(self.payload.received_at());
        if elapsed > DISPLAY_DURATION {
            return;
        }
        let fade = fade_factor(elapsed);

        // The panel band: horizontal 25%..75%, vertical 80%..100% of the
        // screen. Its bottom strip carries the gradient and the title;
        // the rest, inset and padded, is the text area.
        let band = screen_rect(aspect).fraction(0.25, 0.8, 0.5, 0.2);
        let (band, strip) = band.split_bottom(PANEL_STRIP_HEIGHT);

        backend.fill_vertical_gradient(
            strip,
            Rgba::TRANSPARENT,
            Rgba::BLACK.with_opacity(BACKGROUND_ALPHA * fade),
        );
        self.draw_title(backend, strip, fade);

        let (text_area, _) = band.vmargin(PANEL_SIDE_MARGIN).split_bottom(PANEL_BOTTOM_PADDING);

        let text = self.payload.text();
        let mut font_size = FONT_SIZE_LARGE;
        if !fits_on_one_line(backend, text, text_area.w, font_size) {
            font_size = FONT_SIZE_SMALL;
        }
        let layout = wrap_lines(backend, text, text_area.w, font_size);

        // Bottom-anchored: the block grows upward, flush with the text
        // area's bottom.
        let mut y = text_area.bottom() - layout.len() as f32 * font_size;
        for line in layout.iter() {
            let x = text_area.x + (text_area.w - line.width) / 2.0;
            let mut cursor = TextCursor::new(x, y, font_size, CursorFlags::STOP_AT_END)
                .with_line_width(text_area.w);
            if self.config.colored_broadcast {
                self.draw_colored_line(backend, &mut cursor, line, fade);
            } else {
                let ink = Ink {
                    fill: Rgba::WHITE.with_opacity(fade),
                    ..Ink::default()
                };
                backend.draw(&mut cursor, line.slice(text), ink);
            }
            y += font_size;
        }
    }

    fn draw_title<B: Backend>(&self, backend: &mut B, strip: Rect, fade: f32) {
        let mut measured = TextCursor::new(0.0, 0.0, TITLE_FONT_SIZE, CursorFlags::STOP_AT_END);
        backend.measure(&mut measured, TITLE_LABEL);

        let x = strip.x + (strip.w - measured.advance_x()) / 2.0;
        let ink = Ink {
            fill: Rgba::WHITE.with_opacity(TITLE_ALPHA * fade),
            ..Ink::default()
        };
        let mut cursor =
            TextCursor::new(x, strip.y + TITLE_NUDGE, TITLE_FONT_SIZE, CursorFlags::STOP_AT_END);
        backend.draw(&mut cursor, TITLE_LABEL, ink);
    }

    /// Draw one line as a sequence of span-colored sub-runs sharing the
    /// line's cursor, so each run starts where the previous advanced to.
    fn draw_colored_line<B: Backend>(
        &self,
        backend: &mut B,
        cursor: &mut TextCursor,
        line: &Line,
        fade: f32,
    ) {
        let text = self.payload.text();
        let mut pos = line.start;
        while pos < line.end() {
            let run = self.payload.spans().run_at(pos);
            let end = run.end.map_or(line.end(), |e| e.min(line.end()));
            debug_assert!(end > pos, "span runs must make progress");
            backend.draw(cursor, &text[pos..end], colored_ink(run.color, fade));
            pos = end;
        }
    }

    fn render_local<B: Backend>(&self, backend: &mut B, aspect: f32, now: Duration) {
        let Some(local) = &self.local else {
            return;
        };
        if now >= local.expires_at {
            return;
        }
        let screen = screen_rect(aspect);
        let mut cursor =
            TextCursor::new(local.offset, LOCAL_BROADCAST_Y, LOCAL_FONT_SIZE, CursorFlags::STOP_AT_END)
                .with_line_width(screen.w - local.offset);
        backend.draw(&mut cursor, &local.text, Ink::default());
    }
}

/// Fill at the span's color scaled by fade; outline picked for contrast
/// against the dark panel. Outline opacity is deliberately not faded.
fn colored_ink(color: Rgba, fade: f32) -> Ink {
    let outline = if color.relative_luminance() < DARK_LUMINANCE_THRESHOLD {
        Rgba::WHITE.with_opacity(LIGHT_OUTLINE_ALPHA)
    } else {
        Ink::default().outline
    };
    Ink::new(color.with_opacity(fade), outline)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
