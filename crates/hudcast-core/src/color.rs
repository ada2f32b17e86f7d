#![forbid(unsafe_code)]

//! Packed RGBA color.
//!
//! Stored as `0xRRGGBBAA` in a single `u32`. Alpha 255 is opaque. The
//! broadcast engine only ever scales alpha (fade) and classifies colors by
//! luminance (outline contrast); blending is the draw backend's job.

use std::fmt;

/// A packed RGBA color, `0xRRGGBBAA`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba(0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba(0xFFFF_FFFF);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba(0x0000_00FF);

    /// Construct an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Construct a color from 8-bit channels including alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Scale the alpha channel by `opacity`, clamped to `[0, 1]`.
    ///
    /// The color channels are untouched, so a faded color keeps its hue.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (f32::from(self.a()) * opacity).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Relative luminance per BT.709, over channels normalized to `[0, 1]`.
    ///
    /// `L = 0.2126 r + 0.7152 g + 0.0722 b`. Alpha is ignored.
    #[must_use]
    pub fn relative_luminance(self) -> f32 {
        let r = f32::from(self.r()) / 255.0;
        let g = f32::from(self.g()) / 255.0;
        let b = f32::from(self.b()) / 255.0;
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba(#{:08X})", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
