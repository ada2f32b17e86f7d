#![forbid(unsafe_code)]

//! Geometric primitives in logical HUD units.
//!
//! The broadcast panel works in a height-normalized coordinate space
//! (300 units tall, origin at top-left, y growing downward), so all
//! geometry here is `f32`.

/// A rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in units.
    pub w: f32,
    /// Height in units.
    pub h: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from origin with the given size.
    #[inline]
    pub const fn from_size(w: f32, h: f32) -> Self {
        Self::new(0.0, 0.0, w, h)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Check if the rectangle has no positive area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Sub-rectangle described by normalized fractions of this one.
    ///
    /// `fx`/`fy` place the origin, `fw`/`fh` scale the extent. All four are
    /// fractions of the parent's size.
    #[inline]
    pub fn fraction(&self, fx: f32, fy: f32, fw: f32, fh: f32) -> Rect {
        Rect {
            x: self.x + self.w * fx,
            y: self.y + self.h * fy,
            w: self.w * fw,
            h: self.h * fh,
        }
    }

    /// Split off a strip of height `cut` from the bottom.
    ///
    /// Returns `(rest, strip)`. `cut` is clamped to the rectangle's height,
    /// so the strip never outgrows the parent.
    pub fn split_bottom(&self, cut: f32) -> (Rect, Rect) {
        let cut = cut.clamp(0.0, self.h.max(0.0));
        let rest = Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h - cut,
        };
        let strip = Rect {
            x: self.x,
            y: self.y + self.h - cut,
            w: self.w,
            h: cut,
        };
        (rest, strip)
    }

    /// Shrink the rectangle by `margin` on the left and right sides.
    ///
    /// The width never goes negative.
    pub fn vmargin(&self, margin: f32) -> Rect {
        Rect {
            x: self.x + margin,
            y: self.y,
            w: (self.w - 2.0 * margin).max(0.0),
            h: self.h,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
