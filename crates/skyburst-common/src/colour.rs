//! RGB colour with saturating channel arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Lowest channel value.
pub const CHANNEL_MIN: i32 = 0;
/// Highest channel value.
pub const CHANNEL_MAX: i32 = 255;

/// RGB colour. Each channel is kept in `[0, 255]` at construction and
/// after every arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct Colour {
    r: i32,
    g: i32,
    b: i32,
}

impl Colour {
    /// Black.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// White.
    pub const WHITE: Self = Self {
        r: CHANNEL_MAX,
        g: CHANNEL_MAX,
        b: CHANNEL_MAX,
    };

    /// Creates a colour, clamping each channel.
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> i32 {
        self.r
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> i32 {
        self.g
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> i32 {
        self.b
    }

    /// Normalized RGBA (alpha always 1.0) for GPU upload.
    #[must_use]
    pub fn to_rgba_f32(self) -> [f32; 4] {
        let max = CHANNEL_MAX as f32;
        [
            self.r as f32 / max,
            self.g as f32 / max,
            self.b as f32 / max,
            1.0,
        ]
    }
}

const fn clamp_channel(v: i32) -> i32 {
    if v < CHANNEL_MIN {
        CHANNEL_MIN
    } else if v > CHANNEL_MAX {
        CHANNEL_MAX
    } else {
        v
    }
}

impl Add for Colour {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
        )
    }
}

impl Sub for Colour {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_sub(rhs.r),
            self.g.saturating_sub(rhs.g),
            self.b.saturating_sub(rhs.b),
        )
    }
}

impl Mul<i32> for Colour {
    type Output = Self;

    fn mul(self, k: i32) -> Self {
        Self::new(
            self.r.saturating_mul(k),
            self.g.saturating_mul(k),
            self.b.saturating_mul(k),
        )
    }
}

impl Mul<Colour> for i32 {
    type Output = Colour;

    fn mul(self, c: Colour) -> Colour {
        c * self
    }
}

impl From<[i32; 3]> for Colour {
    fn from([r, g, b]: [i32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Colour> for [i32; 3] {
    fn from(c: Colour) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour(R:{}, G:{}, B:{})", self.r, self.g, self.b)
    }
}
