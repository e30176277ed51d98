#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are abstract world units (f64), not pixels or terminal
//! cells; the rendering backend decides what a unit means on screen.

use serde::{Deserialize, Serialize};

/// A point in 2D layout space (world units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The canvas origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate by (dx, dy).
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A width/height pair (world units).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Grow by the given padding on all four sides.
    #[must_use]
    pub fn pad(self, sides: Sides) -> Self {
        Self {
            width: self.width + sides.horizontal(),
            height: self.height + sides.vertical(),
        }
    }
}

/// Per-side spacing, used for frame padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sides {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Sides {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Equal spacing on every side.
    #[must_use]
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// Total horizontal inset (left + right).
    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}
