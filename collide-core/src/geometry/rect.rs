use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::line::Line;

/// Axis-aligned rectangle with origin at the top-left corner; `y` grows downward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
    /// Boundary segments in test order: top, left, bottom, right.
    ///
    /// Corners are shared exactly between adjacent edges.
    pub fn edges(&self) -> [Line; 4] {
        let Rect { x, y, .. } = *self;
        let (r, b) = (self.right(), self.bottom());
        [
            Line::segment(x, y, r, y),
            Line::segment(x, y, x, b),
            Line::segment(x, b, r, b),
            Line::segment(r, y, r, b),
        ]
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from((x, y, w, h): (f64, f64, f64, f64)) -> Self {
        Rect { x, y, w, h }
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x, y, w, h): (i32, i32, i32, i32)) -> Self {
        Rect { x: x as f64, y: y as f64, w: w as f64, h: h as f64 }
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect({}, {}, {}, {})", self.x, self.y, self.w, self.h)
    }
}
