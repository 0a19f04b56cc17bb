use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{error::ShapeError, r2::R2};

/// A directed segment from `a` to `b` whose endpoints differ.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLine", into = "RawLine")]
pub struct Line {
    a: R2<f64>,
    b: R2<f64>,
}

#[derive(Serialize, Deserialize)]
struct RawLine {
    a: R2<f64>,
    b: R2<f64>,
}

impl TryFrom<RawLine> for Line {
    type Error = ShapeError;
    fn try_from(RawLine { a, b }: RawLine) -> Result<Self, Self::Error> {
        Line::from_points(a, b)
    }
}

impl From<Line> for RawLine {
    fn from(l: Line) -> Self {
        RawLine { a: l.a, b: l.b }
    }
}

impl Line {
    pub fn new(xa: f64, ya: f64, xb: f64, yb: f64) -> Result<Line, ShapeError> {
        Line::from_points(R2 { x: xa, y: ya }, R2 { x: xb, y: yb })
    }
    pub fn from_points(a: R2<f64>, b: R2<f64>) -> Result<Line, ShapeError> {
        let line = Line { a, b };
        if line.is_valid() {
            Ok(line)
        } else {
            Err(ShapeError::DegenerateLine { x: a.x, y: a.y })
        }
    }
    /// Skips the degeneracy check; rectangle edges of a zero-sized rect are still decomposed.
    pub(crate) fn segment(xa: f64, ya: f64, xb: f64, yb: f64) -> Line {
        Line { a: R2 { x: xa, y: ya }, b: R2 { x: xb, y: yb } }
    }
    pub fn is_valid(&self) -> bool {
        self.a != self.b
    }
    pub fn a(&self) -> R2<f64> {
        self.a
    }
    pub fn b(&self) -> R2<f64> {
        self.b
    }
    pub fn xa(&self) -> f64 {
        self.a.x
    }
    pub fn ya(&self) -> f64 {
        self.a.y
    }
    pub fn xb(&self) -> f64 {
        self.b.x
    }
    pub fn yb(&self) -> f64 {
        self.b.y
    }
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.a, self.b)
    }
}
