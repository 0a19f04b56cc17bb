use std::{f64::consts::PI, fmt::{self, Display}};

use serde::{Deserialize, Serialize};

use crate::{error::ShapeError, r2::R2};

/// A circle with a strictly positive, finite radius.
///
/// Fields are private: every construction path (and [`Circle::set_r`]) re-validates the radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle", into = "RawCircle")]
pub struct Circle {
    c: R2<f64>,
    r: f64,
}

#[derive(Serialize, Deserialize)]
struct RawCircle {
    x: f64,
    y: f64,
    r: f64,
}

impl TryFrom<RawCircle> for Circle {
    type Error = ShapeError;
    fn try_from(RawCircle { x, y, r }: RawCircle) -> Result<Self, Self::Error> {
        Circle::new(x, y, r)
    }
}

impl From<Circle> for RawCircle {
    fn from(c: Circle) -> Self {
        RawCircle { x: c.c.x, y: c.c.y, r: c.r }
    }
}

pub fn check_radius(r: f64) -> Result<f64, ShapeError> {
    if r.is_finite() && r > 0. {
        Ok(r)
    } else {
        Err(ShapeError::InvalidRadius(r.to_string()))
    }
}

impl Circle {
    pub fn new(x: f64, y: f64, r: f64) -> Result<Circle, ShapeError> {
        let r = check_radius(r)?;
        Ok(Circle { c: R2 { x, y }, r })
    }
    pub fn x(&self) -> f64 {
        self.c.x
    }
    pub fn y(&self) -> f64 {
        self.c.y
    }
    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn center(&self) -> R2<f64> {
        self.c
    }
    /// Replace the radius; on failure the circle is left untouched.
    pub fn set_r(&mut self, r: f64) -> Result<(), ShapeError> {
        self.r = check_radius(r)?;
        Ok(())
    }
    pub fn diameter(&self) -> f64 {
        2. * self.r
    }
    pub fn area(&self) -> f64 {
        PI * self.r * self.r
    }
    pub fn circumference(&self) -> f64 {
        2. * PI * self.r
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {})", self.c, self.r)
    }
}
