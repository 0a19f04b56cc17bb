//! Circle coercion. Accepted encodings, in priority order:
//!
//! 1. a canonical [`Circle`];
//! 2. a list, or
//! 3. a positional sequence, of length 3 (`x, y, r`), 2 (`(x, y), r`) or 1 (a wrapped description, but not a string);
//! 4. an object with a `circle` accessor (called if it's a method), whose value is coerced in turn.

use crate::{circle::Circle, error::ShapeError};

use super::{dispatch, items, nested, probe, radius, scalar, scalar::point_at, Input, Matched, Matcher};

const MATCHERS: [(&str, Matcher<Circle>); 4] = [
    ("circle", canonical),
    ("list", list),
    ("sequence", sequence),
    ("object", object),
];

fn canonical(input: &Input, _depth: usize) -> Matched<Circle> {
    match input {
        Input::Circle(c) => Some(Ok(*c)),
        _ => None,
    }
}

fn list(input: &Input, depth: usize) -> Matched<Circle> {
    match input {
        Input::List(_) => Some(from_seq(input, depth)),
        _ => None,
    }
}

fn sequence(input: &Input, depth: usize) -> Matched<Circle> {
    match input {
        Input::Seq(_) => Some(from_seq(input, depth)),
        // Strings are sequences of characters; no character is a number.
        Input::Str(_) => Some(Err(ShapeError::ShapeMismatch)),
        _ => None,
    }
}

fn object(input: &Input, depth: usize) -> Matched<Circle> {
    match input {
        Input::Object(src) => probe("circle", || src.circle()).map(|inner| coerce_at(&inner, depth + 1)),
        _ => None,
    }
}

fn from_seq(input: &Input, depth: usize) -> Result<Circle, ShapeError> {
    let items = items(input, &[1, 2, 3]).unwrap_or(Err(ShapeError::ShapeMismatch))?;
    from_items(&items, nested(input, depth))
}

/// Per-length rules shared by sequence coercion and [`Circle::from_args`].
fn from_items(items: &[Input], depth: usize) -> Result<Circle, ShapeError> {
    match items {
        [inner] if !inner.is_str() => coerce_at(inner, depth),
        [center, r] => {
            let c = point_at(center, depth)?;
            Circle::new(c.x, c.y, radius(r)?)
        }
        [x, y, r] => Circle::new(scalar(x)?, scalar(y)?, radius(r)?),
        _ => Err(ShapeError::ShapeMismatch),
    }
}

fn coerce_at(input: &Input, depth: usize) -> Result<Circle, ShapeError> {
    dispatch(&MATCHERS, input, depth)
}

impl Circle {
    /// Interpret an arbitrary [`Input`] as a circle.
    ///
    /// Wrapping through [`Sequence`](super::Sequence)s and `circle` accessors stops after [`MAX_DEPTH`](super::MAX_DEPTH)
    /// levels with a [`ShapeError::ShapeMismatch`]; nested lists unwrap to any depth.
    pub fn coerce(input: &Input) -> Result<Circle, ShapeError> {
        coerce_at(input, 0)
    }

    /// Build a circle from already-split positional arguments: `(description)`, `((x, y), r)` or `(x, y, r)`.
    ///
    /// `Circle::from_args(&[a, b, c])` and `Circle::coerce(&(a, b, c).into())` always agree.
    pub fn from_args(args: &[Input]) -> Result<Circle, ShapeError> {
        match args {
            [arg] => Circle::coerce(arg),
            _ => from_items(args, 0),
        }
    }

    /// [`Circle::set_r`], from an external value.
    pub fn set_r_from(&mut self, value: &Input) -> Result<(), ShapeError> {
        self.set_r(radius(value)?)
    }
}

impl TryFrom<&Input> for Circle {
    type Error = ShapeError;
    fn try_from(input: &Input) -> Result<Self, Self::Error> {
        Circle::coerce(input)
    }
}
