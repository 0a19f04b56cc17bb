//! Line coercion. Accepted encodings, in priority order:
//!
//! 1. a canonical [`Line`];
//! 2. a list, or
//! 3. a positional sequence, of length 4 (`xa, ya, xb, yb`), 2 (`(xa, ya), (xb, yb)`) or 1 (a wrapped description, but not a string);
//! 4. an object with a `line` accessor (called if it's a method), whose value is coerced in turn.
//!
//! Every path ends in the degeneracy check: coinciding endpoints are a [`ShapeError::DegenerateLine`].

use crate::{error::ShapeError, line::Line, r2::R2};

use super::{dispatch, items, nested, probe, scalar, scalar::point_at, Input, Matched, Matcher};

const MATCHERS: [(&str, Matcher<Line>); 4] = [
    ("line", canonical),
    ("list", list),
    ("sequence", sequence),
    ("object", object),
];

fn canonical(input: &Input, _depth: usize) -> Matched<Line> {
    match input {
        Input::Line(l) => Some(Ok(*l)),
        _ => None,
    }
}

fn list(input: &Input, depth: usize) -> Matched<Line> {
    match input {
        Input::List(_) => Some(from_seq(input, depth)),
        _ => None,
    }
}

fn sequence(input: &Input, depth: usize) -> Matched<Line> {
    match input {
        Input::Seq(_) => Some(from_seq(input, depth)),
        Input::Str(_) => Some(Err(ShapeError::ShapeMismatch)),
        _ => None,
    }
}

fn object(input: &Input, depth: usize) -> Matched<Line> {
    match input {
        Input::Object(src) => probe("line", || src.line()).map(|inner| coerce_at(&inner, depth + 1)),
        _ => None,
    }
}

fn from_seq(input: &Input, depth: usize) -> Result<Line, ShapeError> {
    let items = items(input, &[1, 2, 4]).unwrap_or(Err(ShapeError::ShapeMismatch))?;
    from_items(&items, nested(input, depth))
}

/// Per-length rules shared by sequence coercion and [`Line::from_args`].
fn from_items(items: &[Input], depth: usize) -> Result<Line, ShapeError> {
    match items {
        [inner] if !inner.is_str() => coerce_at(inner, depth),
        [a, b] => Line::from_points(point_at(a, depth)?, point_at(b, depth)?),
        [xa, ya, xb, yb] => Line::from_points(
            R2 { x: scalar(xa)?, y: scalar(ya)? },
            R2 { x: scalar(xb)?, y: scalar(yb)? },
        ),
        _ => Err(ShapeError::ShapeMismatch),
    }
}

fn coerce_at(input: &Input, depth: usize) -> Result<Line, ShapeError> {
    dispatch(&MATCHERS, input, depth)
}

impl Line {
    /// Interpret an arbitrary [`Input`] as a (non-degenerate) line.
    ///
    /// Wrapping through [`Sequence`](super::Sequence)s and `line` accessors stops after [`MAX_DEPTH`](super::MAX_DEPTH)
    /// levels with a [`ShapeError::ShapeMismatch`]; nested lists unwrap to any depth.
    pub fn coerce(input: &Input) -> Result<Line, ShapeError> {
        coerce_at(input, 0)
    }

    /// Build a line from already-split positional arguments: `(description)`, `(a, b)` or `(xa, ya, xb, yb)`.
    pub fn from_args(args: &[Input]) -> Result<Line, ShapeError> {
        match args {
            [arg] => Line::coerce(arg),
            _ => from_items(args, 0),
        }
    }
}

impl TryFrom<&Input> for Line {
    type Error = ShapeError;
    fn try_from(input: &Input) -> Result<Self, Self::Error> {
        Line::coerce(input)
    }
}
