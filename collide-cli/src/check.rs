//! Turns JSON arguments into shapes, with errors that name the accepted formats.

use anyhow::{Context, Result};
use clap::ValueEnum;
use collide_core::{collision, input, Circle, Input, Line, Rect, R2};

const CIRCLE_FORMATS: &str = "Expected a circle: a Circle, (x, y, r), ((x, y), r), a 1-element sequence wrapping one of these, or an object with a `circle` member";
const LINE_FORMATS: &str = "Expected a line: a Line, (xa, ya, xb, yb), ((xa, ya), (xb, yb)), a 1-element sequence wrapping one of these, or an object with a `line` member";
const POINT_FORMATS: &str = "Expected a point: (x, y) or an object with `x` and `y` members";
const RECT_FORMATS: &str = "Expected a rect: [x, y, w, h] or an object with `x`, `y`, `w` and `h` members";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Predicate {
    CirclePoint,
    CircleCircle,
    RectCircle,
    LineLine,
    LinePoint,
    LineCircle,
    RectLine,
}

/// Operands of one [`Predicate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Shapes {
    CirclePoint(Circle, R2<f64>),
    CircleCircle(Circle, Circle),
    RectCircle(Rect, Circle),
    LineLine(Line, Line),
    LinePoint(Line, R2<f64>),
    LineCircle(Line, Circle),
    RectLine(Rect, Line),
}

pub fn circle(args: &[Input]) -> Result<Circle> {
    Circle::from_args(args).context(CIRCLE_FORMATS)
}

pub fn line(args: &[Input]) -> Result<Line> {
    Line::from_args(args).context(LINE_FORMATS)
}

fn json(s: &str) -> Result<Input> {
    Input::from_json(s).with_context(|| format!("Invalid JSON {:?}", s))
}

fn circle_json(s: &str) -> Result<Circle> {
    circle(&[json(s)?])
}

fn line_json(s: &str) -> Result<Line> {
    line(&[json(s)?])
}

fn point_json(s: &str) -> Result<R2<f64>> {
    input::point(&json(s)?).context(POINT_FORMATS)
}

fn rect_json(s: &str) -> Result<Rect> {
    serde_json::from_str(s).context(RECT_FORMATS)
}

impl Shapes {
    pub fn parse(predicate: Predicate, a: &str, b: &str) -> Result<Shapes> {
        Ok(match predicate {
            Predicate::CirclePoint => Shapes::CirclePoint(circle_json(a)?, point_json(b)?),
            Predicate::CircleCircle => Shapes::CircleCircle(circle_json(a)?, circle_json(b)?),
            Predicate::RectCircle => Shapes::RectCircle(rect_json(a)?, circle_json(b)?),
            Predicate::LineLine => Shapes::LineLine(line_json(a)?, line_json(b)?),
            Predicate::LinePoint => Shapes::LinePoint(line_json(a)?, point_json(b)?),
            Predicate::LineCircle => Shapes::LineCircle(line_json(a)?, circle_json(b)?),
            Predicate::RectLine => Shapes::RectLine(rect_json(a)?, line_json(b)?),
        })
    }

    pub fn collides(&self) -> bool {
        match self {
            Shapes::CirclePoint(c, p) => collision::circle_point(c, *p),
            Shapes::CircleCircle(a, b) => collision::circle_circle(a, b),
            Shapes::RectCircle(r, c) => collision::rect_circle(r, c),
            Shapes::LineLine(a, b) => collision::line_line(a, b),
            Shapes::LinePoint(l, p) => collision::line_point(l, *p),
            Shapes::LineCircle(l, c) => collision::line_circle(l, c),
            Shapes::RectLine(r, l) => collision::rect_line(r, l),
        }
    }
}
