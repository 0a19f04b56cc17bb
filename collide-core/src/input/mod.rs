//! Loosely-typed external shape descriptions, and the conversions that turn them into canonical [`Circle`]s and [`Line`]s.
//!
//! Coercion tries a fixed, ordered list of matchers (see [`circle`] and [`line`]); each either claims the input (yielding a shape or an
//! error) or falls through to the next one. Input that no matcher claims is a [`ShapeError::ShapeMismatch`].

pub mod circle;
pub mod json;
pub mod line;
mod scalar;

use std::{fmt, sync::Arc};

use derive_more::From;
use log::debug;

use crate::{circle::Circle, error::{ProbeError, ShapeError}, line::Line};

pub use json::JsonObject;
pub use scalar::{point, radius, scalar};

/// Nesting limit for recursive coercion through [`Sequence`]s and [`ShapeSource`] accessors, either of which may refer
/// back to itself. Nested [`Input::List`]s are owned, finite trees and unwrap without counting toward it.
pub const MAX_DEPTH: usize = 32;

/// An external value that may describe a shape.
#[derive(Clone)]
pub enum Input {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Fixed-size, directly indexable container (array/tuple-like).
    List(Vec<Input>),
    /// Any other positional sequence.
    Seq(Arc<dyn Sequence>),
    Circle(Circle),
    Line(Line),
    Object(Arc<dyn ShapeSource>),
}

/// Positional access to a sequence that isn't a plain [`Input::List`].
pub trait Sequence: Send + Sync {
    fn len(&self) -> usize;
    fn item(&self, idx: usize) -> Option<Input>;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type Method = Box<dyn Fn() -> Result<Input, ProbeError> + Send + Sync>;

/// A shape-producing attribute: either a plain value or a zero-argument method whose result is coerced.
#[derive(From)]
pub enum Accessor {
    Value(Input),
    Method(Method),
}

impl Accessor {
    pub fn method(f: impl Fn() -> Result<Input, ProbeError> + Send + Sync + 'static) -> Self {
        let f: Method = Box::new(f);
        f.into()
    }
    pub fn resolve(self) -> Result<Input, ProbeError> {
        match self {
            Accessor::Value(input) => Ok(input),
            Accessor::Method(f) => f(),
        }
    }
}

/// Capability of an arbitrary object to describe a shape (or a point) through a named accessor.
///
/// `Ok(None)` means the object has no such accessor. Errors are swallowed by the coercion layer and
/// treated as "does not match".
pub trait ShapeSource: Send + Sync {
    fn circle(&self) -> Result<Option<Accessor>, ProbeError> {
        Ok(None)
    }
    fn line(&self) -> Result<Option<Accessor>, ProbeError> {
        Ok(None)
    }
    fn point(&self) -> Result<Option<Accessor>, ProbeError> {
        Ok(None)
    }
}

/// Read (and if needed, invoke) an accessor, converting any [`ProbeError`] into "absent".
pub(crate) fn probe(
    attr: &'static str,
    get: impl FnOnce() -> Result<Option<Accessor>, ProbeError>,
) -> Option<Input> {
    match get().and_then(|accessor| accessor.map(Accessor::resolve).transpose()) {
        Ok(input) => input,
        Err(e) => {
            debug!("ignoring `{}` accessor: {}", attr, e);
            None
        }
    }
}

/// Outcome of one matcher: `None` falls through to the next matcher in priority order.
pub(crate) type Matched<T> = Option<Result<T, ShapeError>>;

pub(crate) type Matcher<T> = fn(&Input, usize) -> Matched<T>;

/// Run `matchers` in order; the first one that claims the input decides the result.
pub(crate) fn dispatch<T>(matchers: &[(&str, Matcher<T>)], input: &Input, depth: usize) -> Result<T, ShapeError> {
    if depth > MAX_DEPTH {
        debug!("coercion exceeded nesting depth {}", MAX_DEPTH);
        return Err(ShapeError::ShapeMismatch);
    }
    matchers
        .iter()
        .find_map(|(_, matcher)| matcher(input, depth))
        .unwrap_or(Err(ShapeError::ShapeMismatch))
}

/// Depth at which the items of `input` are coerced.
pub(crate) fn nested(input: &Input, depth: usize) -> usize {
    match input {
        Input::List(_) => depth,
        _ => depth + 1,
    }
}

/// Materialize the items of a list or positional sequence of one of the given lengths.
///
/// Returns `None` for anything that isn't a sequence, `Some(Err)` for a sequence of another length or with missing items.
pub(crate) fn items(input: &Input, lengths: &[usize]) -> Matched<Vec<Input>> {
    match input {
        Input::List(items) => Some(if lengths.contains(&items.len()) {
            Ok(items.clone())
        } else {
            Err(ShapeError::ShapeMismatch)
        }),
        Input::Seq(seq) => {
            let n = seq.len();
            if !lengths.contains(&n) {
                return Some(Err(ShapeError::ShapeMismatch));
            }
            Some((0..n).map(|idx| seq.item(idx).ok_or(ShapeError::ShapeMismatch)).collect())
        }
        _ => None,
    }
}

impl Input {
    pub fn is_str(&self) -> bool {
        matches!(self, Input::Str(_))
    }
    pub fn seq(seq: impl Sequence + 'static) -> Self {
        Input::Seq(Arc::new(seq))
    }
    pub fn object(src: impl ShapeSource + 'static) -> Self {
        Input::Object(Arc::new(src))
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Null => write!(f, "null"),
            Input::Bool(b) => write!(f, "{}", b),
            Input::Int(i) => write!(f, "{}", i),
            Input::Float(x) => write!(f, "{:?}", x),
            Input::Str(s) => write!(f, "{:?}", s),
            Input::List(items) => f.debug_list().entries(items).finish(),
            Input::Seq(seq) => write!(f, "<sequence of {}>", seq.len()),
            Input::Circle(c) => write!(f, "{}", c),
            Input::Line(l) => write!(f, "{}", l),
            Input::Object(_) => write!(f, "<object>"),
        }
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl From<i64> for Input {
    fn from(i: i64) -> Self {
        Input::Int(i)
    }
}

impl From<i32> for Input {
    fn from(i: i32) -> Self {
        Input::Int(i as i64)
    }
}

impl From<f64> for Input {
    fn from(x: f64) -> Self {
        Input::Float(x)
    }
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Str(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Str(s)
    }
}

impl From<Circle> for Input {
    fn from(c: Circle) -> Self {
        Input::Circle(c)
    }
}

impl From<Line> for Input {
    fn from(l: Line) -> Self {
        Input::Line(l)
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::List(items.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Input>> From<(A,)> for Input {
    fn from((a,): (A,)) -> Self {
        Input::List(vec![a.into()])
    }
}

impl<A: Into<Input>, B: Into<Input>> From<(A, B)> for Input {
    fn from((a, b): (A, B)) -> Self {
        Input::List(vec![a.into(), b.into()])
    }
}

impl<A: Into<Input>, B: Into<Input>, C: Into<Input>> From<(A, B, C)> for Input {
    fn from((a, b, c): (A, B, C)) -> Self {
        Input::List(vec![a.into(), b.into(), c.into()])
    }
}

impl<A: Into<Input>, B: Into<Input>, C: Into<Input>, D: Into<Input>> From<(A, B, C, D)> for Input {
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Input::List(vec![a.into(), b.into(), c.into(), d.into()])
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use testing::*;

    #[test]
    fn items_lengths() {
        let list: Input = (1, 2, 3).into();
        assert_eq!(items(&list, &[3]).unwrap().unwrap().len(), 3);
        assert!(matches!(items(&list, &[1, 2]), Some(Err(ShapeError::ShapeMismatch))));
        let seq = Input::seq(VecSeq(vec![1.into(), 2.into()]));
        assert_eq!(items(&seq, &[2]).unwrap().unwrap().len(), 2);
        assert!(items(&Input::Float(1.), &[1]).is_none());
    }

    #[test_log::test]
    fn probe_swallows_errors() {
        let broken = Attrs { broken: true, ..Default::default() };
        assert!(probe("circle", || broken.circle()).is_none());
        let failing: Result<Option<Accessor>, ProbeError> = Ok(Some(Accessor::method(|| Err(ProbeError::new("circle", "raised")))));
        assert!(probe("circle", || failing).is_none());
        let absent = Attrs::default();
        assert!(probe("circle", || absent.circle()).is_none());
    }

    #[test]
    fn probe_resolves() {
        let attrs = Attrs { circle_method: Some((1, 2, 3).into()), ..Default::default() };
        let input = probe("circle", || attrs.circle()).unwrap();
        assert_eq!(format!("{:?}", input), "[1, 2, 3]");
    }

    #[test]
    fn debug() {
        let input: Input = (1.5, "a", vec![true]).into();
        assert_eq!(format!("{:?}", input), r#"[1.5, "a", [true]]"#);
        assert_eq!(format!("{:?}", Input::seq(VecSeq(vec![]))), "<sequence of 0>");
    }
}
