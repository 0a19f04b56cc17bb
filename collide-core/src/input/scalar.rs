use log::debug;

use crate::{circle::check_radius, error::ShapeError, r2::R2};

use super::{items, nested, probe, Input, MAX_DEPTH};

/// Numeric value of an int, float or bool; anything else is a mismatch.
pub fn scalar(input: &Input) -> Result<f64, ShapeError> {
    match input {
        Input::Float(x) => Ok(*x),
        Input::Int(i) => Ok(*i as f64),
        Input::Bool(b) => Ok(if *b { 1. } else { 0. }),
        _ => Err(ShapeError::ShapeMismatch),
    }
}

/// A candidate radius: numeric, finite and strictly positive.
pub fn radius(input: &Input) -> Result<f64, ShapeError> {
    let r = scalar(input).map_err(|_| ShapeError::InvalidRadius(format!("{:?}", input)))?;
    check_radius(r)
}

/// An `(x, y)` pair: a 2-element sequence of numbers, a 1-element sequence wrapping one, or an object exposing a point.
pub fn point(input: &Input) -> Result<R2<f64>, ShapeError> {
    point_at(input, 0)
}

pub(crate) fn point_at(input: &Input, depth: usize) -> Result<R2<f64>, ShapeError> {
    if depth > MAX_DEPTH {
        debug!("point coercion exceeded nesting depth {}", MAX_DEPTH);
        return Err(ShapeError::ShapeMismatch);
    }
    if let Some(items) = items(input, &[1, 2]) {
        return match items?.as_slice() {
            [x, y] => Ok(R2 { x: scalar(x)?, y: scalar(y)? }),
            [inner] if !inner.is_str() => point_at(inner, nested(input, depth)),
            _ => Err(ShapeError::ShapeMismatch),
        };
    }
    match input {
        Input::Object(src) => match probe("point", || src.point()) {
            Some(inner) => point_at(&inner, depth + 1),
            None => Err(ShapeError::ShapeMismatch),
        },
        _ => Err(ShapeError::ShapeMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::*;

    #[test]
    fn scalars() {
        assert_eq!(scalar(&1.5.into()), Ok(1.5));
        assert_eq!(scalar(&7.into()), Ok(7.));
        assert_eq!(scalar(&true.into()), Ok(1.));
        assert_eq!(scalar(&"1".into()), Err(ShapeError::ShapeMismatch));
        assert_eq!(scalar(&Input::Null), Err(ShapeError::ShapeMismatch));
        assert_eq!(scalar(&vec![1].into()), Err(ShapeError::ShapeMismatch));
    }

    #[test]
    fn radii() {
        assert_eq!(radius(&3.into()), Ok(3.));
        assert_eq!(radius(&0.25.into()), Ok(0.25));
        for bad in [Input::from(0), Input::from(-5), Input::from(f64::NAN), Input::from(f64::INFINITY), Input::from(false), Input::from("3")] {
            assert!(matches!(radius(&bad), Err(ShapeError::InvalidRadius(_))), "{:?}", bad);
        }
        assert_eq!(radius(&"3".into()), Err(ShapeError::InvalidRadius(r#""3""#.to_string())));
    }

    #[test]
    fn points() {
        let p = R2 { x: 1., y: 2. };
        assert_eq!(point(&(1, 2).into()), Ok(p));
        assert_eq!(point(&((1., 2.),).into()), Ok(p));
        assert_eq!(point(&Input::seq(VecSeq(vec![1.into(), 2.into()]))), Ok(p));
        assert_eq!(point(&Input::seq(VecSeq(vec![(1, 2).into()]))), Ok(p));
        assert_eq!(point(&Input::object(Attrs { point: Some((1, 2).into()), ..Default::default() })), Ok(p));
    }

    #[test]
    fn point_mismatches() {
        assert_eq!(point(&(1, 2, 3).into()), Err(ShapeError::ShapeMismatch));
        assert_eq!(point(&("12",).into()), Err(ShapeError::ShapeMismatch));
        assert_eq!(point(&(1, "2").into()), Err(ShapeError::ShapeMismatch));
        assert_eq!(point(&1.into()), Err(ShapeError::ShapeMismatch));
        assert_eq!(point(&Input::object(Attrs::default())), Err(ShapeError::ShapeMismatch));
        assert_eq!(point(&Input::object(Attrs { broken: true, ..Default::default() })), Err(ShapeError::ShapeMismatch));
    }

    #[test]
    fn nesting_limit() {
        let mut list: Input = (1, 2).into();
        let mut seq: Input = (1, 2).into();
        for _ in 0..MAX_DEPTH + 2 {
            list = (list,).into();
            seq = Input::seq(VecSeq(vec![seq]));
        }
        assert_eq!(point(&list), Ok(R2 { x: 1., y: 2. }));
        assert_eq!(point(&seq), Err(ShapeError::ShapeMismatch));
    }
}
