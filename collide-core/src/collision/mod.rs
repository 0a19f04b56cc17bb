//! Pairwise collision predicates over canonical shapes.
//!
//! All predicates are total: they never fail and never allocate. Boundary contact counts as a collision for circles and points;
//! exactly parallel (including collinear) segments never collide.

pub mod dispatch;

use crate::{circle::Circle, line::Line, r2::R2, rect::Rect};

pub use dispatch::{rect_line, rect_line_scalar, simd_level};

/// Absolute slack for [`line_point`]; not scaled by segment length.
pub const LINE_POINT_TOLERANCE: f64 = 1e-6;

/// `p` is inside `circle` or on its boundary.
pub fn circle_point(circle: &Circle, p: R2<f64>) -> bool {
    let r = circle.r();
    (circle.center() - p).norm2() <= r * r
}

/// The circles overlap or are tangent.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let sum_radii = a.r() + b.r();
    (a.center() - b.center()).norm2() <= sum_radii * sum_radii
}

/// Test the point of `rect` nearest to the circle's center.
pub fn rect_circle(rect: &Rect, circle: &Circle) -> bool {
    let R2 { x: cx, y: cy } = circle.center();
    let (right, bottom) = (rect.right(), rect.bottom());
    let x = if cx < rect.x { rect.x } else if cx > right { right } else { cx };
    let y = if cy < rect.y { rect.y } else if cy > bottom { bottom } else { cy };
    circle_point(circle, R2 { x, y })
}

/// Segment intersection, parametrizing each segment over `[0, 1]`.
///
/// A zero determinant (parallel or collinear segments) is reported as no collision, even when collinear segments overlap.
pub fn line_line(a: &Line, b: &Line) -> bool {
    let x1_m_x2 = a.xa() - a.xb();
    let y3_m_y4 = b.ya() - b.yb();
    let y1_m_y2 = a.ya() - a.yb();
    let x3_m_x4 = b.xa() - b.xb();

    let den = x1_m_x2 * y3_m_y4 - y1_m_y2 * x3_m_x4;
    if den == 0. {
        return false;
    }

    let x1_m_x3 = a.xa() - b.xa();
    let y1_m_y3 = a.ya() - b.ya();

    let t = (x1_m_x3 * y3_m_y4 - y1_m_y3 * x3_m_x4) / den;
    let u = -((x1_m_x2 * y1_m_y3 - y1_m_y2 * x1_m_x3) / den);

    (0. ..=1.).contains(&t) && (0. ..=1.).contains(&u)
}

/// `p` lies on the segment: its distances to both endpoints sum to the segment's length, within [`LINE_POINT_TOLERANCE`].
pub fn line_point(line: &Line, p: R2<f64>) -> bool {
    let d = (line.a() - p).norm() + (line.b() - p).norm();
    let len = line.length();
    d >= len - LINE_POINT_TOLERANCE && d <= len + LINE_POINT_TOLERANCE
}

/// Either endpoint is in the circle, or the center's projection onto the segment is within `r` of the center.
///
/// A projection that falls outside the segment's extent is no collision, even if the infinite line would cross the circle.
pub fn line_circle(line: &Line, circle: &Circle) -> bool {
    let (a, b) = (line.a(), line.b());
    if circle_point(circle, a) || circle_point(circle, b) {
        return true;
    }
    let c = circle.center();
    let ab = b - a;
    let len = line.length();
    let dot = ((c.x - a.x) * ab.x + (c.y - a.y) * ab.y) / (len * len);
    let closest = a + ab * dot;
    if !line_point(line, closest) {
        return false;
    }
    (closest - c).norm() <= circle.r()
}

/// Symmetric-by-construction access to the predicates above.
pub trait Collide<O> {
    fn collides(&self, o: &O) -> bool;
}

impl Collide<R2<f64>> for Circle {
    fn collides(&self, p: &R2<f64>) -> bool {
        circle_point(self, *p)
    }
}

impl Collide<Circle> for Circle {
    fn collides(&self, o: &Circle) -> bool {
        circle_circle(self, o)
    }
}

impl Collide<Rect> for Circle {
    fn collides(&self, rect: &Rect) -> bool {
        rect_circle(rect, self)
    }
}

impl Collide<Circle> for Rect {
    fn collides(&self, circle: &Circle) -> bool {
        rect_circle(self, circle)
    }
}

impl Collide<Line> for Line {
    fn collides(&self, o: &Line) -> bool {
        line_line(self, o)
    }
}

impl Collide<R2<f64>> for Line {
    fn collides(&self, p: &R2<f64>) -> bool {
        line_point(self, *p)
    }
}

impl Collide<Circle> for Line {
    fn collides(&self, circle: &Circle) -> bool {
        line_circle(self, circle)
    }
}

impl Collide<Line> for Circle {
    fn collides(&self, line: &Line) -> bool {
        line_circle(line, self)
    }
}

impl Collide<Line> for Rect {
    fn collides(&self, line: &Line) -> bool {
        rect_line(self, line)
    }
}

impl Collide<Rect> for Line {
    fn collides(&self, rect: &Rect) -> bool {
        rect_line(rect, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(x, y, r).unwrap()
    }

    fn line(xa: f64, ya: f64, xb: f64, yb: f64) -> Line {
        Line::new(xa, ya, xb, yb).unwrap()
    }

    fn p(x: f64, y: f64) -> R2<f64> {
        R2 { x, y }
    }

    #[test]
    fn circle_point_boundary() {
        let c = circle(0., 0., 5.);
        assert!(circle_point(&c, p(0., 0.)));
        assert!(circle_point(&c, p(3., 4.)));
        assert!(circle_point(&c, p(-5., 0.)));
        assert!(circle_point(&c, p(0., 5.)));
        assert!(!circle_point(&c, p(3., 4.0000001)));
        assert!(!circle_point(&c, p(5., 5.)));
        assert!(c.collides(&p(1., 1.)));
    }

    #[test]
    fn circle_circle_tangent_and_symmetric() {
        let a = circle(0., 0., 2.);
        let b = circle(5., 0., 3.);
        assert!(circle_circle(&a, &b));
        assert!(circle_circle(&b, &a));
        let c = circle(3., 4., 3.);
        assert!(circle_circle(&a, &c) && circle_circle(&c, &a));
        let d = circle(5.5, 0., 3.);
        assert!(!circle_circle(&a, &d) && !circle_circle(&d, &a));
        let inner = circle(0.5, 0., 0.1);
        assert!(circle_circle(&a, &inner) && inner.collides(&a));
    }

    #[test]
    fn circle_circle_symmetry_sweep() {
        let coords = [-3., -1.5, 0., 0.5, 2., 4.];
        let radii = [0.25, 1., 2.5];
        for &ax in &coords {
            for &by in &coords {
                for &ar in &radii {
                    for &br in &radii {
                        let a = circle(ax, 0.5, ar);
                        let b = circle(1., by, br);
                        assert_eq!(circle_circle(&a, &b), circle_circle(&b, &a), "{} {}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn rect_circle_cases() {
        let rect = Rect::new(0., 0., 10., 5.);
        assert!(rect_circle(&rect, &circle(5., 2., 1e-300)));
        assert!(rect_circle(&rect, &circle(0., 0., f64::MIN_POSITIVE)));
        assert!(rect_circle(&rect, &circle(-1., 2., 1.)));
        assert!(!rect_circle(&rect, &circle(-1.1, 2., 1.)));
        assert!(rect_circle(&rect, &circle(13., 9., 5.)));
        assert!(!rect_circle(&rect, &circle(13., 9., 4.99)));
        assert!(rect_circle(&rect, &circle(5., 7., 2.)));
        assert!(circle(5., -3., 3.).collides(&rect));
        assert!(rect.collides(&circle(11., 2., 1.)));
    }

    #[test]
    fn line_line_cases() {
        let a = line(0., 0., 10., 10.);
        assert!(line_line(&a, &line(0., 10., 10., 0.)));
        // shared endpoint
        assert!(line_line(&a, &line(10., 10., 20., 0.)));
        assert!(line_line(&line(0., 0., 1., 0.), &line(0., 0., 0., 1.)));
        // T-junction
        assert!(line_line(&line(0., 0., 10., 0.), &line(5., 0., 5., 5.)));
        // would cross if extended
        assert!(!line_line(&a, &line(0., 30., 30., 20.)));
        // parallel
        assert!(!line_line(&a, &line(0., 1., 10., 11.)));
        // collinear and overlapping: determinant is zero
        assert!(!line_line(&a, &line(5., 5., 15., 15.)));
        assert!(!line_line(&a, &a));
        assert!(a.collides(&line(10., 0., 0., 10.)));
    }

    #[test]
    fn line_point_tolerance() {
        let l = line(0., 0., 10., 0.);
        assert!(line_point(&l, p(0., 0.)));
        assert!(line_point(&l, p(10., 0.)));
        assert!(line_point(&l, p(3.3, 0.)));
        assert!(line_point(&l, p(5., 1e-5)));
        assert!(!line_point(&l, p(5., 1e-2)));
        assert!(!line_point(&l, p(10.1, 0.)));
        assert!(!line_point(&l, p(-0.1, 0.)));
        assert!(l.collides(&p(7., 0.)));
    }

    #[test]
    fn line_circle_cases() {
        let c = circle(5., 5., 2.);
        // endpoint inside
        assert!(line_circle(&line(5., 5., 100., 100.), &c));
        assert!(line_circle(&line(0., 0., 5., 3.), &c));
        // passes through
        assert!(line_circle(&line(0., 5., 10., 5.), &c));
        assert!(line_circle(&line(0., 3., 10., 3.), &c));
        // misses
        assert!(!line_circle(&line(0., 0., 10., 0.), &c));
        assert!(c.collides(&line(5., 0., 5., 10.)));
    }

    #[test]
    fn line_circle_projection_outside_segment() {
        // The infinite line y = 0 passes through the circle, but the segment stops short of it.
        let c = circle(10., 0., 1.);
        assert!(!line_circle(&line(0., 0., 5., 0.), &c));
        assert!(!line_circle(&line(-5., 0., 8.5, 0.), &c));
        assert!(line_circle(&line(-5., 0., 9.5, 0.), &c));
    }

    #[test]
    fn rect_line_cases() {
        let rect = Rect::new(0., 0., 10., 10.);
        assert!(rect_line(&rect, &line(-5., 5., 15., 5.)));
        assert!(rect_line(&rect, &line(5., 5., 15., 5.)));
        // endpoint exactly on an edge
        assert!(rect_line(&rect, &line(-5., 5., 0., 5.)));
        assert!(rect_line(&rect, &line(5., -5., 5., 0.)));
        // ending exactly on a corner
        assert!(rect_line(&rect, &line(-5., -5., 0., 0.)));
        assert!(rect_line(&rect, &line(15., -5., 10., 0.)));
        // outside
        assert!(!rect_line(&rect, &line(20., 20., 30., 25.)));
        assert!(!rect_line(&rect, &line(-5., -1., 15., -1.)));
        // fully inside: no edge is crossed
        assert!(!rect_line(&rect, &line(2., 2., 8., 8.)));
        // collinear with the top edge, but crossing the left and right edges at the corners
        assert!(rect_line(&rect, &line(-5., 0., 15., 0.)));
        // collinear with the top edge and stopping short of both corners
        assert!(!rect_line(&rect, &line(2., 0., 8., 0.)));
        assert!(rect.collides(&line(-1., -1., 11., 11.)));
        assert!(line(-1., 5., 1., 5.).collides(&rect));
    }

    #[test]
    fn rect_line_corner_order_independent() {
        let rect = Rect::from((1, 1, 4, 3));
        let corners = [p(1., 1.), p(5., 1.), p(1., 4.), p(5., 4.)];
        for corner in corners {
            let l = Line::from_points(p(-10., -20.), corner).unwrap();
            assert!(rect_line(&rect, &l), "{}", l);
            assert!(rect_line_scalar(&rect, &l), "{}", l);
        }
    }
}
