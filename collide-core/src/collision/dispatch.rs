//! Rectangle/line collision, with a vectorized path picked at runtime.
//!
//! The strategy is chosen on first use from a CPU capability probe and memoized; the same binary runs on machines with or
//! without AVX2. [`rect_line_scalar`] is the reference: every strategy returns the same boolean for every input.

use std::sync::OnceLock;

use log::debug;

use crate::{line::Line, rect::Rect};

use super::line_line;

pub type RectLineFn = fn(&Rect, &Line) -> bool;

struct Strategy {
    name: &'static str,
    rect_line: RectLineFn,
}

static STRATEGY: OnceLock<Strategy> = OnceLock::new();

fn strategy() -> &'static Strategy {
    STRATEGY.get_or_init(|| {
        let strategy = detect();
        debug!("rect_line: using {} strategy", strategy.name);
        strategy
    })
}

fn detect() -> Strategy {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return Strategy { name: "avx2", rect_line: avx2::rect_line };
        }
    }
    Strategy { name: "fallback", rect_line: rect_line_scalar }
}

/// Name of the strategy [`rect_line`] dispatches to: `"avx2"` or `"fallback"`.
pub fn simd_level() -> &'static str {
    strategy().name
}

/// `line` crosses or touches one of the rectangle's four edges.
///
/// A line entirely inside the rectangle touches no edge and does not collide.
pub fn rect_line(rect: &Rect, line: &Line) -> bool {
    (strategy().rect_line)(rect, line)
}

/// Test `line` against the top, left, bottom and right edges in turn.
pub fn rect_line_scalar(rect: &Rect, line: &Line) -> bool {
    rect.edges().iter().any(|edge| line_line(line, edge))
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod avx2 {
    #[cfg(target_arch = "x86")]
    use std::arch::x86::*;
    #[cfg(target_arch = "x86_64")]
    use std::arch::x86_64::*;

    use crate::{line::Line, rect::Rect};

    pub(super) fn rect_line(rect: &Rect, line: &Line) -> bool {
        // SAFETY: only selected by `detect` after `is_x86_feature_detected!("avx2")`.
        unsafe { rect_line_avx2(rect, line) }
    }

    /// One [`line_line`](super::line_line) per lane (top, left, bottom, right), with the scalar path's operation order.
    #[target_feature(enable = "avx2")]
    pub(super) unsafe fn rect_line_avx2(rect: &Rect, line: &Line) -> bool {
        let (x, y, r, b) = (rect.x, rect.y, rect.right(), rect.bottom());

        let bxa = _mm256_setr_pd(x, x, x, r);
        let bya = _mm256_setr_pd(y, y, b, y);
        let bxb = _mm256_setr_pd(r, x, r, r);
        let byb = _mm256_setr_pd(y, b, b, b);

        let xa = _mm256_set1_pd(line.xa());
        let ya = _mm256_set1_pd(line.ya());
        let x1_m_x2 = _mm256_set1_pd(line.xa() - line.xb());
        let y1_m_y2 = _mm256_set1_pd(line.ya() - line.yb());
        let y3_m_y4 = _mm256_sub_pd(bya, byb);
        let x3_m_x4 = _mm256_sub_pd(bxa, bxb);

        let den = _mm256_sub_pd(_mm256_mul_pd(x1_m_x2, y3_m_y4), _mm256_mul_pd(y1_m_y2, x3_m_x4));

        let x1_m_x3 = _mm256_sub_pd(xa, bxa);
        let y1_m_y3 = _mm256_sub_pd(ya, bya);

        let t1 = _mm256_sub_pd(_mm256_mul_pd(x1_m_x3, y3_m_y4), _mm256_mul_pd(y1_m_y3, x3_m_x4));
        let t = _mm256_div_pd(t1, den);

        let u1 = _mm256_sub_pd(_mm256_mul_pd(x1_m_x2, y1_m_y3), _mm256_mul_pd(y1_m_y2, x1_m_x3));
        // Flip the sign bit: exact negation, as in the scalar path.
        let u = _mm256_xor_pd(_mm256_div_pd(u1, den), _mm256_set1_pd(-0.));

        let zero = _mm256_setzero_pd();
        let one = _mm256_set1_pd(1.);
        let hit = _mm256_and_pd(
            _mm256_and_pd(
                _mm256_cmp_pd(den, zero, _CMP_NEQ_UQ),
                _mm256_and_pd(_mm256_cmp_pd(t, zero, _CMP_GE_OQ), _mm256_cmp_pd(t, one, _CMP_LE_OQ)),
            ),
            _mm256_and_pd(_mm256_cmp_pd(u, zero, _CMP_GE_OQ), _mm256_cmp_pd(u, one, _CMP_LE_OQ)),
        );
        _mm256_movemask_pd(hit) != 0
    }
}
