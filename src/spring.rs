//! Pairwise distance correction between adjacent chain points.

use crate::float::Float;
use crate::point::ChainPoint;

/// Single-iteration distance constraint with even mass split.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringSolver<F: Float> {
    /// 0 = no pull toward rest length, 1 = full correction in one call.
    pub stiffness: F,
}

impl<F: Float> SpringSolver<F> {
    pub fn new(stiffness: F) -> Self {
        SpringSolver { stiffness }
    }

    /// Correction scale for a pair `dist` apart with rest length `rest`.
    ///
    /// Zero when the points overlap exactly.
    pub fn scale(&self, rest: F, dist: F) -> F {
        if dist == F::zero() {
            return F::zero();
        }
        (rest - dist) / dist * F::half() * self.stiffness
    }

    /// Pull `p0` and `p1` toward `p0.glyph.spacing` apart.
    ///
    /// Half the correction goes to each point, in opposite directions, so the
    /// pair's midpoint does not move. Fixed points are corrected too; `fixed`
    /// only exempts a point from inertia.
    pub fn solve(&self, p0: &mut ChainPoint<F>, p1: &mut ChainPoint<F>) {
        let delta = p0.pos - p1.pos;
        let dist = delta.length();
        let correction = delta.scale(self.scale(p0.glyph.spacing, dist));

        p0.pos = p0.pos + correction;
        p1.pos = p1.pos - correction;
    }

    /// Solve the pair `(points[i], points[i + 1])` in place.
    pub fn solve_at(&self, points: &mut [ChainPoint<F>], i: usize) {
        let (head, tail) = points.split_at_mut(i + 1);
        self.solve(&mut head[i], &mut tail[0]);
    }
}
