//! Chain points and the damped Verlet integrator.

use crate::float::Float;
use crate::glyph::Glyph;
use crate::vec::Vec2;

/// A Verlet point carrying one glyph.
///
/// Velocity is implicit: `pos - prev_pos`. `prev_pos` always holds the
/// position from the start of the previous integration step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChainPoint<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    /// Exempt from inertia. Springs and the host may still move it.
    pub fixed: bool,
    pub glyph: Glyph<F>,
}

impl<F: Float> ChainPoint<F> {
    /// A free point at rest at the origin.
    pub fn new(glyph: Glyph<F>) -> Self {
        Self::at(glyph, Vec2::zero())
    }

    /// A free point at rest at `pos`.
    pub fn at(glyph: Glyph<F>, pos: Vec2<F>) -> Self {
        ChainPoint {
            pos,
            prev_pos: pos,
            fixed: false,
            glyph,
        }
    }

    /// Teleport to `pos` and drop all implicit velocity.
    pub fn place(&mut self, pos: Vec2<F>) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    /// Implicit per-frame velocity.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.fixed = true;
    }

    pub fn unpin(&mut self) {
        self.fixed = false;
    }
}

/// Inertia with damping, applied to one point per call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Integrator<F: Float> {
    /// 0 = undamped; values near 1 strongly damp.
    pub friction: F,
}

impl<F: Float> Integrator<F> {
    pub fn new(friction: F) -> Self {
        Integrator { friction }
    }

    /// Advance `p` by its implicit velocity scaled by `1 - friction`.
    ///
    /// The previous-position snapshot is taken even for fixed points, so a
    /// point released later carries no stale velocity from before it was pinned.
    pub fn integrate(&self, p: &mut ChainPoint<F>) {
        let retain = F::one() - self.friction;
        let last = p.prev_pos;
        p.prev_pos = p.pos;

        if p.fixed {
            return;
        }

        p.pos = p.pos + (p.pos - last).scale(retain);
    }
}
