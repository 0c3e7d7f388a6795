//! Glyph chain: ordered points plus a trailing end anchor.

use crate::float::Float;
use crate::glyph::Glyph;
use crate::observer::StepObserver;
use crate::point::{ChainPoint, Integrator};
use crate::spring::SpringSolver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// One point per character, head first.
///
/// The end anchor is a glyph-less point that joins the sequence only for
/// the duration of a settle pass, giving the last glyph something to trail
/// toward and stretch against.
#[derive(Clone, Debug, Default)]
pub struct Chain<F: Float> {
    points: AllocVec<ChainPoint<F>>,
    end_anchor: ChainPoint<F>,
}

/// Counts from a [`Chain::rebuild`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rebuild {
    pub retained: usize,
    pub appended: usize,
    pub truncated: usize,
}

impl<F: Float> Chain<F> {
    pub fn new() -> Self {
        Chain {
            points: AllocVec::new(),
            end_anchor: ChainPoint::default(),
        }
    }

    /// Re-fit the chain to `glyphs`.
    ///
    /// Existing points in the retained prefix keep their positions and
    /// velocities and only take the new glyph. Extra points are dropped from
    /// the tail; missing ones are appended at rest at the origin. Each
    /// supplied entry in `positions` then places the matching point at rest.
    pub fn rebuild<I>(&mut self, glyphs: I, positions: Option<&[Vec2<F>]>) -> Rebuild
    where
        I: IntoIterator<Item = Glyph<F>>,
    {
        let before = self.points.len();
        let mut len = 0;
        for glyph in glyphs {
            match self.points.get_mut(len) {
                Some(p) => p.glyph = glyph,
                None => self.points.push(ChainPoint::new(glyph)),
            }
            len += 1;
        }
        self.points.truncate(len);

        if let Some(positions) = positions {
            for (p, &pos) in self.points.iter_mut().zip(positions) {
                p.place(pos);
            }
        }

        Rebuild {
            retained: before.min(len),
            appended: len.saturating_sub(before),
            truncated: before.saturating_sub(len),
        }
    }

    /// One settle pass: integrate head, then for each link integrate the
    /// trailing point and correct the pair. Corrections propagate tip to
    /// tail within the pass, one link per step.
    ///
    /// The end anchor participates as the last point.
    pub fn settle<O: StepObserver>(
        &mut self,
        integrator: &Integrator<F>,
        solver: &SpringSolver<F>,
        observer: &mut O,
    ) {
        if self.points.is_empty() {
            return;
        }
        self.with_anchor(|points| settle_points(points, integrator, solver, observer));
    }

    /// Run `f` over the points with the end anchor temporarily appended.
    ///
    /// The anchor is detached again before returning, whatever `f` did to it.
    pub fn with_anchor<R>(&mut self, f: impl FnOnce(&mut [ChainPoint<F>]) -> R) -> R {
        self.points.push(core::mem::take(&mut self.end_anchor));
        let out = f(self.points.as_mut_slice());
        if let Some(anchor) = self.points.pop() {
            self.end_anchor = anchor;
        }
        out
    }

    pub fn points(&self) -> &[ChainPoint<F>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [ChainPoint<F>] {
        &mut self.points
    }

    pub fn point(&self, index: usize) -> Option<&ChainPoint<F>> {
        self.points.get(index)
    }

    pub fn point_mut(&mut self, index: usize) -> Option<&mut ChainPoint<F>> {
        self.points.get_mut(index)
    }

    pub fn end_anchor(&self) -> &ChainPoint<F> {
        &self.end_anchor
    }

    pub fn end_anchor_mut(&mut self) -> &mut ChainPoint<F> {
        &mut self.end_anchor
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Settle an explicit point sequence (anchor already appended, if any).
pub fn settle_points<F: Float, O: StepObserver>(
    points: &mut [ChainPoint<F>],
    integrator: &Integrator<F>,
    solver: &SpringSolver<F>,
    observer: &mut O,
) {
    if let Some(head) = points.first_mut() {
        integrator.integrate(head);
        observer.on_integrate(0);
    }

    for i in 0..points.len().saturating_sub(1) {
        integrator.integrate(&mut points[i + 1]);
        observer.on_integrate(i + 1);

        solver.solve_at(points, i);
        observer.on_spring(i);
    }

    observer.on_settle_complete(points.len());
}
