//! Per-frame host input: drag target and bounding region.

use crate::float::Float;
use crate::point::ChainPoint;
use crate::vec::Vec2;

/// Axis-aligned region points are clamped into before each settle pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<F: Float> {
    pub min: Vec2<F>,
    pub max: Vec2<F>,
}

impl<F: Float> Bounds<F> {
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Self {
        Bounds { min, max }
    }

    /// The viewport `[0, width] x [0, height]`.
    pub fn viewport(width: F, height: F) -> Self {
        Bounds { min: Vec2::zero(), max: Vec2::new(width, height) }
    }

    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Clamp every point's current position. Previous positions are left
    /// alone, so a point pushed back in keeps its inward velocity.
    pub fn clamp_points(&self, points: &mut [ChainPoint<F>]) {
        for p in points.iter_mut() {
            p.pos = p.pos.clamp(self.min, self.max);
        }
    }
}

/// A point being dragged by the pointer.
///
/// Holds an index rather than a borrow so it can live between frames while
/// the host keeps mutating the string.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState<F: Float> {
    pub index: usize,
    pub pointer: Vec2<F>,
}

impl<F: Float> DragState<F> {
    pub fn new(index: usize, pointer: Vec2<F>) -> Self {
        DragState { index, pointer }
    }

    /// Follow the pointer.
    pub fn move_to(&mut self, pointer: Vec2<F>) {
        self.pointer = pointer;
    }

    /// Pin the dragged point under the pointer. Returns `false` if the index
    /// no longer addresses a point (the text shrank mid-drag).
    pub fn apply(&self, points: &mut [ChainPoint<F>]) -> bool {
        match points.get_mut(self.index) {
            Some(p) => {
                p.pos = self.pointer;
                true
            }
            None => false,
        }
    }
}

/// Everything the host feeds into one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput<F: Float> {
    pub drag: Option<DragState<F>>,
    pub bounds: Option<Bounds<F>>,
}

impl<F: Float> FrameInput<F> {
    pub fn new() -> Self {
        FrameInput { drag: None, bounds: None }
    }

    pub fn with_drag(mut self, drag: Option<DragState<F>>) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = Some(bounds);
        self
    }
}
