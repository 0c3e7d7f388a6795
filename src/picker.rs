//! Nearest-point hit test for pointer dragging.

use crate::float::Float;
use crate::point::ChainPoint;
use crate::vec::Vec2;

/// Finds the chain point under a pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointPicker<F: Float> {
    range_sq: F,
}

impl<F: Float> PointPicker<F> {
    /// Picker that accepts points strictly closer than `radius`.
    pub fn new(radius: F) -> Self {
        PointPicker { range_sq: radius * radius }
    }

    pub fn range_sq(&self) -> F {
        self.range_sq
    }

    /// Index of the nearest point within range, or `None`.
    ///
    /// Ties keep the earlier (headward) point.
    pub fn nearest(&self, points: &[ChainPoint<F>], query: Vec2<F>) -> Option<usize> {
        let mut nearest = self.range_sq;
        let mut hit = None;
        for (i, p) in points.iter().enumerate() {
            let dist_sq = query.distance_sq(p.pos);
            if dist_sq < nearest {
                nearest = dist_sq;
                hit = Some(i);
            }
        }
        hit
    }

    /// The nearest point within range, borrowed for in-place dragging.
    pub fn pick_mut<'a>(
        &self,
        points: &'a mut [ChainPoint<F>],
        query: Vec2<F>,
    ) -> Option<&'a mut ChainPoint<F>> {
        let index = self.nearest(points, query)?;
        points.get_mut(index)
    }
}
