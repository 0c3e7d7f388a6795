//! Stretched glyph rendering over a settled chain.

use crate::float::Float;
use crate::point::ChainPoint;
use crate::vec::Vec2;

/// Where glyphs end up. Screen space, origin top-left, y down; rotation is
/// clockwise-positive to match `atan2(dy, dx)` in that space.
pub trait DrawSurface<F: Float> {
    /// Draw `character` with its origin at `(x, y)`, rotated by `angle` radians.
    fn draw_rotated_glyph(&mut self, character: char, x: F, y: F, angle: F, font_size: F, font_family: &str);

    fn clear_region(&mut self, x: F, y: F, width: F, height: F);
}

/// One glyph draw, as computed from a link of the chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke<F: Float> {
    pub character: char,
    pub pos: Vec2<F>,
    pub angle: F,
    pub font_size: F,
}

impl<F: Float> Stroke<F> {
    /// The stroke for link `(p0, p1)`: `p0`'s glyph at `p0`, facing `p1`,
    /// grown to the link length when that exceeds the base size.
    pub fn between(p0: &ChainPoint<F>, p1: &ChainPoint<F>, base_font_size: F) -> Self {
        let delta = p1.pos - p0.pos;
        Stroke {
            character: p0.glyph.character,
            pos: p0.pos,
            angle: delta.angle(),
            font_size: base_font_size.max(delta.length()),
        }
    }
}

/// Walks a settled chain and emits one stroke per link.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Renderer<F: Float> {
    pub base_font_size: F,
}

impl<F: Float> Renderer<F> {
    pub fn new(base_font_size: F) -> Self {
        Renderer { base_font_size }
    }

    /// Strokes for every adjacent pair, head to tail.
    ///
    /// Pass the points with the end anchor still appended so the last glyph
    /// has a link to draw along.
    pub fn strokes<'a>(&self, points: &'a [ChainPoint<F>]) -> impl Iterator<Item = Stroke<F>> + 'a {
        let base = self.base_font_size;
        points.windows(2).map(move |pair| Stroke::between(&pair[0], &pair[1], base))
    }

    /// Draw every stroke onto `surface`. Returns the number of glyphs drawn.
    pub fn render<S: DrawSurface<F> + ?Sized>(
        &self,
        points: &[ChainPoint<F>],
        font_family: &str,
        surface: &mut S,
    ) -> usize {
        let mut drawn = 0;
        for stroke in self.strokes(points) {
            surface.draw_rotated_glyph(
                stroke.character,
                stroke.pos.x,
                stroke.pos.y,
                stroke.angle,
                stroke.font_size,
                font_family,
            );
            drawn += 1;
        }
        drawn
    }
}
