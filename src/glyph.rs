//! Glyphs and the injected glyph-metrics service.

use crate::float::Float;

/// A character together with its rest distance to the next chain point.
///
/// `spacing` is the measured advance width of `character` at the current
/// font; it is recomputed (never mutated in place) when the font changes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyph<F: Float> {
    pub character: char,
    pub spacing: F,
}

impl<F: Float> Glyph<F> {
    pub fn new(character: char, spacing: F) -> Self {
        Glyph { character, spacing }
    }

    /// Measure `character` with `metrics` at the given font.
    pub fn measure<M: GlyphMetrics<F> + ?Sized>(
        character: char,
        metrics: &M,
        font_size: F,
        font_family: &str,
    ) -> Self {
        Glyph {
            character,
            spacing: metrics.advance_width(character, font_size, font_family),
        }
    }
}

impl<F: Float> Default for Glyph<F> {
    fn default() -> Self {
        Glyph { character: '\0', spacing: F::zero() }
    }
}

/// Measures how far the pen advances after drawing a character.
///
/// Must be deterministic for fixed inputs. Hosts back this with their text
/// stack (a canvas `measureText`, a font rasterizer); tests use
/// [`MonospaceMetrics`] or a closure.
pub trait GlyphMetrics<F: Float> {
    fn advance_width(&self, character: char, font_size: F, font_family: &str) -> F;
}

impl<F: Float, T> GlyphMetrics<F> for T
where
    T: Fn(char, F, &str) -> F,
{
    fn advance_width(&self, character: char, font_size: F, font_family: &str) -> F {
        self(character, font_size, font_family)
    }
}

/// Fixed-pitch metrics: every character advances `em_ratio * font_size`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMetrics<F: Float> {
    pub em_ratio: F,
}

impl<F: Float> MonospaceMetrics<F> {
    pub fn new(em_ratio: F) -> Self {
        MonospaceMetrics { em_ratio }
    }
}

impl<F: Float> Default for MonospaceMetrics<F> {
    fn default() -> Self {
        MonospaceMetrics { em_ratio: F::from_f32(0.6) }
    }
}

impl<F: Float> GlyphMetrics<F> for MonospaceMetrics<F> {
    fn advance_width(&self, _character: char, font_size: F, _font_family: &str) -> F {
        self.em_ratio * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_scales_with_font_size() {
        let metrics = MonospaceMetrics::new(0.5f32);
        let g = Glyph::measure('W', &metrics, 40.0, "serif");
        assert_eq!(g, Glyph::new('W', 20.0));
    }

    #[test]
    fn closure_metrics() {
        let narrow_i = |c: char, size: f64, _family: &str| if c == 'i' { size * 0.25 } else { size * 0.5 };
        assert_eq!(Glyph::measure('i', &narrow_i, 20.0, "serif").spacing, 5.0);
        assert_eq!(Glyph::measure('m', &narrow_i, 20.0, "serif").spacing, 10.0);
    }
}
