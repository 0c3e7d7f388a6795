use slinky::{
    Bounds, DragState, DrawSurface, ElasticString, FrameInput, GlyphMetrics, SimulationConfig,
    Vec2,
};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

const DEFAULT_TEXT: &str = "The quick brown fox jumps over the lazy dog.";
const DEFAULT_FONT_SIZE: f64 = 25.0;
const DEFAULT_FONT_FAMILY: &str = "Georgia, Times, serif";
const FILL_STYLE: &str = "#3a3a2c";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slinky demo starting");
}

fn css_font(font_size: f64, font_family: &str) -> String {
    format!("{}px {}", font_size, font_family)
}

// ---- Canvas adapters ----

/// Glyph advance widths from `measureText` on a canvas context.
struct CanvasMetrics {
    ctx: CanvasRenderingContext2d,
}

impl GlyphMetrics<f64> for CanvasMetrics {
    fn advance_width(&self, character: char, font_size: f64, font_family: &str) -> f64 {
        self.ctx.set_font(&css_font(font_size, font_family));
        let mut buf = [0u8; 4];
        match self.ctx.measure_text(character.encode_utf8(&mut buf)) {
            Ok(metrics) => metrics.width(),
            Err(e) => {
                log::warn!("measureText failed for {:?}: {:?}", character, e);
                0.0
            }
        }
    }
}

struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl DrawSurface<f64> for CanvasSurface<'_> {
    fn draw_rotated_glyph(&mut self, character: char, x: f64, y: f64, angle: f64, font_size: f64, font_family: &str) {
        let mut buf = [0u8; 4];
        self.ctx.save();
        self.ctx.set_font(&css_font(font_size, font_family));
        if self.ctx.translate(x, y).is_ok() && self.ctx.rotate(angle).is_ok() {
            self.ctx.fill_text(character.encode_utf8(&mut buf), 0.0, 0.0).ok();
        }
        self.ctx.restore();
    }

    fn clear_region(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }
}

// ---- Elastic Text Demo ----

/// Elastic text on a 2D canvas. JS owns the canvas, the listeners and the
/// `requestAnimationFrame` loop, and forwards them here.
#[wasm_bindgen]
pub struct ElasticTextDemo {
    text: ElasticString<f64, CanvasMetrics>,
    ctx: CanvasRenderingContext2d,
    bounds: Bounds<f64>,
    drag: Option<DragState<f64>>,
}

#[wasm_bindgen]
impl ElasticTextDemo {
    /// Scatter the default text across a `width` x `height` canvas, head at (100, 100).
    #[wasm_bindgen(constructor)]
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        ctx.set_fill_style_str(FILL_STYLE);
        let config = SimulationConfig::new()
            .with_font_size(DEFAULT_FONT_SIZE)
            .with_font_family(DEFAULT_FONT_FAMILY);
        let mut text = ElasticString::new(config, CanvasMetrics { ctx: ctx.clone() });

        let positions: Vec<Vec2<f64>> = (0..DEFAULT_TEXT.chars().count())
            .map(|i| {
                if i == 0 {
                    Vec2::new(100.0, 100.0)
                } else {
                    Vec2::new(width * math_random(), height * math_random())
                }
            })
            .collect();
        text.set_text(DEFAULT_TEXT, Some(positions.as_slice()));

        ElasticTextDemo {
            text,
            ctx,
            bounds: Bounds::viewport(width, height),
            drag: None,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = Bounds::viewport(width, height);
        self.ctx.set_fill_style_str(FILL_STYLE);
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.set_text(text, None);
    }

    pub fn text(&self) -> String {
        self.text.text().to_string()
    }

    /// Returns `false` (and keeps the old size) when `font_size` is not positive.
    pub fn set_font_size(&mut self, font_size: f64) -> bool {
        match slinky::config::validate_font_size(font_size) {
            Ok(()) => {
                self.text.set_font_size(font_size);
                true
            }
            Err(e) => {
                log::warn!("rejected font size {}: {}", font_size, e);
                false
            }
        }
    }

    pub fn font_size(&self) -> f64 {
        self.text.font_size()
    }

    pub fn set_friction(&mut self, friction: f64) -> bool {
        match slinky::config::validate_friction(friction) {
            Ok(()) => {
                self.text.friction = friction;
                true
            }
            Err(e) => {
                log::warn!("rejected friction {}: {}", friction, e);
                false
            }
        }
    }

    pub fn friction(&self) -> f64 {
        self.text.friction
    }

    pub fn set_spring(&mut self, spring: f64) -> bool {
        match slinky::config::validate_spring(spring) {
            Ok(()) => {
                self.text.spring = spring;
                true
            }
            Err(e) => {
                log::warn!("rejected spring {}: {}", spring, e);
                false
            }
        }
    }

    pub fn spring(&self) -> f64 {
        self.text.spring
    }

    /// Grab the glyph under the pointer, if any. Returns whether one was hit.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.drag = self.text.begin_drag(Vec2::new(x, y));
        self.drag.is_some()
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.move_to(Vec2::new(x, y));
        }
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
    }

    /// Advance and draw one frame. Returns the number of glyphs drawn.
    pub fn frame(&mut self) -> usize {
        let input = FrameInput::new()
            .with_drag(self.drag)
            .with_bounds(self.bounds);
        let mut surface = CanvasSurface { ctx: &self.ctx };
        self.text.frame(&input, &mut surface)
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.text.len() * 2);
        for p in self.text.points() {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }

    pub fn glyph_count(&self) -> usize {
        self.text.len()
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Math, js_name = random)]
    fn math_random() -> f64;
}
