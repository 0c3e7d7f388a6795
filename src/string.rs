//! The elastic string: text, font and physics coefficients around one chain.

use alloc::string::String;
use alloc::vec::Vec as AllocVec;
use log::{debug, trace};

use crate::chain::{Chain, settle_points};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::float::Float;
use crate::glyph::{Glyph, GlyphMetrics};
use crate::input::{DragState, FrameInput};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::picker::PointPicker;
use crate::point::{ChainPoint, Integrator};
use crate::render::{DrawSurface, Renderer};
use crate::spring::SpringSolver;
use crate::vec::Vec2;

/// A line of text strung on a spring chain.
///
/// Friction and spring take effect on the next frame with no rebuild.
/// Text and font changes re-measure every glyph but keep the motion of the
/// points that survive.
pub struct ElasticString<F: Float, M: GlyphMetrics<F>> {
    /// Damping coefficient, read every frame. Not validated.
    pub friction: F,
    /// Constraint stiffness, read every frame. Not validated.
    pub spring: F,
    font_size: F,
    font_family: String,
    text: String,
    chain: Chain<F>,
    metrics: M,
}

impl<F: Float, M: GlyphMetrics<F>> ElasticString<F, M> {
    /// An empty string using `config` and measuring glyphs with `metrics`.
    pub fn new(config: SimulationConfig<F>, metrics: M) -> Self {
        ElasticString {
            friction: config.friction,
            spring: config.spring,
            font_size: config.font_size,
            font_family: config.font_family,
            text: String::new(),
            chain: Chain::new(),
            metrics,
        }
    }

    /// Replace the text, optionally placing points.
    ///
    /// Entry `i` of `positions` places point `i` at rest; entries past the
    /// end of the text are ignored and points without an entry stay where
    /// they were (or at the origin if new).
    pub fn set_text(&mut self, text: &str, positions: Option<&[Vec2<F>]>) {
        let metrics = &self.metrics;
        let font_size = self.font_size;
        let font_family = self.font_family.as_str();
        let glyphs = text
            .chars()
            .map(|c| Glyph::measure(c, metrics, font_size, font_family));
        let rebuild = self.chain.rebuild(glyphs, positions);

        debug!(
            "chain rebuilt for {} glyphs: {} retained, {} appended, {} truncated",
            self.chain.len(),
            rebuild.retained,
            rebuild.appended,
            rebuild.truncated,
        );

        self.text.clear();
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Change the base font size and re-measure every glyph.
    pub fn set_font_size(&mut self, font_size: F) {
        debug!("font size {:?} -> {:?}", self.font_size, font_size);
        self.font_size = font_size;
        self.remeasure();
    }

    pub fn font_size(&self) -> F {
        self.font_size
    }

    /// Change the font family and re-measure every glyph.
    pub fn set_font_family(&mut self, font_family: impl Into<String>) {
        self.font_family = font_family.into();
        debug!("font family -> {}", self.font_family);
        self.remeasure();
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Current settings, as a config that would rebuild this string.
    pub fn config(&self) -> SimulationConfig<F> {
        SimulationConfig {
            font_size: self.font_size,
            font_family: self.font_family.clone(),
            friction: self.friction,
            spring: self.spring,
        }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn chain(&self) -> &Chain<F> {
        &self.chain
    }

    pub fn points(&self) -> &[ChainPoint<F>] {
        self.chain.points()
    }

    pub fn points_mut(&mut self) -> &mut [ChainPoint<F>] {
        self.chain.points_mut()
    }

    pub fn point_mut(&mut self, index: usize) -> Option<&mut ChainPoint<F>> {
        self.chain.point_mut(index)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.chain.positions()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Exempt point `index` from inertia.
    pub fn pin(&mut self, index: usize) -> Result<(), SimulationError> {
        self.checked_point_mut(index).map(ChainPoint::pin)
    }

    pub fn unpin(&mut self, index: usize) -> Result<(), SimulationError> {
        self.checked_point_mut(index).map(ChainPoint::unpin)
    }

    /// Pointer hit radius: one base font size.
    pub fn hit_radius(&self) -> F {
        self.font_size
    }

    pub fn picker(&self) -> PointPicker<F> {
        PointPicker::new(self.hit_radius())
    }

    /// Index of the point under `pointer`, if any.
    pub fn pick(&self, pointer: Vec2<F>) -> Option<usize> {
        let hit = self.picker().nearest(self.chain.points(), pointer);
        trace!("pick at ({:?}, {:?}) -> {:?}", pointer.x, pointer.y, hit);
        hit
    }

    /// The point under `pointer`, borrowed for direct mutation.
    pub fn pick_mut(&mut self, pointer: Vec2<F>) -> Option<&mut ChainPoint<F>> {
        let picker = self.picker();
        picker.pick_mut(self.chain.points_mut(), pointer)
    }

    /// Start dragging whatever is under `pointer`. `None` means no hit.
    pub fn begin_drag(&self, pointer: Vec2<F>) -> Option<DragState<F>> {
        self.pick(pointer).map(|index| DragState::new(index, pointer))
    }

    pub fn integrator(&self) -> Integrator<F> {
        Integrator::new(self.friction)
    }

    pub fn solver(&self) -> SpringSolver<F> {
        SpringSolver::new(self.spring)
    }

    pub fn renderer(&self) -> Renderer<F> {
        Renderer::new(self.font_size)
    }

    /// Settle one frame without drawing.
    pub fn settle<O: StepObserver>(&mut self, observer: &mut O) {
        let integrator = self.integrator();
        let solver = self.solver();
        self.chain.settle(&integrator, &solver, observer);
    }

    /// Settle, then draw the settled chain head to tail. Returns the number
    /// of glyphs drawn.
    pub fn settle_and_render<S, O>(&mut self, surface: &mut S, observer: &mut O) -> usize
    where
        S: DrawSurface<F> + ?Sized,
        O: StepObserver,
    {
        if self.chain.is_empty() {
            return 0;
        }
        let integrator = self.integrator();
        let solver = self.solver();
        let renderer = self.renderer();
        let font_family = self.font_family.as_str();
        self.chain.with_anchor(|points| {
            settle_points(points, &integrator, &solver, observer);
            renderer.render(points, font_family, surface)
        })
    }

    /// One full frame: follow the drag, clamp to bounds, clear, settle, draw.
    pub fn frame<S: DrawSurface<F> + ?Sized>(&mut self, input: &FrameInput<F>, surface: &mut S) -> usize {
        if let Some(drag) = &input.drag {
            if !drag.apply(self.chain.points_mut()) {
                trace!("drag index {} past end of chain ({})", drag.index, self.chain.len());
            }
        }
        if let Some(bounds) = &input.bounds {
            bounds.clamp_points(self.chain.points_mut());
            surface.clear_region(bounds.min.x, bounds.min.y, bounds.width(), bounds.height());
        }
        self.settle_and_render(surface, &mut NoOpStepObserver)
    }

    fn remeasure(&mut self) {
        let text = self.text.clone();
        self.set_text(&text, None);
    }

    fn checked_point_mut(&mut self, index: usize) -> Result<&mut ChainPoint<F>, SimulationError> {
        let count = self.chain.len();
        self.chain
            .point_mut(index)
            .ok_or(SimulationError::PointOutOfBounds { index, count })
    }
}
