//! Elastic text: glyphs strung on a Verlet point chain.
//!
//! `slinky` animates a string of characters as a chain of spring-connected
//! points. Each frame the chain is settled (damped Verlet inertia, then one
//! distance correction per link, head to tail) and every glyph is drawn
//! rotated toward its successor and stretched when the link is longer than
//! the base font size. A nearest-point hit test lets a pointer grab and drag
//! any glyph.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity from previous positions, damped by friction
//! - **Single-pass springs**: corrections propagate tip to tail within a frame
//! - **Continuity on edit**: retyped text keeps the motion of surviving points
//! - **Host-agnostic**: glyph metrics and drawing are traits the host implements
//! - **Observable**: monitor settle passes via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! # Example
//! ```
//! use slinky::{ElasticString, FrameInput, Bounds, MonospaceMetrics, SimulationConfig, Vec2};
//! use slinky::render::DrawSurface;
//!
//! struct Null;
//! impl DrawSurface<f32> for Null {
//!     fn draw_rotated_glyph(&mut self, _: char, _: f32, _: f32, _: f32, _: f32, _: &str) {}
//!     fn clear_region(&mut self, _: f32, _: f32, _: f32, _: f32) {}
//! }
//!
//! let config = SimulationConfig::<f32>::new().with_font_size(25.0);
//! let mut text = ElasticString::new(config, MonospaceMetrics::default());
//! text.set_text("hello", Some(&[Vec2::new(100.0, 100.0)]));
//!
//! let drag = text.begin_drag(Vec2::new(104.0, 98.0));
//! let input = FrameInput::new()
//!     .with_drag(drag)
//!     .with_bounds(Bounds::viewport(800.0, 600.0));
//! assert_eq!(text.frame(&input, &mut Null), 5);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod glyph;
pub mod point;
pub mod spring;
pub mod chain;
pub mod render;
pub mod picker;
pub mod input;
pub mod string;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use glyph::{Glyph, GlyphMetrics, MonospaceMetrics};
pub use point::{ChainPoint, Integrator};
pub use spring::SpringSolver;
pub use chain::{Chain, Rebuild};
pub use render::{DrawSurface, Renderer, Stroke};
pub use picker::PointPicker;
pub use input::{Bounds, DragState, FrameInput};
pub use string::ElasticString;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::SimulationError;
