//! Benchmarks for slinky settle and render passes.

use criterion::{criterion_group, criterion_main, Criterion};
use slinky::*;

const TEXT: &str = "The quick brown fox jumps over the lazy dog.";

struct Discard;

impl DrawSurface<f32> for Discard {
    fn draw_rotated_glyph(&mut self, _: char, _: f32, _: f32, _: f32, _: f32, _: &str) {}
    fn clear_region(&mut self, _: f32, _: f32, _: f32, _: f32) {}
}

fn scattered() -> ElasticString<f32, MonospaceMetrics<f32>> {
    let config = SimulationConfig::new().with_font_size(25.0);
    let mut s = ElasticString::new(config, MonospaceMetrics::default());
    let positions: Vec<_> = (0..TEXT.len())
        .map(|i| Vec2::new((i * 53 % 800) as f32, (i * 29 % 600) as f32))
        .collect();
    s.set_text(TEXT, Some(positions.as_slice()));
    s
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("settle_44_glyphs_60_frames", |b| {
        b.iter(|| {
            let mut s = scattered();
            for _ in 0..60 {
                s.settle(&mut NoOpStepObserver);
            }
            s.positions()
        });
    });
}

fn bench_frame(c: &mut Criterion) {
    c.bench_function("frame_44_glyphs_drag_60_frames", |b| {
        b.iter(|| {
            let mut s = scattered();
            let bounds = Bounds::viewport(800.0, 600.0);
            let mut drag = Some(DragState::new(0, Vec2::new(100.0, 100.0)));
            for frame in 0..60 {
                if let Some(d) = drag.as_mut() {
                    d.move_to(Vec2::new(100.0 + 4.0 * frame as f32, 100.0));
                }
                let input = FrameInput::new().with_drag(drag).with_bounds(bounds);
                s.frame(&input, &mut Discard);
            }
            s.positions()
        });
    });
}

fn bench_settle_to_rest(c: &mut Criterion) {
    c.bench_function("retype_and_settle_120_frames", |b| {
        b.iter(|| {
            let mut s = scattered();
            s.set_text("elastic", None);
            s.set_text(TEXT, None);
            for _ in 0..120 {
                s.settle(&mut NoOpStepObserver);
            }
            s.positions()
        });
    });
}

criterion_group!(benches, bench_settle, bench_frame, bench_settle_to_rest);
criterion_main!(benches);
