use slinky::{Bounds, ElasticString, FrameInput, MonospaceMetrics, NoOpStepObserver, SimulationConfig, Vec2};
use slinky::render::DrawSurface;

struct Discard;

impl DrawSurface<f32> for Discard {
    fn draw_rotated_glyph(&mut self, _: char, _: f32, _: f32, _: f32, _: f32, _: &str) {}
    fn clear_region(&mut self, _: f32, _: f32, _: f32, _: f32) {}
}

fn scatter(n: usize) -> Vec<Vec2<f32>> {
    (0..n)
        .map(|i| Vec2::new((i * 37 % 640) as f32, (i * 91 % 480) as f32))
        .collect()
}

#[test]
fn frames_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog.";
    let results: Vec<_> = (0..5).map(|_| {
        let config = SimulationConfig::new().with_font_size(25.0);
        let mut s = ElasticString::new(config, MonospaceMetrics::default());
        s.set_text(text, Some(scatter(text.len()).as_slice()));
        let bounds = Bounds::viewport(640.0, 480.0);
        let mut drag = s.begin_drag(Vec2::new(0.0, 0.0));
        for frame in 0..120 {
            if let Some(d) = drag.as_mut() {
                d.move_to(Vec2::new(100.0 + frame as f32, 100.0));
            }
            let input = FrameInput::new().with_drag(drag).with_bounds(bounds);
            s.frame(&input, &mut Discard);
        }
        s.positions()
    }).collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn settle_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let config = SimulationConfig::<f64>::new().with_font_size(12.0).with_spring(0.9);
        let mut s = ElasticString::new(config, |c: char, size: f64, _: &str| size * if c.is_uppercase() { 0.7 } else { 0.5 });
        s.set_text("Elastic", Some(&[Vec2::new(300.0, 40.0)]));
        for _ in 0..200 {
            s.settle(&mut NoOpStepObserver);
        }
        s.positions()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}
