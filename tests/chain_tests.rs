use slinky::chain::settle_points;
use slinky::{
    Chain, ChainPoint, Glyph, Integrator, NoOpStepObserver, SpringSolver, StepObserver, Vec2,
};

#[derive(Debug, PartialEq)]
enum Event {
    Integrate(usize),
    Spring(usize),
    Complete(usize),
}

#[derive(Default)]
struct Recorder(Vec<Event>);

impl StepObserver for Recorder {
    fn on_integrate(&mut self, index: usize) {
        self.0.push(Event::Integrate(index));
    }
    fn on_spring(&mut self, index: usize) {
        self.0.push(Event::Spring(index));
    }
    fn on_settle_complete(&mut self, len: usize) {
        self.0.push(Event::Complete(len));
    }
}

fn glyphs(text: &str, spacing: f32) -> impl Iterator<Item = Glyph<f32>> + '_ {
    text.chars().map(move |c| Glyph::new(c, spacing))
}

#[test]
fn settle_order_integrates_each_point_once() {
    let mut chain: Chain<f32> = Chain::new();
    chain.rebuild(glyphs("abc", 10.0), None);

    let mut recorder = Recorder::default();
    chain.settle(&Integrator::new(0.02), &SpringSolver::new(0.6), &mut recorder);

    use Event::*;
    assert_eq!(
        recorder.0,
        vec![
            Integrate(0),
            Integrate(1),
            Spring(0),
            Integrate(2),
            Spring(1),
            Integrate(3),
            Spring(2),
            Complete(4),
        ]
    );
}

#[test]
fn end_anchor_does_not_leak() {
    let mut chain: Chain<f32> = Chain::new();
    chain.rebuild(glyphs("hey", 8.0), Some(&[Vec2::new(50.0, 50.0)]));

    for _ in 0..10 {
        chain.settle(&Integrator::new(0.02), &SpringSolver::new(0.6), &mut NoOpStepObserver);
        assert_eq!(chain.len(), 3);
    }
    // The anchor trailed after the tail and kept its own state.
    assert_ne!(chain.end_anchor().pos, Vec2::zero());
    assert_eq!(chain.end_anchor().glyph, Glyph::default());

    let rebuilt = chain.rebuild(glyphs("hey", 8.0), None);
    assert_eq!(rebuilt.retained, 3);
    assert_eq!(rebuilt.appended, 0);
    assert_eq!(chain.len(), 3);
}

#[test]
fn empty_chain_settle_is_noop() {
    let mut chain: Chain<f32> = Chain::new();
    let mut recorder = Recorder::default();
    chain.settle(&Integrator::new(0.02), &SpringSolver::new(0.6), &mut recorder);
    assert!(recorder.0.is_empty());
    assert!(chain.is_empty());
    assert_eq!(chain.end_anchor().pos, Vec2::zero());
}

#[test]
fn at_rest_chain_is_fixed_point() {
    let integrator = Integrator::new(0.3);
    let solver = SpringSolver::new(0.8);
    let mut points: Vec<ChainPoint<f64>> = (0..4)
        .map(|i| ChainPoint::at(Glyph::new('o', 10.0), Vec2::new(10.0 * i as f64, 20.0)))
        .collect();
    let before: Vec<_> = points.iter().map(|p| p.pos).collect();

    settle_points(&mut points, &integrator, &solver, &mut NoOpStepObserver);

    let after: Vec<_> = points.iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn correction_propagates_one_link_per_pass() {
    let integrator = Integrator::new(0.0);
    let solver = SpringSolver::new(1.0);
    let mut points: Vec<ChainPoint<f64>> = (0..4)
        .map(|i| ChainPoint::at(Glyph::new('o', 10.0), Vec2::new(10.0 * i as f64, 0.0)))
        .collect();
    points[0].place(Vec2::new(-10.0, 0.0));

    settle_points(&mut points, &integrator, &solver, &mut NoOpStepObserver);

    // Link 0 splits its 10px error, then each later link sees the stretch
    // its predecessor just introduced.
    let expected = [-5.0, 7.5, 18.75, 28.75];
    for (p, want) in points.iter().zip(expected) {
        assert!((p.pos.x - want).abs() < 1e-12, "x = {}, want {}", p.pos.x, want);
    }
}

#[test]
fn pinned_head_resists_inertia_not_springs() {
    let mut chain: Chain<f32> = Chain::new();
    chain.rebuild(glyphs("ab", 10.0), Some(&[Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0)]));
    chain.point_mut(0).unwrap().pin();
    *chain.end_anchor_mut() = ChainPoint::at(Glyph::default(), Vec2::new(50.0, 0.0));

    chain.settle(&Integrator::new(0.0), &SpringSolver::new(1.0), &mut NoOpStepObserver);

    let head = chain.point(0).unwrap();
    assert!(head.fixed);
    assert!((head.pos.x - 15.0).abs() < 1e-5, "head.x = {}", head.pos.x);
}
