//! Step observer trait for monitoring settle passes.

/// Trait for observing a chain settle pass.
///
/// Implement this trait to trace the order in which points are integrated
/// and links corrected (debug overlays, profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after the point at `index` has been integrated.
    fn on_integrate(&mut self, _index: usize) {}

    /// Called after the link `(index, index + 1)` has been corrected.
    fn on_spring(&mut self, _index: usize) {}

    /// Called when a settle pass over `len` points (end anchor included) is complete.
    fn on_settle_complete(&mut self, _len: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
