use std::sync::atomic::{AtomicBool, Ordering};

use gridwalk_core::Grid;

/// Hook invoked by every search while it runs.
///
/// Searches call [`on_step`](Self::on_step) once per outer iteration and
/// once per path mark, and poll [`should_cancel`](Self::should_cancel) at
/// the top of every outer iteration. All calls happen on the caller's
/// thread, in the order nodes are settled or marked.
pub trait StepObserver {
    /// Called after a settle or mark event. May render `grid` or drain
    /// pending UI events.
    fn on_step(&mut self, grid: &Grid);

    /// Return `true` to stop the run. The search then returns "not found"
    /// and leaves its partial marks on the grid.
    fn should_cancel(&mut self) -> bool {
        false
    }
}

impl<O: StepObserver + ?Sized> StepObserver for &mut O {
    #[inline]
    fn on_step(&mut self, grid: &Grid) {
        (**self).on_step(grid);
    }

    #[inline]
    fn should_cancel(&mut self) -> bool {
        (**self).should_cancel()
    }
}

/// Observer that ignores every step and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _grid: &Grid) {}
}

/// Adapts a closure into an observer that never cancels.
pub struct FnObserver<F>(pub F);

impl<F: FnMut(&Grid)> StepObserver for FnObserver<F> {
    fn on_step(&mut self, grid: &Grid) {
        (self.0)(grid);
    }
}

/// Wraps another observer and cancels once `stop_flag` is raised, e.g. by
/// a Ctrl-C handler.
#[derive(Debug)]
pub struct InterruptObserver<'a, O> {
    inner: O,
    stop_flag: &'a AtomicBool,
}

impl<'a, O: StepObserver> InterruptObserver<'a, O> {
    pub fn new(inner: O, stop_flag: &'a AtomicBool) -> Self {
        Self { inner, stop_flag }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: StepObserver> StepObserver for InterruptObserver<'_, O> {
    fn on_step(&mut self, grid: &Grid) {
        self.inner.on_step(grid);
    }

    fn should_cancel(&mut self) -> bool {
        self.stop_flag.load(Ordering::Relaxed) || self.inner.should_cancel()
    }
}

/// Wraps another observer and cancels after `limit` steps have been
/// observed.
#[derive(Debug)]
pub struct StepLimit<O> {
    inner: O,
    limit: usize,
    seen: usize,
}

impl<O: StepObserver> StepLimit<O> {
    pub fn new(inner: O, limit: usize) -> Self {
        Self {
            inner,
            limit,
            seen: 0,
        }
    }

    /// Steps observed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<O: StepObserver> StepObserver for StepLimit<O> {
    fn on_step(&mut self, grid: &Grid) {
        self.seen += 1;
        self.inner.on_step(grid);
    }

    fn should_cancel(&mut self) -> bool {
        self.seen >= self.limit || self.inner.should_cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_observer_forwards_steps() {
        let grid = Grid::new(2);
        let mut calls = 0;
        {
            let mut obs = FnObserver(|g: &Grid| {
                assert_eq!(g.rows(), 2);
                calls += 1;
            });
            obs.on_step(&grid);
            obs.on_step(&grid);
            assert!(!obs.should_cancel());
        }
        assert_eq!(calls, 2);
    }

    #[test]
    fn interrupt_observer_follows_flag() {
        let flag = AtomicBool::new(false);
        let mut obs = InterruptObserver::new(NoopObserver, &flag);
        assert!(!obs.should_cancel());
        flag.store(true, Ordering::Relaxed);
        assert!(obs.should_cancel());
    }

    #[test]
    fn step_limit_cancels_after_limit() {
        let grid = Grid::new(1);
        let mut obs = StepLimit::new(NoopObserver, 2);
        assert!(!obs.should_cancel());
        obs.on_step(&grid);
        assert!(!obs.should_cancel());
        obs.on_step(&grid);
        assert!(obs.should_cancel());
        assert_eq!(obs.seen(), 2);
    }

    #[test]
    fn mut_ref_is_an_observer() {
        fn drive<O: StepObserver>(mut obs: O, grid: &Grid) -> bool {
            obs.on_step(grid);
            obs.should_cancel()
        }
        let grid = Grid::new(1);
        let mut limit = StepLimit::new(NoopObserver, 1);
        assert!(drive(&mut limit, &grid));
        assert_eq!(limit.seen(), 1);
    }
}
