//! Per-run context implementing the visit/observe protocol every
//! algorithm follows.

use gridwalk_core::{Grid, NodeState, Point};

use crate::outcome::{SearchOutcome, SearchStats};
use crate::traits::StepObserver;

/// Predecessor sentinel: no parent recorded.
pub(crate) const NO_PARENT: usize = usize::MAX;

pub(crate) struct Run<'a, O: ?Sized> {
    pub(crate) grid: &'a mut Grid,
    observer: &'a mut O,
    pub(crate) stats: SearchStats,
    pub(crate) start: usize,
    pub(crate) end: usize,
    name: &'static str,
}

impl<'a, O: StepObserver + ?Sized> Run<'a, O> {
    /// Resolve the endpoints, place them on the grid as Start and End
    /// (moving any existing handles) and rebuild adjacency so the run
    /// never sees stale neighbour lists.
    ///
    /// `None` if either endpoint is off the grid or on a barrier, or if
    /// both are the same node.
    pub(crate) fn begin(
        name: &'static str,
        grid: &'a mut Grid,
        start: Point,
        end: Point,
        observer: &'a mut O,
    ) -> Option<Self> {
        let (Some(si), Some(ei)) = (grid.index(start), grid.index(end)) else {
            log::debug!("{name}: endpoint outside {0}x{0} grid", grid.rows());
            return None;
        };
        if si == ei {
            log::debug!("{name}: start and end are both {start}");
            return None;
        }
        if grid.node_at(si).is_barrier() || grid.node_at(ei).is_barrier() {
            log::debug!("{name}: endpoint on a barrier");
            return None;
        }
        // A cell holding the other endpoint gives it up first, so swapped
        // endpoints can still be placed.
        for (p, state) in [(start, NodeState::Start), (end, NodeState::End)] {
            if grid.state(p).is_some_and(|s| s.is_endpoint() && s != state) {
                grid.reset(p);
            }
        }
        if let Err(e) = grid
            .place(start, NodeState::Start)
            .and_then(|()| grid.place(end, NodeState::End))
        {
            log::debug!("{name}: {e}");
            return None;
        }
        grid.recompute_all_neighbors();
        log::debug!("{name}: searching {start} -> {end}");
        Some(Self {
            grid,
            observer,
            stats: SearchStats::default(),
            start: si,
            end: ei,
            name,
        })
    }

    /// Poll the observer's cancellation hook.
    pub(crate) fn cancelled(&mut self) -> bool {
        let stop = self.observer.should_cancel();
        if stop {
            log::debug!("{}: cancelled after {} steps", self.name, self.stats.steps);
        }
        stop
    }

    pub(crate) fn step(&mut self) {
        self.stats.steps += 1;
        self.observer.on_step(&*self.grid);
    }

    /// Record a node entering the frontier.
    pub(crate) fn open(&mut self, idx: usize) {
        self.stats.opened += 1;
        self.grid.mark(idx, NodeState::Open);
    }

    /// Settle a node. Start keeps its own state.
    pub(crate) fn close(&mut self, idx: usize) {
        if self.grid.mark(idx, NodeState::Closed) {
            self.stats.closed += 1;
        }
    }

    pub(crate) fn finish(
        self,
        path: Option<Vec<Point>>,
        cost: Option<i32>,
        negative_cycle: bool,
    ) -> SearchOutcome {
        match &path {
            Some(p) => log::debug!(
                "{}: path of {} hops, {} opened, {} closed, {} steps",
                self.name,
                p.len().saturating_sub(1),
                self.stats.opened,
                self.stats.closed,
                self.stats.steps
            ),
            None => log::debug!("{}: no path after {} steps", self.name, self.stats.steps),
        }
        SearchOutcome {
            cost: path.as_ref().and(cost),
            path,
            negative_cycle,
            stats: self.stats,
        }
    }

    pub(crate) fn fail(self) -> SearchOutcome {
        log::debug!("{}: no path after {} steps", self.name, self.stats.steps);
        SearchOutcome::not_found(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::grid_with;
    use crate::traits::NoopObserver;

    fn begins(grid: &mut Grid, start: Point, end: Point) -> bool {
        Run::begin("test", grid, start, end, &mut NoopObserver).is_some()
    }

    #[test]
    fn unplaced_endpoints_are_placed() {
        let mut grid = Grid::new(4);
        assert!(begins(&mut grid, Point::new(0, 0), Point::new(3, 3)));
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.end(), Some(Point::new(3, 3)));
        assert_eq!(grid.state(Point::new(0, 0)), Some(NodeState::Start));
        assert_eq!(grid.state(Point::new(3, 3)), Some(NodeState::End));
    }

    #[test]
    fn other_endpoints_move_the_handles() {
        let mut grid = grid_with(4, Point::new(0, 0), Point::new(3, 3), &[]);
        assert!(begins(&mut grid, Point::new(1, 1), Point::new(2, 2)));
        assert_eq!(grid.count(NodeState::Start), 1);
        assert_eq!(grid.count(NodeState::End), 1);
        assert_eq!(grid.state(Point::new(0, 0)), Some(NodeState::Unvisited));
        assert_eq!(grid.state(Point::new(3, 3)), Some(NodeState::Unvisited));
        assert_eq!(grid.start(), Some(Point::new(1, 1)));
        assert_eq!(grid.end(), Some(Point::new(2, 2)));
    }

    #[test]
    fn swapped_endpoints() {
        let (a, b) = (Point::new(0, 0), Point::new(3, 3));
        let mut grid = grid_with(4, a, b, &[]);
        assert!(begins(&mut grid, b, a));
        assert_eq!(grid.start(), Some(b));
        assert_eq!(grid.end(), Some(a));
        assert_eq!(grid.count(NodeState::Start), 1);
        assert_eq!(grid.count(NodeState::End), 1);
    }

    #[test]
    fn rejected_endpoints_leave_the_grid_alone() {
        let (s, e) = (Point::new(0, 0), Point::new(3, 3));
        let wall = Point::new(1, 1);
        let mut grid = grid_with(4, s, e, &[wall]);
        let before: Vec<_> = grid.iter().copied().collect();
        assert!(!begins(&mut grid, s, s));
        assert!(!begins(&mut grid, wall, e));
        assert!(!begins(&mut grid, s, wall));
        assert!(!begins(&mut grid, s, Point::new(4, 0)));
        assert!(grid.iter().copied().eq(before));
        assert_eq!((grid.start(), grid.end()), (Some(s), Some(e)));
    }
}
