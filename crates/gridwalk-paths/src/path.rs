use gridwalk_core::{NodeState, Point};

use crate::search::{NO_PARENT, Run};
use crate::traits::StepObserver;

/// Walk `parents` from the run's end back to its start and mark every
/// node strictly between them as `Path`, notifying the observer after
/// each mark.
///
/// Returns the route from start to end inclusive, or `None` when the
/// chain breaks or loops before reaching start. Nothing is marked in that
/// case. Calling it twice with the same map re-marks the same nodes.
pub(crate) fn reconstruct_path<O: StepObserver + ?Sized>(
    run: &mut Run<'_, O>,
    parents: &[usize],
) -> Option<Vec<usize>> {
    let mut chain = vec![run.end];
    let mut current = run.end;
    while current != run.start {
        let prev = parents[current];
        // A simple path visits each node at most once.
        if prev == NO_PARENT || chain.len() >= parents.len() {
            return None;
        }
        chain.push(prev);
        current = prev;
    }

    let inner = chain.len().saturating_sub(2);
    for &idx in chain.iter().skip(1).take(inner) {
        run.grid.mark(idx, NodeState::Path);
        run.step();
    }

    chain.reverse();
    Some(chain)
}

/// Convert a chain of flat indices into points.
pub(crate) fn to_points<O: ?Sized>(run: &Run<'_, O>, chain: &[usize]) -> Vec<Point> {
    chain.iter().map(|&i| run.grid.point(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Recorder, grid_with};

    #[test]
    fn marks_only_intermediate_nodes() {
        let mut grid = grid_with(3, Point::new(0, 0), Point::new(0, 2), &[]);
        let mut rec = Recorder::default();
        let mut run = Run::begin("test", &mut grid, Point::new(0, 0), Point::new(0, 2), &mut rec)
            .unwrap();
        let mut parents = vec![NO_PARENT; 9];
        parents[1] = 0;
        parents[2] = 1;
        let chain = reconstruct_path(&mut run, &parents).unwrap();
        assert_eq!(chain, vec![0, 1, 2]);
        assert_eq!(run.stats.steps, 1);
        drop(run);
        assert_eq!(grid.state(Point::new(0, 1)), Some(NodeState::Path));
        assert_eq!(grid.state(Point::new(0, 0)), Some(NodeState::Start));
        assert_eq!(grid.state(Point::new(0, 2)), Some(NodeState::End));
        assert_eq!(rec.steps, 1);
    }

    #[test]
    fn second_walk_marks_the_same_nodes() {
        let mut grid = grid_with(3, Point::new(0, 0), Point::new(2, 0), &[]);
        let mut parents = vec![NO_PARENT; 9];
        parents[3] = 0;
        parents[6] = 3;
        let mut rec = Recorder::default();
        let mut run = Run::begin("test", &mut grid, Point::new(0, 0), Point::new(2, 0), &mut rec)
            .unwrap();
        let first = reconstruct_path(&mut run, &parents);
        let second = reconstruct_path(&mut run, &parents);
        assert_eq!(first, second);
        drop(run);
        assert_eq!(grid.count(NodeState::Path), 1);
        assert_eq!(grid.state(Point::new(1, 0)), Some(NodeState::Path));
    }

    #[test]
    fn broken_chain_marks_nothing() {
        let mut grid = grid_with(3, Point::new(0, 0), Point::new(2, 2), &[]);
        let mut parents = vec![NO_PARENT; 9];
        parents[8] = 7;
        let mut rec = Recorder::default();
        let mut run = Run::begin("test", &mut grid, Point::new(0, 0), Point::new(2, 2), &mut rec)
            .unwrap();
        assert_eq!(reconstruct_path(&mut run, &parents), None);
        drop(run);
        assert_eq!(grid.count(NodeState::Path), 0);
        assert_eq!(rec.steps, 0);
    }

    #[test]
    fn looping_chain_terminates() {
        let mut grid = grid_with(2, Point::new(0, 0), Point::new(1, 1), &[]);
        // 3 -> 2 -> 3 -> ... never reaches 0.
        let parents = vec![NO_PARENT, NO_PARENT, 3, 2];
        let mut rec = Recorder::default();
        let mut run = Run::begin("test", &mut grid, Point::new(0, 0), Point::new(1, 1), &mut rec)
            .unwrap();
        assert_eq!(reconstruct_path(&mut run, &parents), None);
    }
}
