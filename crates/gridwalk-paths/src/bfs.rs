use std::collections::VecDeque;

use gridwalk_core::{Grid, Point};

use crate::outcome::SearchOutcome;
use crate::path::{reconstruct_path, to_points};
use crate::search::{NO_PARENT, Run};
use crate::traits::StepObserver;

/// Breadth-first search: shortest route by hop count.
///
/// Each node is queued at most once. Neighbours are enumerated down, up,
/// right, left, which fixes the tie-break between equal-length routes.
pub fn run_bfs<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> SearchOutcome {
    let Some(mut run) = Run::begin("bfs", grid, start, end, observer) else {
        return SearchOutcome::default();
    };

    let len = run.grid.len();
    let mut parents = vec![NO_PARENT; len];
    let mut seen = vec![false; len];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    seen[run.start] = true;
    queue.push_back(run.start);

    loop {
        if run.cancelled() {
            return run.fail();
        }
        let Some(ci) = queue.pop_front() else {
            break;
        };

        if ci == run.end {
            let chain = reconstruct_path(&mut run, &parents);
            let path = chain.map(|c| to_points(&run, &c));
            let cost = path.as_ref().map(|p| p.len() as i32 - 1);
            return run.finish(path, cost, false);
        }

        nbuf.clear();
        nbuf.extend_from_slice(run.grid.neighbors_at(ci));
        for &ni in nbuf.iter() {
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            parents[ni] = ci;
            queue.push_back(ni);
            run.open(ni);
        }

        run.step();
        run.close(ci);
    }

    run.fail()
}
