use gridwalk_core::{Grid, Point};

use crate::frontier::Frontier;
use crate::outcome::{SearchOutcome, UNREACHABLE};
use crate::path::{reconstruct_path, to_points};
use crate::search::{NO_PARENT, Run};
use crate::traits::StepObserver;

/// Dijkstra's algorithm with every lattice edge weighing 1.
///
/// Negative-weight flags are ignored. Entries with equal distance pop in
/// the order they were queued.
pub fn run_dijkstra<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> SearchOutcome {
    let Some(mut run) = Run::begin("dijkstra", grid, start, end, observer) else {
        return SearchOutcome::default();
    };

    let len = run.grid.len();
    let mut parents = vec![NO_PARENT; len];
    let mut dist = vec![UNREACHABLE; len];
    let mut frontier = Frontier::new(len);
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    dist[run.start] = 0;
    frontier.push(run.start, 0);

    loop {
        if run.cancelled() {
            return run.fail();
        }
        let Some(ci) = frontier.pop() else {
            break;
        };

        if ci == run.end {
            let chain = reconstruct_path(&mut run, &parents);
            let path = chain.map(|c| to_points(&run, &c));
            return run.finish(path, Some(dist[ci]), false);
        }

        nbuf.clear();
        nbuf.extend_from_slice(run.grid.neighbors_at(ci));
        for &ni in nbuf.iter() {
            let nd = dist[ci] + 1;
            if nd >= dist[ni] {
                continue;
            }
            dist[ni] = nd;
            parents[ni] = ci;
            let queued = frontier.contains(ni);
            frontier.push(ni, nd);
            if !queued {
                run.open(ni);
            }
        }

        run.step();
        run.close(ci);
    }

    run.fail()
}
