use gridwalk_core::{Grid, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::outcome::{SearchOutcome, UNREACHABLE};
use crate::path::{reconstruct_path, to_points};
use crate::search::{NO_PARENT, Run};
use crate::traits::StepObserver;

/// A* with unit edge weights and the Manhattan heuristic.
///
/// The frontier is keyed by `f = g + h`, ties broken by insertion order.
/// Negative-weight flags are ignored; the heuristic is not admissible
/// with them.
pub fn run_astar<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> SearchOutcome {
    let Some(mut run) = Run::begin("astar", grid, start, end, observer) else {
        return SearchOutcome::default();
    };

    let len = run.grid.len();
    let mut parents = vec![NO_PARENT; len];
    let mut g_score = vec![UNREACHABLE; len];
    let mut f_score = vec![UNREACHABLE; len];
    let mut frontier = Frontier::new(len);
    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    g_score[run.start] = 0;
    f_score[run.start] = manhattan(start, end);
    frontier.push(run.start, f_score[run.start]);

    let found = 'search: loop {
        if run.cancelled() {
            return run.fail();
        }
        let Some(ci) = frontier.pop() else {
            break 'search false;
        };

        if ci == run.end {
            break 'search true;
        }

        nbuf.clear();
        nbuf.extend_from_slice(run.grid.neighbors_at(ci));
        for &ni in nbuf.iter() {
            let tentative_g = g_score[ci] + 1;
            if tentative_g >= g_score[ni] {
                continue;
            }
            parents[ni] = ci;
            g_score[ni] = tentative_g;
            f_score[ni] = tentative_g + manhattan(run.grid.point(ni), end);
            let queued = frontier.contains(ni);
            frontier.push(ni, f_score[ni]);
            if !queued {
                run.open(ni);
            }
        }

        run.step();
        run.close(ci);
    };

    if !found {
        return run.fail();
    }
    let chain = reconstruct_path(&mut run, &parents);
    let path = chain.map(|c| to_points(&run, &c));
    let cost = g_score[run.end];
    run.finish(path, Some(cost), false)
}
