use gridwalk_core::{Grid, Point};

use crate::outcome::SearchOutcome;
use crate::path::{reconstruct_path, to_points};
use crate::search::{NO_PARENT, Run};
use crate::traits::StepObserver;

/// A directed lattice edge. `weight` is −1 when `to` is flagged negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Edge {
    from: usize,
    to: usize,
    weight: i32,
}

fn edges(grid: &Grid) -> Vec<Edge> {
    let mut out = Vec::with_capacity(grid.len() * 4);
    for from in 0..grid.len() {
        for &to in grid.neighbors_at(from) {
            out.push(Edge {
                from,
                to,
                weight: grid.node_at(to).weight(),
            });
        }
    }
    out
}

/// Distances are kept wide: around a negative cycle they fall by up to
/// |V| per round for |V| − 1 rounds.
const FAR: i64 = i64::MAX;

/// Distance through `e`, or `None` if its source is unreached.
#[inline]
fn through(e: &Edge, dist: &[i64]) -> Option<i64> {
    (dist[e.from] != FAR).then(|| dist[e.from].saturating_add(i64::from(e.weight)))
}

/// Relax every edge once, in edge-list order.
fn relax(edges: &[Edge], dist: &mut [i64], parents: &mut [usize]) {
    for e in edges {
        let Some(nd) = through(e, dist) else {
            continue;
        };
        if nd < dist[e.to] {
            dist[e.to] = nd;
            parents[e.to] = e.from;
        }
    }
}

/// Bellman-Ford honouring negative-weight nodes.
///
/// Runs exactly `|V| − 1` full relaxation rounds, then one check pass. If
/// the check pass still relaxes an edge a negative cycle exists: the
/// outcome carries `negative_cycle` and a best-effort path, if the
/// predecessor chain still leads back to start.
///
/// Nodes are not marked `Open` or `Closed`; only the final path is drawn.
pub fn run_bellman_ford<O: StepObserver + ?Sized>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    observer: &mut O,
) -> SearchOutcome {
    let Some(mut run) = Run::begin("bellman-ford", grid, start, end, observer) else {
        return SearchOutcome::default();
    };

    let len = run.grid.len();
    let edges = edges(&*run.grid);
    let mut dist = vec![FAR; len];
    let mut parents = vec![NO_PARENT; len];
    dist[run.start] = 0;

    for _ in 0..len.saturating_sub(1) {
        if run.cancelled() {
            return run.fail();
        }
        relax(&edges, &mut dist, &mut parents);
        run.stats.relax_rounds += 1;
        run.step();
    }

    let negative_cycle = edges
        .iter()
        .any(|e| through(e, &dist).is_some_and(|nd| nd < dist[e.to]));
    if negative_cycle {
        log::warn!("bellman-ford: negative weight cycle detected, path is best effort");
    }

    if parents[run.end] == NO_PARENT {
        let mut out = run.fail();
        out.negative_cycle = negative_cycle;
        return out;
    }

    let chain = reconstruct_path(&mut run, &parents);
    let path = chain.map(|c| to_points(&run, &c));
    let cost = i32::try_from(dist[run.end]).unwrap_or(i32::MIN);
    run.finish(path, Some(cost), negative_cycle)
}
