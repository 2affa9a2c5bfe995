//! Helpers shared by the search tests.

use std::collections::VecDeque;

use gridwalk_core::{Grid, NodeState, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::StepObserver;

/// Observer that records instead of drawing.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) steps: usize,
    pub(crate) polls: usize,
    /// Cancel once this many steps have been observed.
    pub(crate) cancel_after: Option<usize>,
    /// Count of `Path` nodes seen at each step.
    pub(crate) path_counts: Vec<usize>,
}

impl Recorder {
    pub(crate) fn cancelling_after(steps: usize) -> Self {
        Self {
            cancel_after: Some(steps),
            ..Self::default()
        }
    }
}

impl StepObserver for Recorder {
    fn on_step(&mut self, grid: &Grid) {
        self.steps += 1;
        self.path_counts.push(grid.count(NodeState::Path));
    }

    fn should_cancel(&mut self) -> bool {
        self.polls += 1;
        self.cancel_after.is_some_and(|n| self.steps >= n)
    }
}

/// Build a grid with endpoints and barriers already placed.
pub(crate) fn grid_with(rows: usize, start: Point, end: Point, barriers: &[Point]) -> Grid {
    let mut grid = Grid::new(rows);
    grid.place(start, NodeState::Start).unwrap();
    grid.place(end, NodeState::End).unwrap();
    for &b in barriers {
        grid.place(b, NodeState::Barrier).unwrap();
    }
    grid
}

/// Parse a map: `S` start, `E` end, `#` barrier, `-` negative, anything
/// else open.
pub(crate) fn parse(map: &str) -> (Grid, Point, Point) {
    let lines: Vec<&str> = map.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let mut grid = Grid::new(lines.len());
    let (mut start, mut end) = (Point::ZERO, Point::ZERO);
    for (r, line) in lines.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let p = Point::new(r as i32, c as i32);
            match ch {
                'S' => {
                    grid.place(p, NodeState::Start).unwrap();
                    start = p;
                }
                'E' => {
                    grid.place(p, NodeState::End).unwrap();
                    end = p;
                }
                '#' => grid.place(p, NodeState::Barrier).unwrap(),
                '-' => grid.mark_negative(p).unwrap(),
                _ => {}
            }
        }
    }
    (grid, start, end)
}

/// Independent hop count between two points, straight from node states.
pub(crate) fn brute_force_hops(grid: &Grid, from: Point, to: Point) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::new();
    let si = grid.index(from)?;
    dist[si] = 0;
    queue.push_back(from);
    while let Some(p) = queue.pop_front() {
        if p == to {
            return Some(dist[grid.index(p)?]);
        }
        let d = dist[grid.index(p)?];
        for np in p.neighbors_4() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if grid.node_at(ni).is_barrier() || dist[ni] != usize::MAX {
                continue;
            }
            dist[ni] = d + 1;
            queue.push_back(np);
        }
    }
    None
}

/// `rows × rows` grid with corners as endpoints and roughly `pct`% barriers.
pub(crate) fn random_grid(rows: usize, pct: u8, seed: u64) -> (Grid, Point, Point) {
    let start = Point::new(0, 0);
    let end = Point::new(rows as i32 - 1, rows as i32 - 1);
    let mut grid = grid_with(rows, start, end, &[]);
    let mut rng = StdRng::seed_from_u64(seed);
    for r in 0..rows as i32 {
        for c in 0..rows as i32 {
            let p = Point::new(r, c);
            if p != start && p != end && rng.random_range(0..100u8) < pct {
                grid.place(p, NodeState::Barrier).unwrap();
            }
        }
    }
    (grid, start, end)
}
