//! Observable shortest-path searches over a [`gridwalk_core::Grid`].
//!
//! Four interchangeable algorithms share one contract: they take the grid,
//! a start and an end point, and a [`StepObserver`]; they paint node
//! states as they explore, notify the observer after every iteration and
//! every path mark, and stop early when the observer asks them to.
//!
//! - **BFS** by hop count ([`run_bfs`])
//! - **Dijkstra** with unit weights ([`run_dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`run_astar`])
//! - **Bellman-Ford** with negative-weight nodes ([`run_bellman_ford`])
//!
//! [`Algorithm`] selects one at runtime.
//!
//! # Outcomes
//!
//! | Condition | Reported as |
//! |---|---|
//! | route found | [`SearchOutcome::path`] is `Some` |
//! | no route, or cancelled | [`SearchOutcome::path`] is `None` |
//! | negative cycle (Bellman-Ford) | [`SearchOutcome::negative_cycle`] |

mod algorithm;
mod astar;
mod bellman_ford;
mod bfs;
mod dijkstra;
mod distance;
mod frontier;
mod outcome;
mod path;
mod search;
mod traits;

#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::run_astar;
pub use bellman_ford::run_bellman_ford;
pub use bfs::run_bfs;
pub use dijkstra::run_dijkstra;
pub use distance::manhattan;
pub use outcome::{SearchOutcome, SearchStats, UNREACHABLE};
pub use traits::{FnObserver, InterruptObserver, NoopObserver, StepLimit, StepObserver};

/// Alias of [`manhattan`], the A* heuristic.
pub use distance::manhattan as heuristic;
