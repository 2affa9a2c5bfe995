//! **gridwalk-core** — the square lattice model shared by the gridwalk
//! search engines.
//!
//! This crate provides lattice coordinates, the per-cell traversal state,
//! and the [`Grid`] that owns every node, enforces Start/End uniqueness
//! and derives 4-directional adjacency.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use error::PlaceError;
pub use geom::Point;
pub use grid::Grid;
pub use node::{Node, NodeState};

/// Build a `rows × rows` grid with every node `Unvisited`.
pub fn make_grid(rows: usize) -> Grid {
    Grid::new(rows)
}
