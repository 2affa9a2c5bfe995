//! The [`Grid`] type — a fixed `rows × rows` lattice of [`Node`]s.
//!
//! The grid owns every node and tracks the Start and End handles itself,
//! so at most one of each can exist. Adjacency is derived: it is rebuilt
//! by [`recompute_all_neighbors`](Grid::recompute_all_neighbors) and is
//! stale after barrier edits until that call.

use crate::error::PlaceError;
use crate::geom::Point;
use crate::node::{Node, NodeState};

/// A square lattice of nodes with 4-directional adjacency.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    nodes: Vec<Node>,
    // Flat neighbour indices per node, in down, up, right, left order.
    adjacency: Vec<Vec<usize>>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Create a `rows × rows` grid with every node `Unvisited` and
    /// adjacency already derived.
    pub fn new(rows: usize) -> Self {
        let mut nodes = Vec::with_capacity(rows * rows);
        for row in 0..rows {
            for col in 0..rows {
                nodes.push(Node::new(Point::new(row as i32, col as i32)));
            }
        }
        let mut grid = Self {
            rows,
            nodes,
            adjacency: vec![Vec::new(); rows * rows],
            start: None,
            end: None,
        };
        grid.recompute_all_neighbors();
        grid
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total node count, `rows²`.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `p` lies on the lattice.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    // -----------------------------------------------------------------------
    // Flat indexing
    // -----------------------------------------------------------------------

    /// Row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if p.row < 0 || p.col < 0 {
            return None;
        }
        let (r, c) = (p.row as usize, p.col as usize);
        if r >= self.rows || c >= self.rows {
            return None;
        }
        Some(r * self.rows + c)
    }

    /// Point of a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`len`](Self::len). Indices from
    /// [`index`](Self::index) are always in range.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.nodes[idx].pos()
    }

    /// Node at a flat index. Panics if `idx` is out of range.
    #[inline]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Neighbour indices of the node at `idx` as of the last recompute.
    /// Panics if `idx` is out of range.
    #[inline]
    pub fn neighbors_at(&self, idx: usize) -> &[usize] {
        &self.adjacency[idx]
    }

    /// Set a search state (`Open`, `Closed` or `Path`) on the node at
    /// `idx`. Start, End and Barrier nodes keep their state. Returns
    /// whether the node changed.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`len`](Self::len).
    pub fn mark(&mut self, idx: usize, state: NodeState) -> bool {
        if !state.is_search_state() {
            return false;
        }
        let node = &mut self.nodes[idx];
        if node.state.is_endpoint() || node.is_barrier() || node.state == state {
            return false;
        }
        node.state = state;
        true
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn node(&self, p: Point) -> Option<&Node> {
        self.index(p).map(|i| &self.nodes[i])
    }

    pub fn state(&self, p: Point) -> Option<NodeState> {
        self.node(p).map(Node::state)
    }

    /// All nodes in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes currently in `state`.
    pub fn count(&self, state: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.state == state).count()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Neighbours of `p` as of the last
    /// [`recompute_all_neighbors`](Self::recompute_all_neighbors). Empty
    /// when `p` is out of bounds.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> {
        let adj: &[usize] = match self.index(p) {
            Some(i) => &self.adjacency[i],
            None => &[],
        };
        adj.iter().map(move |&i| self.nodes[i].pos())
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Rebuild every neighbour list from the current barrier layout.
    ///
    /// Barriers get no neighbours and appear in no other node's list.
    pub fn recompute_all_neighbors(&mut self) {
        for i in 0..self.nodes.len() {
            let mut adj = std::mem::take(&mut self.adjacency[i]);
            adj.clear();
            if !self.nodes[i].is_barrier() {
                for np in self.nodes[i].pos().neighbors_4() {
                    let Some(ni) = self.index(np) else {
                        continue;
                    };
                    if !self.nodes[ni].is_barrier() {
                        adj.push(ni);
                    }
                }
            }
            self.adjacency[i] = adj;
        }
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Place `state` at `p`.
    ///
    /// - `Start` / `End` move the existing handle if there is one. Placing
    ///   onto the cell that already holds that state is a no-op.
    /// - `Barrier` may not overwrite Start or End.
    /// - `Unvisited` is the same as [`reset`](Self::reset).
    /// - Search states are rejected with [`PlaceError::NotPlaceable`].
    pub fn place(&mut self, p: Point, state: NodeState) -> Result<(), PlaceError> {
        let idx = self.index(p).ok_or(PlaceError::OutOfBounds(p))?;
        let current = self.nodes[idx].state;
        match state {
            NodeState::Start | NodeState::End => {
                if current == state {
                    return Ok(());
                }
                if current.is_endpoint() {
                    log::trace!("rejected {state:?} at {p}: cell holds {current:?}");
                    return Err(PlaceError::Occupied { pos: p, state: current });
                }
                let handle = if state == NodeState::Start {
                    &mut self.start
                } else {
                    &mut self.end
                };
                if let Some(prev) = handle.replace(p) {
                    let pi = prev.row as usize * self.rows + prev.col as usize;
                    self.nodes[pi].state = NodeState::Unvisited;
                }
                let node = &mut self.nodes[idx];
                node.state = state;
                node.negative_weight = false;
                Ok(())
            }
            NodeState::Barrier => {
                if current.is_endpoint() {
                    log::trace!("rejected barrier at {p}: cell holds {current:?}");
                    return Err(PlaceError::Occupied { pos: p, state: current });
                }
                let node = &mut self.nodes[idx];
                node.state = NodeState::Barrier;
                node.negative_weight = false;
                Ok(())
            }
            NodeState::Unvisited => {
                self.reset(p);
                Ok(())
            }
            NodeState::Open | NodeState::Closed | NodeState::Path => {
                Err(PlaceError::NotPlaceable(state))
            }
        }
    }

    /// Primary-click placement: the first click places Start, the second
    /// End, every later click a Barrier. Clicking an existing Start or
    /// End does nothing. Returns the state placed, if any.
    pub fn paint(&mut self, p: Point) -> Option<NodeState> {
        let current = self.state(p)?;
        let state = if self.start.is_none() && current != NodeState::End {
            NodeState::Start
        } else if self.end.is_none() && current != NodeState::Start {
            NodeState::End
        } else if !current.is_endpoint() {
            NodeState::Barrier
        } else {
            return None;
        };
        self.place(p, state).ok().map(|()| state)
    }

    /// Flag `p` as negative weight: edges into it cost −1 under
    /// Bellman-Ford. A barrier at `p` is removed. Start and End cannot be
    /// flagged.
    pub fn mark_negative(&mut self, p: Point) -> Result<(), PlaceError> {
        let idx = self.index(p).ok_or(PlaceError::OutOfBounds(p))?;
        let node = &mut self.nodes[idx];
        if node.state.is_endpoint() {
            return Err(PlaceError::Occupied { pos: p, state: node.state });
        }
        node.state = NodeState::Unvisited;
        node.negative_weight = true;
        Ok(())
    }

    /// Reset `p` to `Unvisited`, clearing its negative flag and the Start
    /// or End handle it held. Returns the previous state.
    pub fn reset(&mut self, p: Point) -> Option<NodeState> {
        let idx = self.index(p)?;
        let prev = self.nodes[idx].state;
        self.nodes[idx].reset();
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        Some(prev)
    }

    /// Reset every node and drop both handles.
    pub fn clear(&mut self) {
        for node in &mut self.nodes {
            node.reset();
        }
        self.start = None;
        self.end = None;
    }

    /// Undo the marks of a previous run, keeping barriers, negative flags
    /// and endpoints.
    pub fn clear_search(&mut self) {
        for node in &mut self.nodes {
            if node.state.is_search_state() {
                node.state = NodeState::Unvisited;
            }
        }
    }
}
