//! The [`Node`] type — a single lattice cell and its traversal state.

use crate::geom::Point;

/// Traversal state of a node. Exactly one holds at any time.
///
/// This is purely semantic; mapping states to colours or glyphs is the
/// renderer's business.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    #[default]
    Unvisited,
    /// Queued on a search frontier.
    Open,
    /// Settled by a search.
    Closed,
    Barrier,
    Start,
    End,
    /// Lies on a reconstructed path.
    Path,
}

impl NodeState {
    /// States that only a search run assigns.
    #[inline]
    pub const fn is_search_state(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }

    /// Start or End.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

/// A lattice cell. The position never changes after the grid is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pos: Point,
    pub(crate) state: NodeState,
    pub(crate) negative_weight: bool,
}

impl Node {
    pub(crate) const fn new(pos: Point) -> Self {
        Self {
            pos,
            state: NodeState::Unvisited,
            negative_weight: false,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn state(&self) -> NodeState {
        self.state
    }

    /// Whether edges into this node weigh −1 under Bellman-Ford.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.negative_weight
    }

    #[inline]
    pub const fn is_barrier(&self) -> bool {
        matches!(self.state, NodeState::Barrier)
    }

    /// Edge weight of moving into this node: −1 when flagged negative,
    /// +1 otherwise.
    #[inline]
    pub const fn weight(&self) -> i32 {
        if self.negative_weight { -1 } else { 1 }
    }

    pub(crate) fn reset(&mut self) {
        self.state = NodeState::Unvisited;
        self.negative_weight = false;
    }
}
