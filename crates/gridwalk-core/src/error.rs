use std::fmt;

use crate::geom::Point;
use crate::node::NodeState;

/// Errors returned by the placement API of [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The point lies outside the lattice.
    OutOfBounds(Point),
    /// The cell already holds a Start or End that the placement would
    /// overwrite.
    Occupied { pos: Point, state: NodeState },
    /// The requested state can only be assigned by a search run.
    NotPlaceable(NodeState),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
            Self::Occupied { pos, state } => {
                write!(f, "cell {pos} is already occupied by {state:?}")
            }
            Self::NotPlaceable(state) => write!(f, "state {state:?} cannot be placed"),
        }
    }
}

impl std::error::Error for PlaceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            PlaceError::OutOfBounds(Point::new(9, -1)).to_string(),
            "point (9, -1) is outside the grid"
        );
        assert_eq!(
            PlaceError::Occupied {
                pos: Point::new(0, 0),
                state: NodeState::Start
            }
            .to_string(),
            "cell (0, 0) is already occupied by Start"
        );
        assert_eq!(
            PlaceError::NotPlaceable(NodeState::Path).to_string(),
            "state Path cannot be placed"
        );
    }
}
