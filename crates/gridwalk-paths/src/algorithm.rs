use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Grid, Point};

use crate::astar::run_astar;
use crate::bellman_ford::run_bellman_ford;
use crate::bfs::run_bfs;
use crate::dijkstra::run_dijkstra;
use crate::outcome::SearchOutcome;
use crate::traits::StepObserver;

/// The interchangeable search algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    #[default]
    AStar,
    Dijkstra,
    Bfs,
    BellmanFord,
}

impl Algorithm {
    /// Every algorithm, in shortcut-key order.
    pub const ALL: [Algorithm; 4] = [Self::AStar, Self::Dijkstra, Self::Bfs, Self::BellmanFord];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra's",
            Self::Bfs => "BFS",
            Self::BellmanFord => "Bellman-Ford",
        }
    }

    /// Shortcut key, `'1'` to `'4'`.
    pub const fn key(self) -> char {
        match self {
            Self::AStar => '1',
            Self::Dijkstra => '2',
            Self::Bfs => '3',
            Self::BellmanFord => '4',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }

    /// Only Bellman-Ford gives negative-weight nodes any meaning.
    pub const fn supports_negative_weights(self) -> bool {
        matches!(self, Self::BellmanFord)
    }

    /// Run this algorithm from `start` to `end`.
    pub fn run<O: StepObserver + ?Sized>(
        self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> SearchOutcome {
        match self {
            Self::AStar => run_astar(grid, start, end, observer),
            Self::Dijkstra => run_dijkstra(grid, start, end, observer),
            Self::Bfs => run_bfs(grid, start, end, observer),
            Self::BellmanFord => run_bellman_ford(grid, start, end, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected astar, dijkstra, bfs or bellman-ford)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '\''))
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "a*" | "astar" | "1" => Ok(Self::AStar),
            "dijkstra" | "dijkstras" | "2" => Ok(Self::Dijkstra),
            "bfs" | "breadthfirst" | "3" => Ok(Self::Bfs),
            "bellmanford" | "bf" | "4" => Ok(Self::BellmanFord),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
