use gridwalk_core::Point;

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes placed on the frontier (each counted once per entry).
    pub opened: usize,
    /// Nodes settled and marked `Closed`.
    pub closed: usize,
    /// Observer `on_step` calls.
    pub steps: usize,
    /// Full relaxation passes (Bellman-Ford only).
    pub relax_rounds: usize,
}

/// Result of a search run.
///
/// A cancelled run and a run that found no route look the same here; a
/// caller that needs to tell them apart checks its own cancel flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Start-to-end route including both endpoints, if one was found.
    pub path: Option<Vec<Point>>,
    /// Cost of `path` under the algorithm's edge weights.
    pub cost: Option<i32>,
    /// Bellman-Ford still relaxed an edge after `|V| − 1` rounds. The
    /// path, if any, is best effort.
    pub negative_cycle: bool,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub(crate) fn not_found(stats: SearchStats) -> Self {
        Self {
            stats,
            ..Self::default()
        }
    }

    /// Whether a path from start to end was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves on the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

impl From<&SearchOutcome> for bool {
    fn from(outcome: &SearchOutcome) -> bool {
        outcome.found()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_serialize_field_names() {
        let json = serde_json::to_value(SearchStats {
            opened: 1,
            closed: 2,
            steps: 3,
            relax_rounds: 4,
        })
        .unwrap();
        assert_eq!(json["relax_rounds"], 4);
        assert_eq!(json["opened"], 1);
    }
}
