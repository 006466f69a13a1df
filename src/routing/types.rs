//! Routing strategies and candidate routes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the fixed route-ordering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Visit locations in descending order of their highest incident score.
    #[cfg_attr(feature = "serde", serde(rename = "Highest-priority-first"))]
    HighestPriorityFirst,
    /// Nearest-neighbour walk from the start location.
    #[cfg_attr(feature = "serde", serde(rename = "Closest-first"))]
    ClosestFirst,
    /// Farthest-neighbour walk from the start location.
    #[cfg_attr(feature = "serde", serde(rename = "Furthest-first"))]
    FurthestFirst,
}

impl Strategy {
    /// All strategies in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::HighestPriorityFirst,
        Strategy::ClosestFirst,
        Strategy::FurthestFirst,
    ];

    /// Display label, e.g. `"Highest-priority-first"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::HighestPriorityFirst => "Highest-priority-first",
            Self::ClosestFirst => "Closest-first",
            Self::FurthestFirst => "Furthest-first",
        }
    }

    /// The intent this strategy optimises for.
    pub fn intent(self) -> &'static str {
        match self {
            Self::HighestPriorityFirst => "Prioritize highest-scoring incidents to save most lives",
            Self::ClosestFirst => "Visit the nearest location next to minimize travel time",
            Self::FurthestFirst => {
                "Reach the most remote locations first while teams and supplies are fresh"
            }
        }
    }

    /// Looks a strategy up by its label (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered visitation route produced by one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteCandidate {
    pub strategy: Strategy,
    /// Every distinct incident location exactly once.
    pub ordered_locations: Vec<String>,
    /// Minutes from the start location through every stop in order.
    pub total_time: u64,
    pub reasoning: String,
}

impl RouteCandidate {
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_locations.is_empty()
    }
}
