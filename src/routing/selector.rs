//! Route selection by explicit strategy preference.

use super::types::{RouteCandidate, Strategy};
use crate::error::ConfigurationError;

/// Ordered strategy preference used to pick the winning route.
///
/// Selection never compares travel times: the winner is the candidate whose
/// strategy ranks first in this list. The default ranks
/// `Highest-priority-first` first, putting lives ahead of logistics.
///
/// Every strategy always has a rank. Strategies missing from a custom
/// order are appended in declaration order; duplicates are dropped.
///
/// # Examples
///
/// ```
/// use u_rescue::routing::{Strategy, StrategyPreference};
///
/// let pref = StrategyPreference::default();
/// assert_eq!(pref.rank(Strategy::HighestPriorityFirst), 0);
///
/// let pref = StrategyPreference::new([Strategy::ClosestFirst]).unwrap();
/// assert_eq!(
///     pref.order(),
///     &[
///         Strategy::ClosestFirst,
///         Strategy::HighestPriorityFirst,
///         Strategy::FurthestFirst,
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyPreference {
    order: Vec<Strategy>,
}

impl StrategyPreference {
    /// Creates a preference order.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::EmptyPreference`] if `order` is empty.
    pub fn new<I: IntoIterator<Item = Strategy>>(order: I) -> Result<Self, ConfigurationError> {
        let mut ranked: Vec<Strategy> = Vec::with_capacity(Strategy::ALL.len());
        for s in order {
            if !ranked.contains(&s) {
                ranked.push(s);
            }
        }
        if ranked.is_empty() {
            return Err(ConfigurationError::EmptyPreference);
        }
        for s in Strategy::ALL {
            if !ranked.contains(&s) {
                ranked.push(s);
            }
        }
        Ok(Self { order: ranked })
    }

    /// Strategies from most to least preferred.
    pub fn order(&self) -> &[Strategy] {
        &self.order
    }

    /// Zero-based rank of `strategy` (0 = most preferred).
    pub fn rank(&self, strategy: Strategy) -> usize {
        self.order
            .iter()
            .position(|&s| s == strategy)
            .unwrap_or(self.order.len())
    }

    /// Picks the candidate whose strategy ranks highest.
    ///
    /// Returns `None` only when `candidates` is empty. Among candidates with
    /// the same strategy, the first one wins.
    pub fn select<'c>(&self, candidates: &'c [RouteCandidate]) -> Option<&'c RouteCandidate> {
        self.order
            .iter()
            .find_map(|&s| candidates.iter().find(|c| c.strategy == s))
            .or_else(|| candidates.first())
    }

    /// Human-readable account of why `chosen` won.
    pub fn explain(&self, chosen: &RouteCandidate, candidates: &[RouteCandidate]) -> String {
        let rank = self.rank(chosen.strategy);
        let skipped: Vec<&str> = self.order[..rank.min(self.order.len())]
            .iter()
            .map(|s| s.name())
            .collect();
        let order: Vec<&str> = self.order.iter().map(|s| s.name()).collect();

        let mut note = format!(
            "{} selected: preference order [{}], {} candidate(s) evaluated",
            chosen.strategy_name(),
            order.join(", "),
            candidates.len()
        );
        if !skipped.is_empty() {
            note.push_str(&format!("; not available: {}", skipped.join(", ")));
        }
        note
    }
}

impl Default for StrategyPreference {
    fn default() -> Self {
        Self {
            order: Strategy::ALL.to_vec(),
        }
    }
}

/// Selects with the default preference order.
pub fn select(candidates: &[RouteCandidate]) -> Option<&RouteCandidate> {
    StrategyPreference::default().select(candidates)
}
