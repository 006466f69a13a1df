//! Per-request travel-time graph: overrides layered over a shared base table.

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::GraphConfig;
use super::table::TravelTable;
use crate::error::ConfigurationError;

/// A caller-supplied travel time for one directed pair.
///
/// `minutes` is signed so that invalid (negative) input reaches validation
/// instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TravelOverride {
    pub from: String,
    pub to: String,
    pub minutes: i64,
}

impl TravelOverride {
    pub fn new(from: impl Into<String>, to: impl Into<String>, minutes: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            minutes,
        }
    }
}

/// Directed travel-time lookup for a single planning request.
///
/// The base table is borrowed read-only; overrides live in a transient
/// overlay owned by this graph and are never written back.
///
/// [`duration`](Self::duration) is total: every pair has an answer.
#[derive(Debug, Clone)]
pub struct TravelTimeGraph<'a> {
    base: &'a TravelTable,
    overlay: TravelTable,
    missing: u32,
}

impl<'a> TravelTimeGraph<'a> {
    /// Creates a graph over `base` with no overrides.
    pub fn new(base: &'a TravelTable, config: &GraphConfig) -> Self {
        Self {
            base,
            overlay: TravelTable::new(),
            missing: config.missing_pair_duration(),
        }
    }

    /// Creates a graph over `base` with validated per-pair overrides.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::BlankOverrideLocation`] if a pair names a blank location
    /// - [`ConfigurationError::NonPositiveDuration`] if a duration is zero or negative
    /// - [`ConfigurationError::ContradictoryDuration`] if a pair is given twice with
    ///   different durations
    pub fn with_overrides(
        base: &'a TravelTable,
        overrides: &[TravelOverride],
        config: &GraphConfig,
    ) -> Result<Self, ConfigurationError> {
        let mut graph = Self::new(base, config);

        for ov in overrides {
            let from = ov.from.trim();
            let to = ov.to.trim();
            if from.is_empty() || to.is_empty() {
                return Err(ConfigurationError::BlankOverrideLocation);
            }
            if ov.minutes <= 0 {
                return Err(ConfigurationError::NonPositiveDuration {
                    from: from.to_string(),
                    to: to.to_string(),
                    minutes: ov.minutes,
                });
            }
            let minutes = u32::try_from(ov.minutes).unwrap_or(u32::MAX);

            if let Some(first) = graph.overlay.insert(from, to, minutes) {
                if first != minutes {
                    return Err(ConfigurationError::ContradictoryDuration {
                        from: from.to_string(),
                        to: to.to_string(),
                        first,
                        second: minutes,
                    });
                }
            }
        }

        debug!(
            base_pairs = base.len(),
            override_pairs = graph.overlay.len(),
            "travel-time graph built"
        );
        Ok(graph)
    }

    /// Travel time in minutes from `from` to `to`.
    ///
    /// Override first, then the base table, then the configured default.
    pub fn duration(&self, from: &str, to: &str) -> u32 {
        self.overlay
            .get(from, to)
            .or_else(|| self.base.get(from, to))
            .unwrap_or(self.missing)
    }

    /// Total minutes travelling from `start` through `route` in order.
    pub fn path_time<S: AsRef<str>>(&self, start: &str, route: &[S]) -> u64 {
        let mut current = start;
        let mut total = 0u64;
        for stop in route {
            let stop = stop.as_ref();
            total += u64::from(self.duration(current, stop));
            current = stop;
        }
        total
    }

    /// Number of per-request override pairs.
    pub fn override_count(&self) -> usize {
        self.overlay.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DEFAULT_TRAVEL_TABLE, FALLBACK_DURATION_MINUTES};

    fn base() -> TravelTable {
        TravelTable::from_entries([("A", "B", 10), ("B", "C", 5)])
    }

    #[test]
    fn test_explicit_entry_is_returned() {
        let table = base();
        let graph = TravelTimeGraph::new(&table, &GraphConfig::default());
        assert_eq!(graph.duration("A", "B"), 10);
    }

    #[test]
    fn test_unknown_pair_uses_fallback() {
        let table = base();
        let graph = TravelTimeGraph::new(&table, &GraphConfig::default());
        assert_eq!(graph.duration("B", "A"), FALLBACK_DURATION_MINUTES);
        assert_eq!(graph.duration("Nowhere", "Elsewhere"), 20);
    }

    #[test]
    fn test_configured_default_beats_fallback() {
        let table = base();
        let config = GraphConfig::default().with_default_duration(33);
        let graph = TravelTimeGraph::new(&table, &config);
        assert_eq!(graph.duration("C", "A"), 33);
        assert_eq!(graph.duration("A", "B"), 10);
    }

    #[test]
    fn test_override_takes_precedence_per_pair() {
        let table = base();
        let graph = TravelTimeGraph::with_overrides(
            &table,
            &[TravelOverride::new("A", "B", 3)],
            &GraphConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.duration("A", "B"), 3);
        assert_eq!(graph.duration("B", "C"), 5);
        // base table untouched
        assert_eq!(table.get("A", "B"), Some(10));
    }

    #[test]
    fn test_overrides_never_leak_into_shared_default() {
        let graph = TravelTimeGraph::with_overrides(
            &DEFAULT_TRAVEL_TABLE,
            &[TravelOverride::new("Ragama", "Ja-Ela", 99)],
            &GraphConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.duration("Ragama", "Ja-Ela"), 99);
        assert_eq!(DEFAULT_TRAVEL_TABLE.get("Ragama", "Ja-Ela"), Some(10));
    }

    #[test]
    fn test_negative_override_rejected() {
        let table = base();
        let err = TravelTimeGraph::with_overrides(
            &table,
            &[TravelOverride::new("A", "B", -4)],
            &GraphConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NonPositiveDuration {
                from: "A".into(),
                to: "B".into(),
                minutes: -4
            }
        );
    }

    #[test]
    fn test_zero_override_rejected() {
        let table = base();
        let result = TravelTimeGraph::with_overrides(
            &table,
            &[TravelOverride::new("A", "B", 0)],
            &GraphConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_contradictory_override_rejected() {
        let table = base();
        let result = TravelTimeGraph::with_overrides(
            &table,
            &[
                TravelOverride::new("A", "C", 4),
                TravelOverride::new("A", "C", 6),
            ],
            &GraphConfig::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigurationError::ContradictoryDuration {
                first: 4,
                second: 6,
                ..
            })
        ));
    }

    #[test]
    fn test_repeated_identical_override_accepted() {
        let table = base();
        let graph = TravelTimeGraph::with_overrides(
            &table,
            &[
                TravelOverride::new("A", "C", 4),
                TravelOverride::new(" A ", "C", 4),
            ],
            &GraphConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.override_count(), 1);
    }

    #[test]
    fn test_blank_override_location_rejected() {
        let table = base();
        let result = TravelTimeGraph::with_overrides(
            &table,
            &[TravelOverride::new(" ", "C", 4)],
            &GraphConfig::default(),
        );
        assert_eq!(result.unwrap_err(), ConfigurationError::BlankOverrideLocation);
    }

    #[test]
    fn test_path_time_sums_legs_from_start() {
        let table = base();
        let graph = TravelTimeGraph::new(&table, &GraphConfig::default());
        assert_eq!(graph.path_time("A", &["B", "C"][..]), 15);
        assert_eq!(graph.path_time::<&str>("A", &[]), 0);
    }
}
