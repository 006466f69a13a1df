//! Travel-time graph configuration.

/// Duration assumed for an unknown pair when no default is configured:
/// a typical intra-district hop.
pub const FALLBACK_DURATION_MINUTES: u32 = 20;

/// Configuration for [`TravelTimeGraph`](super::TravelTimeGraph).
///
/// # Examples
///
/// ```
/// use u_rescue::graph::{GraphConfig, FALLBACK_DURATION_MINUTES};
///
/// let config = GraphConfig::default();
/// assert_eq!(config.missing_pair_duration(), FALLBACK_DURATION_MINUTES);
///
/// let config = GraphConfig::default().with_default_duration(15);
/// assert_eq!(config.missing_pair_duration(), 15);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Duration used for pairs missing from both the overrides and the
    /// base table. `None` falls back to [`FALLBACK_DURATION_MINUTES`].
    /// Always at least one minute.
    default_duration: Option<u32>,
}

impl GraphConfig {
    /// Sets the default duration for unknown pairs (at least one minute).
    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        self.default_duration = Some(minutes.max(1));
        self
    }

    /// The configured default duration, if any.
    pub fn default_duration(&self) -> Option<u32> {
        self.default_duration
    }

    /// The duration reported for a pair with no explicit entry.
    pub fn missing_pair_duration(&self) -> u32 {
        self.default_duration.unwrap_or(FALLBACK_DURATION_MINUTES)
    }
}
