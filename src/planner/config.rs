//! Planner configuration.

use crate::graph::GraphConfig;
use crate::routing::StrategyPreference;
use crate::scoring::ScoringConfig;

/// Configuration for the [`Planner`](super::Planner).
///
/// # Defaults
///
/// ```
/// use u_rescue::planner::PlannerConfig;
/// use u_rescue::routing::Strategy;
///
/// let config = PlannerConfig::default();
/// assert!(!config.require_incidents);
/// assert_eq!(config.preference.order()[0], Strategy::HighestPriorityFirst);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_rescue::graph::GraphConfig;
/// use u_rescue::planner::PlannerConfig;
///
/// let config = PlannerConfig::default()
///     .with_graph(GraphConfig::default().with_default_duration(25))
///     .with_require_incidents(true);
/// assert_eq!(config.graph.default_duration(), Some(25));
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Point values and vocabularies for the scorer.
    pub scoring: ScoringConfig,

    /// Travel-time defaults.
    pub graph: GraphConfig,

    /// Strategy preference order for route selection.
    pub preference: StrategyPreference,

    /// When `true`, an empty incident batch is a validation error instead
    /// of producing an empty plan.
    pub require_incidents: bool,

    /// Whether [`Planner::plan_many`](super::Planner::plan_many) runs
    /// requests in parallel using rayon.
    pub parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            graph: GraphConfig::default(),
            preference: StrategyPreference::default(),
            require_incidents: false,
            parallel: true,
        }
    }
}

impl PlannerConfig {
    /// Sets the scoring configuration.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Sets the graph configuration.
    pub fn with_graph(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }

    /// Sets the strategy preference order.
    pub fn with_preference(mut self, preference: StrategyPreference) -> Self {
        self.preference = preference;
        self
    }

    /// Requires at least one incident per plan.
    pub fn with_require_incidents(mut self, require: bool) -> Self {
        self.require_incidents = require;
        self
    }

    /// Enables or disables parallel batch planning.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
