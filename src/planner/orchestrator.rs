//! Planning orchestrator.
//!
//! # Pipeline
//!
//! 1. Reject a blank start location and invalid travel-time overrides
//! 2. Reject incidents with blank locations (and an empty batch, if required)
//! 3. Score every incident
//! 4. Evaluate every routing strategy
//! 5. Select the winner by strategy preference
//! 6. Assemble the [`RoutePlan`]
//!
//! Steps 1–2 run before any scoring, so a rejected request does no work.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info};

use super::config::PlannerConfig;
use super::types::{CandidateSummary, PlanInput, PlanMetrics, RoutePlan};
use crate::error::{ConfigurationError, PlanResult, ValidationError};
use crate::graph::{TravelOverride, TravelTable, TravelTimeGraph, DEFAULT_TRAVEL_TABLE};
use crate::incident::{Incident, ScoredIncident};
use crate::routing::{evaluate, RouteCandidate, Strategy};
use crate::scoring::Scorer;

/// Composes scoring, graph construction, route evaluation and selection.
///
/// A planner holds only read-only state and may be shared across threads;
/// each call owns its own graph overlay and results.
///
/// # Examples
///
/// ```
/// use u_rescue::graph::TravelOverride;
/// use u_rescue::incident::{Incident, NeedType};
/// use u_rescue::planner::Planner;
///
/// let incidents = vec![
///     Incident::new("Ja-Ela", "5 elderly people trapped on roof", 5, NeedType::Rescue),
///     Incident::new("Gampaha", "Diabetic patient needs insulin", 1, NeedType::Medical),
/// ];
/// let overrides = vec![
///     TravelOverride::new("Ragama", "Ja-Ela", 10),
///     TravelOverride::new("Ja-Ela", "Gampaha", 40),
///     TravelOverride::new("Ragama", "Gampaha", 30),
/// ];
///
/// let plan = Planner::default().plan(&incidents, "Ragama", &overrides).unwrap();
/// assert_eq!(plan.ordered_locations(), &["Ja-Ela", "Gampaha"]);
/// assert_eq!(plan.estimated_total_time(), 50);
/// assert_eq!(plan.total_priority_score, 16);
/// ```
pub struct Planner<'a> {
    config: PlannerConfig,
    scorer: Scorer,
    base: &'a TravelTable,
}

impl Planner<'static> {
    /// Creates a planner over the built-in travel table.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_base_table(config, &DEFAULT_TRAVEL_TABLE)
    }
}

impl Default for Planner<'static> {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl<'a> Planner<'a> {
    /// Creates a planner over a caller-owned base travel table.
    pub fn with_base_table(config: PlannerConfig, base: &'a TravelTable) -> Self {
        let scorer = Scorer::new(&config.scoring);
        Self {
            config,
            scorer,
            base,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// Builds the per-request travel-time graph.
    pub fn graph(
        &self,
        overrides: &[TravelOverride],
    ) -> Result<TravelTimeGraph<'a>, ConfigurationError> {
        TravelTimeGraph::with_overrides(self.base, overrides, &self.config.graph)
    }

    /// Scores `incidents` and plans a route from `start`.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError`] for a blank start or invalid overrides
    /// - [`ValidationError`] for a blank incident location, or an empty
    ///   batch when [`PlannerConfig::require_incidents`] is set
    pub fn plan(
        &self,
        incidents: &[Incident],
        start: &str,
        overrides: &[TravelOverride],
    ) -> PlanResult<RoutePlan> {
        let start = checked_start(start)?;
        let graph = self.graph(overrides)?;
        self.check_batch(incidents.iter())?;

        let scored = self.scorer.score_all(incidents);
        Ok(self.assemble(scored, start, &graph))
    }

    /// Plans a route for incidents that were scored earlier.
    pub fn plan_scored(
        &self,
        scored: Vec<ScoredIncident>,
        start: &str,
        overrides: &[TravelOverride],
    ) -> PlanResult<RoutePlan> {
        let start = checked_start(start)?;
        let graph = self.graph(overrides)?;
        self.check_batch(scored.iter().map(|s| &s.incident))?;

        Ok(self.assemble(scored, start, &graph))
    }

    /// Plans one [`PlanInput`].
    pub fn plan_input(&self, input: &PlanInput) -> PlanResult<RoutePlan> {
        self.plan(&input.incidents, &input.start_location, &input.overrides)
    }

    /// Plans independent requests, returning results in input order.
    ///
    /// When [`PlannerConfig::parallel`] is set the requests run on the rayon
    /// pool. A failing request never affects the others.
    pub fn plan_many(&self, inputs: &[PlanInput]) -> Vec<PlanResult<RoutePlan>> {
        if self.config.parallel {
            inputs.par_iter().map(|i| self.plan_input(i)).collect()
        } else {
            inputs.iter().map(|i| self.plan_input(i)).collect()
        }
    }

    fn check_batch<'i, I>(&self, incidents: I) -> Result<(), ValidationError>
    where
        I: ExactSizeIterator<Item = &'i Incident>,
    {
        if incidents.len() == 0 && self.config.require_incidents {
            return Err(ValidationError::EmptyIncidents);
        }
        for (index, incident) in incidents.enumerate() {
            if incident.location_key().is_empty() {
                return Err(ValidationError::BlankLocation { index });
            }
        }
        Ok(())
    }

    fn assemble(
        &self,
        scored: Vec<ScoredIncident>,
        start: &str,
        graph: &TravelTimeGraph<'_>,
    ) -> RoutePlan {
        let candidates = evaluate(&scored, start, graph);
        for c in &candidates {
            debug!(
                strategy = c.strategy_name(),
                total_time = c.total_time,
                route = ?c.ordered_locations,
                "candidate"
            );
        }

        let route = match self.config.preference.select(&candidates) {
            Some(c) => c.clone(),
            None => RouteCandidate {
                strategy: Strategy::HighestPriorityFirst,
                ordered_locations: Vec::new(),
                total_time: 0,
                reasoning: String::new(),
            },
        };
        let selection_reason = self.config.preference.explain(&route, &candidates);

        let on_route: HashSet<&str> = route.ordered_locations.iter().map(String::as_str).collect();
        let total_priority_score: u64 = scored
            .iter()
            .filter(|s| on_route.contains(s.location_key()))
            .map(|s| u64::from(s.score))
            .sum();

        let metrics = PlanMetrics {
            incident_count: scored.len(),
            location_count: route.ordered_locations.len(),
            candidates_evaluated: candidates.len(),
            estimated_total_time: route.total_time,
            total_priority_score,
        };

        info!(
            incidents = metrics.incident_count,
            locations = metrics.location_count,
            strategy = route.strategy_name(),
            total_time = metrics.estimated_total_time,
            total_priority = metrics.total_priority_score,
            "route plan assembled"
        );

        RoutePlan {
            candidates: candidates
                .iter()
                .map(|c| CandidateSummary {
                    strategy: c.strategy,
                    total_time: c.total_time,
                })
                .collect(),
            route,
            total_priority_score,
            scored_incidents: scored,
            selection_reason,
            metrics,
        }
    }
}

fn checked_start(start: &str) -> Result<&str, ConfigurationError> {
    let start = start.trim();
    if start.is_empty() {
        return Err(ConfigurationError::BlankStartLocation);
    }
    Ok(start)
}

/// Plans with the default configuration and the built-in travel table.
pub fn plan(
    incidents: &[Incident],
    start: &str,
    overrides: &[TravelOverride],
) -> PlanResult<RoutePlan> {
    Planner::default().plan(incidents, start, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::incident::NeedType;

    fn ja_ela() -> Incident {
        Incident::new(
            "Ja-Ela",
            "5 elderly people trapped on roof",
            5,
            NeedType::Rescue,
        )
    }

    fn gampaha() -> Incident {
        Incident::new(
            "Gampaha",
            "Diabetic patient needs insulin",
            1,
            NeedType::Medical,
        )
    }

    #[test]
    fn test_default_table_scenario() {
        let plan = plan(&[ja_ela(), gampaha()], "Ragama", &[]).unwrap();
        assert_eq!(plan.strategy(), Strategy::HighestPriorityFirst);
        assert_eq!(plan.ordered_locations(), &["Ja-Ela", "Gampaha"]);
        assert_eq!(plan.estimated_total_time(), 50);
        assert_eq!(plan.total_priority_score, 16);
        assert_eq!(plan.metrics.candidates_evaluated, 3);
        assert_eq!(plan.candidates.len(), 3);
    }

    #[test]
    fn test_empty_batch_gives_empty_plan() {
        let plan = plan(&[], "Ragama", &[]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.estimated_total_time(), 0);
        assert_eq!(plan.total_priority_score, 0);
        assert!(plan.scored_incidents.is_empty());
    }

    #[test]
    fn test_empty_batch_rejected_when_required() {
        let planner = Planner::new(PlannerConfig::default().with_require_incidents(true));
        let err = planner.plan(&[], "Ragama", &[]).unwrap_err();
        assert_eq!(err, PlanError::Validation(ValidationError::EmptyIncidents));
    }

    #[test]
    fn test_blank_start_rejected() {
        let err = plan(&[ja_ela()], "   ", &[]).unwrap_err();
        assert_eq!(
            err,
            PlanError::Configuration(ConfigurationError::BlankStartLocation)
        );
    }

    #[test]
    fn test_blank_start_rejected_even_for_empty_batch() {
        assert!(plan(&[], "", &[]).is_err());
    }

    #[test]
    fn test_configuration_checked_before_incidents() {
        let blank = Incident::new(" ", "", 0, NeedType::Other);
        let err = plan(&[blank], "Ragama", &[TravelOverride::new("A", "B", -1)]).unwrap_err();
        assert!(matches!(err, PlanError::Configuration(_)));
    }

    #[test]
    fn test_blank_incident_location_rejected() {
        let blank = Incident::new("", "", 0, NeedType::Other);
        let err = plan(&[ja_ela(), blank], "Ragama", &[]).unwrap_err();
        assert_eq!(
            err,
            PlanError::Validation(ValidationError::BlankLocation { index: 1 })
        );
    }

    #[test]
    fn test_every_incident_kept_when_locations_repeat() {
        let second = Incident::new("Ja-Ela", "Road washed out", 0, NeedType::Info);
        let plan = plan(&[ja_ela(), second, gampaha()], "Ragama", &[]).unwrap();
        assert_eq!(plan.scored_incidents.len(), 3);
        assert_eq!(plan.ordered_locations().len(), 2);
        assert_eq!(plan.total_priority_score, 10 + 5 + 6);
    }

    #[test]
    fn test_start_location_is_trimmed() {
        let a = plan(&[ja_ela()], " Ragama ", &[]).unwrap();
        assert_eq!(a.estimated_total_time(), 10);
    }

    #[test]
    fn test_plan_scored_matches_plan() {
        let planner = Planner::default();
        let incidents = vec![ja_ela(), gampaha()];
        let direct = planner.plan(&incidents, "Ragama", &[]).unwrap();
        let scored = planner.scorer().score_all(&incidents);
        let staged = planner.plan_scored(scored, "Ragama", &[]).unwrap();
        assert_eq!(direct, staged);
    }

    #[test]
    fn test_custom_base_table() {
        let table = TravelTable::from_entries([("Depot", "X", 4)]);
        let planner = Planner::with_base_table(PlannerConfig::default(), &table);
        let incidents = vec![Incident::new("X", "", 0, NeedType::Other)];
        let plan = planner.plan(&incidents, "Depot", &[]).unwrap();
        assert_eq!(plan.estimated_total_time(), 4);
    }

    #[test]
    fn test_plan_many_isolates_failures() {
        let planner = Planner::default();
        let inputs = vec![
            PlanInput::new(vec![ja_ela()], "Ragama"),
            PlanInput::new(vec![ja_ela()], ""),
            PlanInput::new(vec![gampaha()], "Ragama"),
        ];
        let results = planner.plan_many(&inputs);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().estimated_total_time(), 30);
    }

    #[test]
    fn test_plan_many_sequential_matches_parallel() {
        let inputs: Vec<PlanInput> = (0..8)
            .map(|i| {
                let loc = format!("Site-{i}");
                PlanInput::new(vec![ja_ela(), Incident::new(loc, "", 0, NeedType::Supply)], "Ragama")
            })
            .collect();
        let parallel = Planner::default().plan_many(&inputs);
        let sequential =
            Planner::new(PlannerConfig::default().with_parallel(false)).plan_many(&inputs);
        assert_eq!(parallel, sequential);
    }
}
