//! Planning inputs and outputs.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::graph::TravelOverride;
use crate::incident::{Incident, ScoredIncident};
use crate::routing::{RouteCandidate, Strategy};

/// Travel time of one evaluated strategy, kept for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CandidateSummary {
    pub strategy: Strategy,
    pub total_time: u64,
}

/// Aggregate figures for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanMetrics {
    pub incident_count: usize,
    /// Distinct locations on the route.
    pub location_count: usize,
    pub candidates_evaluated: usize,
    pub estimated_total_time: u64,
    pub total_priority_score: u64,
}

/// The engine's output of record: the winning route with its metrics and
/// every scored incident.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutePlan {
    /// The selected candidate.
    pub route: RouteCandidate,
    /// Sum of scores of incidents whose location is on the route.
    pub total_priority_score: u64,
    /// Every scored incident exactly once, in input order.
    pub scored_incidents: Vec<ScoredIncident>,
    /// Why this strategy won.
    pub selection_reason: String,
    /// Every evaluated candidate's travel time, in evaluation order.
    pub candidates: Vec<CandidateSummary>,
    pub metrics: PlanMetrics,
}

impl RoutePlan {
    pub fn strategy(&self) -> Strategy {
        self.route.strategy
    }

    pub fn ordered_locations(&self) -> &[String] {
        &self.route.ordered_locations
    }

    pub fn estimated_total_time(&self) -> u64 {
        self.route.total_time
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// One independent planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanInput {
    pub incidents: Vec<Incident>,
    pub start_location: String,
    pub overrides: Vec<TravelOverride>,
}

impl PlanInput {
    pub fn new(incidents: Vec<Incident>, start_location: impl Into<String>) -> Self {
        Self {
            incidents,
            start_location: start_location.into(),
            overrides: Vec::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: Vec<TravelOverride>) -> Self {
        self.overrides = overrides;
        self
    }
}
