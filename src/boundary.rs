//! Serializable request/response types for exposing the planner over a
//! transport (HTTP, WebAssembly, message queue).
//!
//! Response field names are stable: `optimal_route`, `strategy_used`,
//! `reasoning`, `estimated_total_time`, `total_priority_score`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::graph::TravelOverride;
use crate::incident::{Incident, ScoredIncident};
use crate::narration::{narrate_all, Narrator};
use crate::planner::{PlanMetrics, Planner, RoutePlan};

/// Travel-time overrides as `from -> to -> minutes`.
pub type TravelTimes = BTreeMap<String, BTreeMap<String, i64>>;

/// A planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub incidents: Vec<Incident>,
    pub starting_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_times: Option<TravelTimes>,
}

impl PlanRequest {
    /// Flattens `travel_times` into override triples.
    pub fn overrides(&self) -> Vec<TravelOverride> {
        self.travel_times
            .iter()
            .flatten()
            .flat_map(|(from, tos)| {
                tos.iter()
                    .map(move |(to, &minutes)| TravelOverride::new(from.clone(), to.clone(), minutes))
            })
            .collect()
    }
}

/// A planning response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub optimal_route: Vec<String>,
    pub strategy_used: String,
    pub reasoning: String,
    pub estimated_total_time: u64,
    pub total_priority_score: u64,
    pub selection_reason: String,
    pub scored_incidents: Vec<ScoredIncident>,
    pub metrics: PlanMetrics,
    /// Provider narration per scored incident, index-aligned. Display only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub narration: Vec<Option<String>>,
}

impl PlanResponse {
    /// Joins a deterministic plan with independently gathered narration.
    pub fn assemble(plan: RoutePlan, narration: Vec<Option<String>>) -> Self {
        let narration = if narration.iter().all(Option::is_none) {
            Vec::new()
        } else {
            narration
        };
        Self {
            strategy_used: plan.route.strategy_name().to_string(),
            reasoning: plan.route.reasoning,
            estimated_total_time: plan.route.total_time,
            optimal_route: plan.route.ordered_locations,
            total_priority_score: plan.total_priority_score,
            selection_reason: plan.selection_reason,
            scored_incidents: plan.scored_incidents,
            metrics: plan.metrics,
            narration,
        }
    }
}

/// Error payload for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// `"validation"` or `"configuration"`.
    pub kind: String,
    pub detail: String,
}

impl From<&PlanError> for ErrorResponse {
    fn from(err: &PlanError) -> Self {
        let (kind, detail) = match err {
            PlanError::Validation(e) => ("validation", e.to_string()),
            PlanError::Configuration(e) => ("configuration", e.to_string()),
        };
        Self {
            kind: kind.to_string(),
            detail,
        }
    }
}

/// Plans a request and assembles the response.
///
/// The plan is computed first and does not depend on `narrator`;
/// narration is gathered afterwards and attached alongside it.
pub fn handle<N: Narrator + ?Sized>(
    planner: &Planner<'_>,
    request: &PlanRequest,
    narrator: &N,
) -> PlanResult<PlanResponse> {
    let plan = planner.plan(
        &request.incidents,
        &request.starting_location,
        &request.overrides(),
    )?;
    let narration = narrate_all(narrator, &plan.scored_incidents);
    Ok(PlanResponse::assemble(plan, narration))
}
