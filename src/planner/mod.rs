//! Planning orchestrator.
//!
//! [`Planner::plan`] turns a batch of raw incidents and a start location
//! into a [`RoutePlan`]: scored incidents, the winning route, the strategy
//! that produced it and aggregate metrics. Every step is a pure function of
//! the inputs, so independent requests can run in parallel with no
//! coordination.

mod config;
mod orchestrator;
mod types;

pub use config::PlannerConfig;
pub use orchestrator::{plan, Planner};
pub use types::{CandidateSummary, PlanInput, PlanMetrics, RoutePlan};
