//! Deterministic incident scoring and explainable rescue route planning.
//!
//! Converts batches of incident reports into a prioritized visitation route
//! that a coordinator can verify by hand:
//!
//! - **Graph** ([`graph`]): directed travel-time lookup with per-request
//!   overrides over a shared read-only default table. Total: unknown pairs
//!   get a default duration.
//! - **Scoring** ([`scoring`]): fixed additive rule set producing an integer
//!   score and a reasoning trail such as `"Base:5 + Elderly:2 + Rescue:3 = 10"`.
//! - **Routing** ([`routing`]): three fixed strategies (highest priority,
//!   closest, furthest) evaluated against the graph, and a selector that
//!   picks the winner by explicit strategy preference.
//! - **Planner** ([`planner`]): composes the above into one call returning a
//!   [`RoutePlan`](planner::RoutePlan).
//! - **Ingestion / Export** ([`ingest`], [`export`]): line-oriented input
//!   and CSV output.
//! - **Narration** ([`narration`]): optional display text from an external
//!   provider, kept apart from the deterministic path.
//!
//! # Architecture
//!
//! Every operation is a pure function of its inputs. There is no I/O and no
//! shared mutable state, so planners can be shared across threads and
//! independent requests need no coordination.
//!
//! # Quick Start
//!
//! ```
//! use u_rescue::ingest::parse_batch;
//! use u_rescue::planner::plan;
//!
//! let report = parse_batch(
//!     "Location: Ja-Ela | Description: 5 elderly people trapped on roof | People: 5 | Need: Rescue\n\
//!      Location: Gampaha | Description: Diabetic patient needs insulin | People: 1 | Need: Medical",
//! );
//! let plan = plan(&report.incidents, "Ragama", &[]).unwrap();
//!
//! assert_eq!(plan.route.strategy_name(), "Highest-priority-first");
//! assert_eq!(plan.estimated_total_time(), 50);
//! assert_eq!(plan.total_priority_score, 16);
//! ```

#[cfg(feature = "serde")]
pub mod boundary;
pub mod error;
pub mod export;
pub mod graph;
pub mod incident;
pub mod ingest;
pub mod narration;
pub mod planner;
pub mod routing;
pub mod scoring;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigurationError, PlanError, PlanResult, ValidationError};
