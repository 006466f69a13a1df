//! Travel-time model.
//!
//! A [`TravelTimeGraph`] answers "how many minutes from A to B" for any
//! pair of named locations. Answers come from, in order:
//!
//! 1. per-request [`TravelOverride`]s,
//! 2. a shared read-only [`TravelTable`] (by default [`DEFAULT_TRAVEL_TABLE`]),
//! 3. the configured default duration, or [`FALLBACK_DURATION_MINUTES`].
//!
//! No geometry is involved; the graph is a lookup, not a router.

mod config;
#[allow(clippy::module_inception)]
mod graph;
mod table;

pub use config::{GraphConfig, FALLBACK_DURATION_MINUTES};
pub use graph::{TravelOverride, TravelTimeGraph};
pub use table::{TravelTable, DEFAULT_TRAVEL_TABLE};
