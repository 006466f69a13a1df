//! Route strategy evaluation and selection.
//!
//! Three fixed strategies each produce a total ordering of the distinct
//! incident locations:
//!
//! - **Highest-priority-first**: sort by the best score at each location.
//! - **Closest-first**: nearest-neighbour walk from the start.
//! - **Furthest-first**: farthest-neighbour walk from the start.
//!
//! The winner is chosen by an explicit [`StrategyPreference`], not by
//! travel time, so a reviewer can always say why a route was picked.

mod evaluator;
mod selector;
mod types;

pub use evaluator::{
    distinct_stops, evaluate, evaluate_strategy, ordering_for, OrderingFn, Stop, ORDERINGS,
};
pub use selector::{select, StrategyPreference};
pub use types::{RouteCandidate, Strategy};
