//! Incident data model.
//!
//! [`Incident`] is the raw report; [`ScoredIncident`] pairs it with the
//! priority score and the rule trail that produced it. Both are plain
//! value objects owned by the call that created them.

mod types;

pub use types::{Incident, NeedType, ScoredIncident};
