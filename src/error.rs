//! Error taxonomy for planning requests.
//!
//! Two kinds of failure exist, and neither is fatal to the process:
//!
//! - [`ValidationError`]: a required input field is missing or malformed.
//!   Ingestion collects these per line so one bad line never sinks a batch.
//! - [`ConfigurationError`]: the request's planning setup is unusable
//!   (blank start location, non-positive or contradictory travel times).
//!   These are rejected before any scoring or evaluation starts.

use thiserror::Error;

/// A required input field is missing, blank, or malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An incident at the given batch index has a blank location.
    #[error("incident {index} has a blank location")]
    BlankLocation { index: usize },

    /// The caller required a non-empty plan but supplied no incidents.
    #[error("no incidents supplied but a non-empty plan was required")]
    EmptyIncidents,

    /// An ingestion line could not be parsed.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// The `People` segment of an ingestion line is not a non-negative integer.
    #[error("line {line}: people count {value:?} is not a non-negative integer")]
    InvalidPeopleCount { line: usize, value: String },
}

/// The planning setup is unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("start location is blank")]
    BlankStartLocation,

    /// A travel-time override names a blank location.
    #[error("travel-time override has a blank location")]
    BlankOverrideLocation,

    /// Travel durations must be strictly positive.
    #[error("travel time {from} -> {to} must be positive, got {minutes}")]
    NonPositiveDuration {
        from: String,
        to: String,
        minutes: i64,
    },

    /// The same directed pair was overridden twice with different durations.
    #[error("travel time {from} -> {to} given twice: {first} and {second}")]
    ContradictoryDuration {
        from: String,
        to: String,
        first: u32,
        second: u32,
    },

    /// The strategy preference order lists no strategies.
    #[error("strategy preference order is empty")]
    EmptyPreference,
}

/// Any failure of a planning call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

pub type PlanResult<T> = Result<T, PlanError>;
