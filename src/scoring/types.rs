//! Core trait for scoring rules.

use crate::incident::Incident;

/// A boolean rule that adds a fixed number of points when it fires.
///
/// Rules are boolean, not counted: however many keywords match, a rule
/// contributes its points at most once.
///
/// # Examples
///
/// ```ignore
/// struct Flooded;
///
/// impl ScoringRule for Flooded {
///     fn name(&self) -> &str { "Flooded" }
///     fn points(&self) -> u32 { 1 }
///     fn check(&self, incident: &Incident) -> Option<&str> {
///         incident.description.contains("flood").then_some("Flood")
///     }
/// }
/// ```
pub trait ScoringRule: Send + Sync {
    /// Stable identifier of the rule.
    fn name(&self) -> &str;

    /// Points added when the rule fires.
    fn points(&self) -> u32;

    /// Returns the label to print in the reasoning trail if the rule fires.
    ///
    /// Most rules return their name; a rule may pick a more specific label
    /// (e.g. `Elderly` vs `Child`) describing why it fired.
    fn check(&self, incident: &Incident) -> Option<&str>;
}

/// One fired rule in a reasoning trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    pub label: String,
    pub points: u32,
}
