//! Rule-based incident scorer.

use super::config::ScoringConfig;
use super::rules::standard_rules;
use super::types::{RuleHit, ScoringRule};
use crate::incident::{Incident, ScoredIncident};

/// Deterministic additive scorer.
///
/// Applies the fixed rule set in order and records every rule that fired.
/// The result depends only on the incident's fields and the configuration,
/// never on any external call.
///
/// # Examples
///
/// ```
/// use u_rescue::incident::{Incident, NeedType};
/// use u_rescue::scoring::Scorer;
///
/// let scorer = Scorer::default();
/// let scored = scorer.score(&Incident::new(
///     "Ja-Ela",
///     "5 elderly people trapped on roof",
///     5,
///     NeedType::Rescue,
/// ));
/// assert_eq!(scored.score, 10);
/// assert_eq!(scored.reasoning, "Base:5 + Elderly:2 + Rescue:3 = 10");
/// ```
pub struct Scorer {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl Scorer {
    /// Creates a scorer with the standard rule set.
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            rules: standard_rules(config),
        }
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the rules that fire for `incident`, in evaluation order.
    pub fn hits(&self, incident: &Incident) -> Vec<RuleHit> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.check(incident).map(|label| RuleHit {
                    label: label.to_string(),
                    points: rule.points(),
                })
            })
            .collect()
    }

    /// Scores a single incident.
    pub fn score(&self, incident: &Incident) -> ScoredIncident {
        let hits = self.hits(incident);
        let score: u32 = hits.iter().map(|h| h.points).sum();
        ScoredIncident {
            incident: incident.clone(),
            score,
            reasoning: reasoning_trail(&hits, score),
        }
    }

    /// Scores every incident, preserving input order.
    pub fn score_all(&self, incidents: &[Incident]) -> Vec<ScoredIncident> {
        incidents.iter().map(|i| self.score(i)).collect()
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}

/// Formats `"Base:5 + Elderly:2 + Rescue:3 = 10"`.
fn reasoning_trail(hits: &[RuleHit], total: u32) -> String {
    let terms: Vec<String> = hits
        .iter()
        .map(|h| format!("{}:{}", h.label, h.points))
        .collect();
    format!("{} = {}", terms.join(" + "), total)
}
