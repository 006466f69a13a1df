//! The fixed rule set.
//!
//! | Order | Rule       | Points | Fires when                                           |
//! |-------|------------|--------|------------------------------------------------------|
//! | 1     | `Base`     | 5      | always                                               |
//! | 2     | `Elderly`/`Child` | 2 | vulnerable keyword or stated age (> 60, < 5)         |
//! | 3     | `Rescue`   | 3      | need type is `Rescue`                                |
//! | 4     | `Medical`  | 1      | need type is `Medical` or text names a medical need  |

use super::config::ScoringConfig;
use super::types::ScoringRule;
use crate::incident::{Incident, NeedType};

/// Lowercase alphanumeric words of `text`.
fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

/// Units that turn a following `old` into part of an age phrase ("3-year-old").
const AGE_UNITS: [&str; 8] = [
    "year", "years", "yr", "yrs", "month", "months", "week", "weeks",
];

/// Whole-word vocabulary match. A word directly after an age unit is skipped,
/// so "5-year-old" is an age, not an elderly indicator.
fn mentions_any(text: &str, vocabulary: &[String]) -> bool {
    let mut prev: Option<String> = None;
    for w in words(text) {
        let after_unit = prev.as_deref().is_some_and(|p| AGE_UNITS.contains(&p));
        if !after_unit && vocabulary.iter().any(|k| *k == w) {
            return true;
        }
        prev = Some(w);
    }
    false
}

/// An age stated in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgeMention {
    Exact(u32),
    Under(u32),
    Over(u32),
}

/// Ages stated in free text. Only numbers next to an age cue count:
/// `aged 72`, `age 4`, `under 5`, `over 65`, `3 years`, `6-month-old`.
/// Headcounts such as "3 adults" are ignored.
fn age_mentions(text: &str) -> Vec<AgeMention> {
    let w: Vec<String> = words(text).collect();
    let mut found = Vec::new();

    for (i, word) in w.iter().enumerate() {
        let Ok(n) = word.parse::<u32>() else {
            continue;
        };
        let prev = i.checked_sub(1).map(|j| w[j].as_str());
        let next = w.get(i + 1).map(String::as_str);
        // "over 60 people" is a headcount, "over 60" or "over 60 years" an age
        let bound = next.is_none_or(|n| AGE_UNITS.contains(&n));

        let mention = match prev {
            Some("aged" | "age" | "ages") => Some(AgeMention::Exact(n)),
            Some("under" | "below") if bound => Some(AgeMention::Under(n)),
            Some("over" | "above") if bound => Some(AgeMention::Over(n)),
            _ => match next {
                Some("year" | "years" | "yr" | "yrs" | "yo") => Some(AgeMention::Exact(n)),
                Some("month" | "months" | "week" | "weeks") => Some(AgeMention::Exact(0)),
                _ => None,
            },
        };
        found.extend(mention);
    }
    found
}

/// Ages stated by an incident: cued numbers in the description and age info,
/// plus the age info itself when it is a bare number (`Age: 72`).
fn stated_ages(incident: &Incident) -> Vec<AgeMention> {
    let mut ages = age_mentions(&incident.description);
    if let Some(info) = incident.age_info.as_deref() {
        match info.trim().parse::<u32>() {
            Ok(n) => ages.push(AgeMention::Exact(n)),
            Err(_) => ages.extend(age_mentions(info)),
        }
    }
    ages
}

pub(crate) struct Base {
    points: u32,
}

impl ScoringRule for Base {
    fn name(&self) -> &str {
        "Base"
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn check(&self, _incident: &Incident) -> Option<&str> {
        Some("Base")
    }
}

pub(crate) struct VulnerableVictims {
    points: u32,
    elderly: Vec<String>,
    children: Vec<String>,
    elderly_over: u32,
    child_under: u32,
}

fn incident_mentions(incident: &Incident, vocabulary: &[String]) -> bool {
    mentions_any(&incident.description, vocabulary)
        || incident
            .age_info
            .as_deref()
            .is_some_and(|info| mentions_any(info, vocabulary))
}

impl VulnerableVictims {
    fn is_elderly(&self, incident: &Incident, ages: &[AgeMention]) -> bool {
        incident_mentions(incident, &self.elderly)
            || ages.iter().any(|a| match *a {
                AgeMention::Exact(n) => n > self.elderly_over,
                AgeMention::Over(n) => n >= self.elderly_over,
                AgeMention::Under(_) => false,
            })
    }

    fn is_child(&self, incident: &Incident, ages: &[AgeMention]) -> bool {
        incident_mentions(incident, &self.children)
            || ages.iter().any(|a| match *a {
                AgeMention::Exact(n) => n < self.child_under,
                AgeMention::Under(n) => n <= self.child_under,
                AgeMention::Over(_) => false,
            })
    }
}

impl ScoringRule for VulnerableVictims {
    fn name(&self) -> &str {
        "Vulnerable"
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn check(&self, incident: &Incident) -> Option<&str> {
        let ages = stated_ages(incident);
        if self.is_elderly(incident, &ages) {
            Some("Elderly")
        } else if self.is_child(incident, &ages) {
            Some("Child")
        } else {
            None
        }
    }
}

pub(crate) struct RescueNeed {
    points: u32,
}

impl ScoringRule for RescueNeed {
    fn name(&self) -> &str {
        "Rescue"
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn check(&self, incident: &Incident) -> Option<&str> {
        (incident.need_type == NeedType::Rescue).then_some("Rescue")
    }
}

pub(crate) struct MedicalNeed {
    points: u32,
    vocabulary: Vec<String>,
}

impl ScoringRule for MedicalNeed {
    fn name(&self) -> &str {
        "Medical"
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn check(&self, incident: &Incident) -> Option<&str> {
        let fired = incident.need_type == NeedType::Medical
            || mentions_any(&incident.description, &self.vocabulary);
        fired.then_some("Medical")
    }
}

/// Builds the rule list in evaluation order.
pub(crate) fn standard_rules(config: &ScoringConfig) -> Vec<Box<dyn ScoringRule>> {
    vec![
        Box::new(Base {
            points: config.base_score,
        }),
        Box::new(VulnerableVictims {
            points: config.vulnerable_bonus,
            elderly: config.elderly_keywords.clone(),
            children: config.child_keywords.clone(),
            elderly_over: config.elderly_age_over,
            child_under: config.child_age_under,
        }),
        Box::new(RescueNeed {
            points: config.rescue_bonus,
        }),
        Box::new(MedicalNeed {
            points: config.medical_bonus,
            vocabulary: config.medical_keywords.clone(),
        }),
    ]
}
