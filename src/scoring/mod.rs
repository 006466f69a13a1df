//! Deterministic incident scoring.
//!
//! Every incident starts at a base score and collects fixed bonuses from a
//! short ordered list of boolean rules:
//!
//! 1. **Base** (+5): always.
//! 2. **Elderly / Child** (+2): the description or age info indicates
//!    elderly or child victims.
//! 3. **Rescue** (+3): the need type is `Rescue`.
//! 4. **Medical** (+1): the need type is `Medical`, or the description
//!    names a medical need.
//!
//! The fired rules are rendered as a reasoning trail such as
//! `"Base:5 + Elderly:2 + Rescue:3 = 10"`, so anyone can recompute a score
//! by hand from the incident text.
//!
//! The number of people affected is not part of the rule set.

mod config;
mod engine;
mod rules;
mod types;

pub use config::ScoringConfig;
pub use engine::Scorer;
pub use types::{RuleHit, ScoringRule};
