//! Optional free-text narration from an external provider.
//!
//! A [`Narrator`] may attach display text (for example a language model's
//! step-by-step commentary) to each incident. Narration is gathered
//! separately from the plan and joined only when a response is assembled;
//! scores and routes never read it.

use crate::incident::{Incident, ScoredIncident};

/// Produces display-only narration for an incident.
pub trait Narrator: Send + Sync {
    /// Returns narration text, or `None` when the provider has nothing to say
    /// or is unavailable.
    fn narrate(&self, incident: &Incident) -> Option<String>;
}

/// A narrator that never narrates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn narrate(&self, _incident: &Incident) -> Option<String> {
        None
    }
}

impl<F> Narrator for F
where
    F: Fn(&Incident) -> Option<String> + Send + Sync,
{
    fn narrate(&self, incident: &Incident) -> Option<String> {
        self(incident)
    }
}

/// Narration for each scored incident, index-aligned with `scored`.
pub fn narrate_all<N: Narrator + ?Sized>(
    narrator: &N,
    scored: &[ScoredIncident],
) -> Vec<Option<String>> {
    scored.iter().map(|s| narrator.narrate(&s.incident)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incident::NeedType;
    use crate::scoring::Scorer;

    #[test]
    fn test_silent_narrator() {
        let scored = Scorer::default().score_all(&[Incident::new("A", "", 0, NeedType::Other)]);
        assert_eq!(narrate_all(&SilentNarrator, &scored), vec![None]);
    }

    #[test]
    fn test_closure_narrator_is_index_aligned() {
        let scored = Scorer::default().score_all(&[
            Incident::new("A", "", 0, NeedType::Rescue),
            Incident::new("B", "", 0, NeedType::Other),
        ]);
        let narrator = |i: &Incident| {
            (i.need_type == NeedType::Rescue).then(|| format!("Send a boat to {}", i.location))
        };
        assert_eq!(
            narrate_all(&narrator, &scored),
            vec![Some("Send a boat to A".to_string()), None]
        );
    }
}
