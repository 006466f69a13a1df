//! Scoring configuration.
//!
//! [`ScoringConfig`] holds the point values and keyword vocabularies used by
//! the fixed rule set. Changing it changes scores, so it is part of what an
//! auditor needs to reproduce a result.

/// Configuration for the incident [`Scorer`](super::Scorer).
///
/// # Defaults
///
/// ```
/// use u_rescue::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.base_score, 5);
/// assert_eq!(config.vulnerable_bonus, 2);
/// assert_eq!(config.rescue_bonus, 3);
/// assert_eq!(config.medical_bonus, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_rescue::scoring::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_child_keywords(["child", "children", "infant", "newborn"])
///     .with_medical_keywords(["insulin", "oxygen"]);
/// assert!(config.child_keywords.contains(&"newborn".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Points every incident starts with.
    pub base_score: u32,

    /// Added once when elderly or child victims are indicated.
    pub vulnerable_bonus: u32,

    /// Added once when the need type is `Rescue`.
    pub rescue_bonus: u32,

    /// Added once when the need type is `Medical` or the text indicates a
    /// medical need.
    pub medical_bonus: u32,

    /// Words indicating elderly victims. Stored lowercase. Stated ages
    /// ("aged 72") are handled by the age thresholds, not by keywords.
    pub elderly_keywords: Vec<String>,

    /// Words indicating child victims. Stored lowercase.
    pub child_keywords: Vec<String>,

    /// Words indicating a medical need. Stored lowercase.
    pub medical_keywords: Vec<String>,

    /// An age in the incident's age info strictly above this is elderly.
    pub elderly_age_over: u32,

    /// An age in the incident's age info strictly below this is a young child.
    pub child_age_under: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 5,
            vulnerable_bonus: 2,
            rescue_bonus: 3,
            medical_bonus: 1,
            elderly_keywords: lowercase(["elderly", "elder", "old", "senior"]),
            child_keywords: lowercase([
                "child", "children", "infant", "infants", "baby", "babies", "toddler", "kid",
                "kids",
            ]),
            medical_keywords: lowercase([
                "medical",
                "medicine",
                "medication",
                "insulin",
                "diabetic",
                "injured",
                "injury",
                "wound",
                "wounded",
                "bleeding",
                "sick",
                "oxygen",
                "dialysis",
                "pregnant",
            ]),
            elderly_age_over: 60,
            child_age_under: 5,
        }
    }
}

impl ScoringConfig {
    /// Sets the base score.
    pub fn with_base_score(mut self, points: u32) -> Self {
        self.base_score = points;
        self
    }

    /// Sets the elderly/child bonus.
    pub fn with_vulnerable_bonus(mut self, points: u32) -> Self {
        self.vulnerable_bonus = points;
        self
    }

    /// Sets the rescue bonus.
    pub fn with_rescue_bonus(mut self, points: u32) -> Self {
        self.rescue_bonus = points;
        self
    }

    /// Sets the medical bonus.
    pub fn with_medical_bonus(mut self, points: u32) -> Self {
        self.medical_bonus = points;
        self
    }

    /// Replaces the elderly vocabulary.
    pub fn with_elderly_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.elderly_keywords = lowercase(words);
        self
    }

    /// Replaces the child vocabulary.
    pub fn with_child_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.child_keywords = lowercase(words);
        self
    }

    /// Replaces the medical vocabulary.
    pub fn with_medical_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.medical_keywords = lowercase(words);
        self
    }

    /// Sets the age thresholds used on age info (`> elderly_over`, `< child_under`).
    pub fn with_age_thresholds(mut self, elderly_over: u32, child_under: u32) -> Self {
        self.elderly_age_over = elderly_over;
        self.child_age_under = child_under;
        self
    }
}

fn lowercase<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_normalised() {
        let config = ScoringConfig::default().with_elderly_keywords([" Elderly ", "", "OLD"]);
        assert_eq!(config.elderly_keywords, vec!["elderly", "old"]);
    }

    #[test]
    fn test_default_vocabularies() {
        let config = ScoringConfig::default();
        assert_eq!(config.elderly_keywords, ["elderly", "elder", "old", "senior"]);
        assert_eq!(
            config.child_keywords,
            ["child", "children", "infant", "infants", "baby", "babies", "toddler", "kid", "kids"]
        );
        assert_eq!(
            config.medical_keywords,
            [
                "medical", "medicine", "medication", "insulin", "diabetic", "injured", "injury",
                "wound", "wounded", "bleeding", "sick", "oxygen", "dialysis", "pregnant",
            ]
        );
        assert!(!config.elderly_keywords.iter().any(|k| k == "aged"));
    }
}
