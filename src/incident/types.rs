//! Incident value types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of help an incident asks for.
///
/// Any free-text label can be normalised with [`NeedType::parse`];
/// unrecognised labels become [`NeedType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum NeedType {
    Rescue,
    Supply,
    Info,
    Medical,
    #[default]
    Other,
}

impl NeedType {
    /// Normalises a free-text need label (case-insensitive, alias-aware).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_rescue::incident::NeedType;
    ///
    /// assert_eq!(NeedType::parse(" rescue "), NeedType::Rescue);
    /// assert_eq!(NeedType::parse("Medicine/Insulin"), NeedType::Medical);
    /// assert_eq!(NeedType::parse("Relocation"), NeedType::Other);
    /// ```
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "rescue" | "evacuation" | "trapped" => Self::Rescue,
            "supply" | "supplies" | "food" | "water" | "shelter" => Self::Supply,
            "info" | "information" => Self::Info,
            "medical" | "medicine" | "medicine/insulin" | "insulin" | "medication" => {
                Self::Medical
            }
            _ => Self::Other,
        }
    }

    /// Canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rescue => "Rescue",
            Self::Supply => "Supply",
            Self::Info => "Info",
            Self::Medical => "Medical",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for NeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for NeedType {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<NeedType> for String {
    fn from(need: NeedType) -> Self {
        need.as_str().to_string()
    }
}

/// A single reported crisis event at a location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Incident {
    /// Where help is needed. Locations are compared after trimming.
    pub location: String,
    /// Free-text report.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Number of people reported affected.
    #[cfg_attr(feature = "serde", serde(default))]
    pub people_affected: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub need_type: NeedType,
    /// Optional free-text age details, e.g. "Including 2 children under 5".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub age_info: Option<String>,
}

impl Incident {
    /// Creates an incident without age details.
    pub fn new(
        location: impl Into<String>,
        description: impl Into<String>,
        people_affected: u32,
        need_type: NeedType,
    ) -> Self {
        Self {
            location: location.into(),
            description: description.into(),
            people_affected,
            need_type,
            age_info: None,
        }
    }

    /// Attaches age details.
    pub fn with_age_info(mut self, age_info: impl Into<String>) -> Self {
        self.age_info = Some(age_info.into());
        self
    }

    /// The location key used for routing.
    pub fn location_key(&self) -> &str {
        self.location.trim()
    }
}

/// An incident together with its deterministic priority score.
///
/// Produced only by the scorer; re-scoring yields a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredIncident {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub incident: Incident,
    pub score: u32,
    /// Every rule that fired, in evaluation order, e.g.
    /// `"Base:5 + Elderly:2 + Rescue:3 = 10"`.
    pub reasoning: String,
}

impl ScoredIncident {
    pub fn location_key(&self) -> &str {
        self.incident.location_key()
    }
}
