//! Line-oriented incident ingestion.
//!
//! Each non-blank line describes one incident:
//!
//! ```text
//! Location: Ja-Ela | Description: 5 elderly people trapped on roof | People: 5 | Need: Rescue
//! ```
//!
//! Keys are case-insensitive and may appear in any order. `Age:` is
//! optional. Lines starting with `#` are comments. A malformed line is
//! reported and skipped; the rest of the batch still parses.

use tracing::warn;

use crate::error::ValidationError;
use crate::incident::{Incident, NeedType};

/// Outcome of parsing a batch: every good incident plus every line error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub incidents: Vec<Incident>,
    pub errors: Vec<ValidationError>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parses one line. `line_no` is 1-based and only used in errors.
///
/// # Examples
///
/// ```
/// use u_rescue::incident::NeedType;
/// use u_rescue::ingest::parse_line;
///
/// let inc = parse_line("Location: Gampaha | People: 1 | Need: medicine", 1).unwrap();
/// assert_eq!(inc.location, "Gampaha");
/// assert_eq!(inc.need_type, NeedType::Medical);
/// ```
pub fn parse_line(line: &str, line_no: usize) -> Result<Incident, ValidationError> {
    let mut location = None;
    let mut description = None;
    let mut people = None;
    let mut need = None;
    let mut age = None;

    for segment in line.split('|') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let Some((key, value)) = segment.split_once(':') else {
            return Err(ValidationError::MalformedLine {
                line: line_no,
                reason: format!("segment {segment:?} has no key"),
            });
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "location" => location = Some(value),
            "description" => description = Some(value),
            "people" => people = Some(value),
            "need" => need = Some(value),
            "age" => age = Some(value),
            // unknown keys are tolerated
            _ => {}
        }
    }

    let location = match location {
        Some(l) if !l.is_empty() => l,
        _ => {
            return Err(ValidationError::MalformedLine {
                line: line_no,
                reason: "missing location".to_string(),
            })
        }
    };

    let people_affected = match people {
        None | Some("") => 0,
        Some(p) => p
            .parse::<u32>()
            .map_err(|_| ValidationError::InvalidPeopleCount {
                line: line_no,
                value: p.to_string(),
            })?,
    };

    let mut incident = Incident::new(
        location,
        description.unwrap_or_default(),
        people_affected,
        NeedType::parse(need.unwrap_or_default()),
    );
    if let Some(a) = age.filter(|a| !a.is_empty()) {
        incident = incident.with_age_info(a);
    }
    Ok(incident)
}

/// Parses a whole batch, collecting errors per line.
pub fn parse_batch(text: &str) -> IngestReport {
    let mut report = IngestReport::default();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line, i + 1) {
            Ok(incident) => report.incidents.push(incident),
            Err(e) => {
                warn!(line = i + 1, error = %e, "skipping malformed incident line");
                report.errors.push(e);
            }
        }
    }
    report
}
