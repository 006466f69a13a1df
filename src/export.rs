//! Tabular export of scored incidents and routes.

use std::io;

use crate::graph::TravelTimeGraph;
use crate::incident::ScoredIncident;
use crate::planner::RoutePlan;

fn csv_writer<W: io::Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

/// Column names of [`write_csv`], in order.
pub const SCORED_INCIDENT_COLUMNS: [&str; 6] = [
    "location",
    "description",
    "people_affected",
    "need_type",
    "score",
    "reasoning",
];

/// Writes one CSV row per scored incident, preceded by a header.
///
/// Every incident appears exactly once, whether or not its location is on
/// the chosen route.
///
/// # Examples
///
/// ```
/// use u_rescue::export::write_csv;
/// use u_rescue::incident::{Incident, NeedType};
/// use u_rescue::scoring::Scorer;
///
/// let scored = Scorer::default().score_all(&[
///     Incident::new("Gampaha", "Diabetic patient needs insulin", 1, NeedType::Medical),
/// ]);
/// let mut out = Vec::new();
/// write_csv(&mut out, &scored).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("location,description,people_affected,need_type,score,reasoning\n"));
/// ```
pub fn write_csv<W: io::Write>(writer: W, scored: &[ScoredIncident]) -> csv::Result<()> {
    let mut w = csv_writer(writer);
    w.write_record(SCORED_INCIDENT_COLUMNS)?;
    for s in scored {
        let inc = &s.incident;
        let people = inc.people_affected.to_string();
        let score = s.score.to_string();
        w.write_record([
            inc.location.as_str(),
            inc.description.as_str(),
            people.as_str(),
            inc.need_type.as_str(),
            score.as_str(),
            s.reasoning.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// One leg of a route, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    /// 1-based stop number.
    pub stop: usize,
    pub from: String,
    pub to: String,
    pub minutes: u32,
    pub cumulative_minutes: u64,
}

/// Breaks the plan's route into legs with running totals.
///
/// `graph` should be the graph the plan was built with; the last
/// cumulative value then equals the plan's estimated total time.
pub fn route_legs(plan: &RoutePlan, start: &str, graph: &TravelTimeGraph<'_>) -> Vec<RouteLeg> {
    let mut legs = Vec::with_capacity(plan.ordered_locations().len());
    let mut from = start.trim();
    let mut cumulative = 0u64;

    for (i, to) in plan.ordered_locations().iter().enumerate() {
        let minutes = graph.duration(from, to);
        cumulative += u64::from(minutes);
        legs.push(RouteLeg {
            stop: i + 1,
            from: from.to_string(),
            to: to.clone(),
            minutes,
            cumulative_minutes: cumulative,
        });
        from = to.as_str();
    }
    legs
}

/// Writes route legs as CSV (`stop,from,to,minutes,cumulative_minutes`).
pub fn write_route_csv<W: io::Write>(writer: W, legs: &[RouteLeg]) -> csv::Result<()> {
    let mut w = csv_writer(writer);
    w.write_record(["stop", "from", "to", "minutes", "cumulative_minutes"])?;
    for leg in legs {
        w.write_record([
            leg.stop.to_string(),
            leg.from.clone(),
            leg.to.clone(),
            leg.minutes.to_string(),
            leg.cumulative_minutes.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
