//! Route strategy evaluation.
//!
//! # Algorithm
//!
//! 1. Collapse scored incidents into distinct stops (first-seen order),
//!    each carrying the highest score reported at that location.
//! 2. For every strategy in [`ORDERINGS`], compute a total ordering of the
//!    stops. Each strategy is a sort or greedy walk, not a shortest-path
//!    search.
//! 3. Sum the travel time from the start location through the ordering.
//!
//! All ties resolve to input order.

use std::collections::HashMap;

use tracing::debug;

use super::types::{RouteCandidate, Strategy};
use crate::graph::TravelTimeGraph;
use crate::incident::ScoredIncident;

/// A distinct location to visit, with the highest score reported there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop<'a> {
    pub location: &'a str,
    pub priority: u32,
}

/// Orders stops, returning indices into the stop slice.
pub type OrderingFn = fn(&[Stop<'_>], &str, &TravelTimeGraph<'_>) -> Vec<usize>;

/// Strategy → ordering function, one row per [`Strategy::ALL`] entry.
pub const ORDERINGS: [(Strategy, OrderingFn); Strategy::ALL.len()] = [
    (Strategy::HighestPriorityFirst, ordering_for(Strategy::HighestPriorityFirst)),
    (Strategy::ClosestFirst, ordering_for(Strategy::ClosestFirst)),
    (Strategy::FurthestFirst, ordering_for(Strategy::FurthestFirst)),
];

/// The ordering function implementing `strategy`.
pub const fn ordering_for(strategy: Strategy) -> OrderingFn {
    match strategy {
        Strategy::HighestPriorityFirst => highest_priority_first,
        Strategy::ClosestFirst => closest_first,
        Strategy::FurthestFirst => furthest_first,
    }
}

/// Distinct locations in first-seen order, each with its maximum score.
pub fn distinct_stops(scored: &[ScoredIncident]) -> Vec<Stop<'_>> {
    let mut stops: Vec<Stop<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for s in scored {
        let loc = s.location_key();
        match index.get(loc).copied() {
            Some(i) => stops[i].priority = stops[i].priority.max(s.score),
            None => {
                index.insert(loc, stops.len());
                stops.push(Stop {
                    location: loc,
                    priority: s.score,
                });
            }
        }
    }
    stops
}

fn highest_priority_first(
    stops: &[Stop<'_>],
    _start: &str,
    _graph: &TravelTimeGraph<'_>,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..stops.len()).collect();
    // stable: equal priorities keep input order
    order.sort_by(|&a, &b| stops[b].priority.cmp(&stops[a].priority));
    order
}

fn closest_first(stops: &[Stop<'_>], start: &str, graph: &TravelTimeGraph<'_>) -> Vec<usize> {
    greedy_walk(stops, start, graph, |candidate, best| candidate < best)
}

fn furthest_first(stops: &[Stop<'_>], start: &str, graph: &TravelTimeGraph<'_>) -> Vec<usize> {
    greedy_walk(stops, start, graph, |candidate, best| candidate > best)
}

/// Greedy walk: from the current location, repeatedly move to the unvisited
/// stop for which `better(duration, best_so_far)` holds. Strict comparison
/// keeps the earliest stop on ties.
fn greedy_walk(
    stops: &[Stop<'_>],
    start: &str,
    graph: &TravelTimeGraph<'_>,
    better: fn(u32, u32) -> bool,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..stops.len()).collect();
    let mut order = Vec::with_capacity(stops.len());
    let mut current = start;

    while !remaining.is_empty() {
        let mut best_pos = 0;
        let mut best = graph.duration(current, stops[remaining[0]].location);

        for (pos, &i) in remaining.iter().enumerate().skip(1) {
            let d = graph.duration(current, stops[i].location);
            if better(d, best) {
                best = d;
                best_pos = pos;
            }
        }

        let next = remaining.remove(best_pos);
        current = stops[next].location;
        order.push(next);
    }
    order
}

/// Builds the candidate route for a single strategy.
pub fn evaluate_strategy(
    strategy: Strategy,
    stops: &[Stop<'_>],
    start: &str,
    graph: &TravelTimeGraph<'_>,
) -> RouteCandidate {
    let ordered_locations: Vec<String> = ordering_for(strategy)(stops, start, graph)
        .into_iter()
        .map(|i| stops[i].location.to_string())
        .collect();
    let total_time = graph.path_time(start, ordered_locations.as_slice());

    debug!(
        strategy = strategy.name(),
        stops = ordered_locations.len(),
        total_time,
        "route candidate evaluated"
    );

    RouteCandidate {
        strategy,
        ordered_locations,
        total_time,
        reasoning: strategy.intent().to_string(),
    }
}

/// Produces one candidate per strategy.
///
/// With no incidents, returns a single empty candidate with zero travel time.
///
/// # Examples
///
/// ```
/// use u_rescue::graph::{GraphConfig, TravelTable, TravelTimeGraph};
/// use u_rescue::incident::{Incident, NeedType};
/// use u_rescue::routing::evaluate;
/// use u_rescue::scoring::Scorer;
///
/// let table = TravelTable::from_entries([("Base", "A", 5), ("Base", "B", 15)]);
/// let graph = TravelTimeGraph::new(&table, &GraphConfig::default());
/// let scored = Scorer::default().score_all(&[
///     Incident::new("A", "", 0, NeedType::Other),
///     Incident::new("B", "", 0, NeedType::Rescue),
/// ]);
///
/// let candidates = evaluate(&scored, "Base", &graph);
/// assert_eq!(candidates.len(), 3);
/// assert_eq!(candidates[0].ordered_locations, vec!["B", "A"]);
/// ```
pub fn evaluate(
    scored: &[ScoredIncident],
    start: &str,
    graph: &TravelTimeGraph<'_>,
) -> Vec<RouteCandidate> {
    let stops = distinct_stops(scored);
    if stops.is_empty() {
        return vec![RouteCandidate {
            strategy: Strategy::HighestPriorityFirst,
            ordered_locations: Vec::new(),
            total_time: 0,
            reasoning: "No incidents to visit".to_string(),
        }];
    }

    ORDERINGS
        .iter()
        .map(|(strategy, _)| evaluate_strategy(*strategy, &stops, start, graph))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphConfig, TravelTable};
    use crate::incident::{Incident, NeedType};

    fn scored(loc: &str, score: u32) -> ScoredIncident {
        ScoredIncident {
            incident: Incident::new(loc, "", 0, NeedType::Other),
            score,
            reasoning: String::new(),
        }
    }

    fn table() -> TravelTable {
        TravelTable::from_entries([
            ("S", "A", 30),
            ("S", "B", 10),
            ("S", "C", 20),
            ("B", "A", 5),
            ("B", "C", 50),
            ("A", "C", 8),
            ("C", "A", 8),
            ("C", "B", 2),
            ("A", "B", 1),
        ])
    }

    fn candidate(cands: &[RouteCandidate], s: Strategy) -> &RouteCandidate {
        cands.iter().find(|c| c.strategy == s).unwrap()
    }

    #[test]
    fn test_distinct_stops_keep_max_score_and_first_seen_order() {
        let incidents = vec![scored("A", 6), scored("B", 7), scored(" A", 10)];
        let stops = distinct_stops(&incidents);
        assert_eq!(
            stops,
            vec![
                Stop {
                    location: "A",
                    priority: 10
                },
                Stop {
                    location: "B",
                    priority: 7
                },
            ]
        );
    }

    #[test]
    fn test_highest_priority_first_is_stable() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let incidents = vec![scored("A", 5), scored("B", 8), scored("C", 5)];
        let cands = evaluate(&incidents, "S", &graph);
        let c = candidate(&cands, Strategy::HighestPriorityFirst);
        assert_eq!(c.ordered_locations, vec!["B", "A", "C"]);
        // S->B 10, B->A 5, A->C 8
        assert_eq!(c.total_time, 23);
    }

    #[test]
    fn test_closest_first_nearest_neighbour() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let incidents = vec![scored("A", 5), scored("B", 5), scored("C", 5)];
        let cands = evaluate(&incidents, "S", &graph);
        let c = candidate(&cands, Strategy::ClosestFirst);
        // S: B(10) ; B: A(5) ; A: C(8)
        assert_eq!(c.ordered_locations, vec!["B", "A", "C"]);
        assert_eq!(c.total_time, 23);
    }

    #[test]
    fn test_furthest_first_farthest_neighbour() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let incidents = vec![scored("A", 5), scored("B", 5), scored("C", 5)];
        let cands = evaluate(&incidents, "S", &graph);
        let c = candidate(&cands, Strategy::FurthestFirst);
        // S: A(30) ; A: C(8) vs B(1) -> C ; C: B(2)
        assert_eq!(c.ordered_locations, vec!["A", "C", "B"]);
        assert_eq!(c.total_time, 40);
    }

    #[test]
    fn test_greedy_ties_break_by_input_order() {
        // unknown pairs all fall back to the same default
        let t = TravelTable::new();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let incidents = vec![scored("X", 5), scored("Y", 5), scored("Z", 5)];
        let cands = evaluate(&incidents, "S", &graph);
        for c in &cands {
            assert_eq!(c.ordered_locations, vec!["X", "Y", "Z"]);
            assert_eq!(c.total_time, 60);
        }
    }

    #[test]
    fn test_three_candidates_in_table_order() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let cands = evaluate(&[scored("A", 5)], "S", &graph);
        let strategies: Vec<Strategy> = cands.iter().map(|c| c.strategy).collect();
        assert_eq!(strategies, Strategy::ALL.to_vec());
    }

    #[test]
    fn test_each_strategy_labels_its_own_ordering() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let incidents = vec![scored("A", 9), scored("B", 5), scored("C", 5)];
        let stops = distinct_stops(&incidents);

        for (i, strategy) in Strategy::ALL.into_iter().enumerate() {
            assert_eq!(ORDERINGS[i].0, strategy);
            let c = evaluate_strategy(strategy, &stops, "S", &graph);
            assert_eq!(c.strategy, strategy);
        }
        // the three orderings differ on this table
        let hpf = evaluate_strategy(Strategy::HighestPriorityFirst, &stops, "S", &graph);
        let closest = evaluate_strategy(Strategy::ClosestFirst, &stops, "S", &graph);
        let furthest = evaluate_strategy(Strategy::FurthestFirst, &stops, "S", &graph);
        assert_eq!(hpf.ordered_locations, vec!["A", "B", "C"]);
        assert_eq!(closest.ordered_locations, vec!["B", "A", "C"]);
        assert_eq!(furthest.ordered_locations, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_empty_input_gives_single_trivial_candidate() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let cands = evaluate(&[], "S", &graph);
        assert_eq!(cands.len(), 1);
        assert!(cands[0].is_empty());
        assert_eq!(cands[0].total_time, 0);
    }

    #[test]
    fn test_reasoning_names_intent() {
        let t = table();
        let graph = TravelTimeGraph::new(&t, &GraphConfig::default());
        let cands = evaluate(&[scored("A", 5)], "S", &graph);
        assert_eq!(
            candidate(&cands, Strategy::HighestPriorityFirst).reasoning,
            "Prioritize highest-scoring incidents to save most lives"
        );
    }
}
