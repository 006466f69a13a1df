//! Directed travel-time table and the built-in defaults.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Directed pairwise travel durations in minutes.
///
/// Asymmetric: `A -> B` and `B -> A` are independent entries.
/// Keyed as `from -> (to -> minutes)` so lookups borrow `&str`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelTable {
    entries: HashMap<String, HashMap<String, u32>>,
}

impl TravelTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(from, to, minutes)` triples. Later triples win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, u32)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (from, to, minutes) in entries {
            table.insert(from, to, minutes);
        }
        table
    }

    /// Sets the duration for `from -> to`, returning the previous value.
    pub fn insert(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        minutes: u32,
    ) -> Option<u32> {
        self.entries
            .entry(from.into())
            .or_default()
            .insert(to.into(), minutes)
    }

    /// Returns the explicit duration for `from -> to`, if any.
    pub fn get(&self, from: &str, to: &str) -> Option<u32> {
        self.entries.get(from)?.get(to).copied()
    }

    /// Number of directed pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Built-in travel times for the Gampaha district response area.
///
/// Initialised once on first use and never mutated afterwards; per-request
/// overrides are layered on top by [`TravelTimeGraph`](super::TravelTimeGraph).
pub static DEFAULT_TRAVEL_TABLE: Lazy<TravelTable> = Lazy::new(|| {
    TravelTable::from_entries([
        ("Ragama", "Ja-Ela", 10),
        ("Ja-Ela", "Gampaha", 40),
        ("Ragama", "Gampaha", 30),
    ])
});
