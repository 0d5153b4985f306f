use crate::models::{ResponseKind, VoteEntry};

/// Ordered collection of vote entries. Holds at most one entry per
/// `(date, voter_name)` pair; `upsert` keeps that invariant by removing
/// the stale entry before appending the replacement.
#[derive(Debug, Clone, Default)]
pub struct VoteStore {
    entries: Vec<VoteEntry>,
}

impl VoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a raw entry feed, applying the upsert
    /// invariant entry by entry so later duplicates win.
    pub fn from_entries(entries: Vec<VoteEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.upsert(entry.date, entry.voter_name, entry.response);
        }
        store
    }

    /// Records a vote, replacing any earlier vote by the same voter for
    /// the same date. The new entry always lands last.
    pub fn upsert(
        &mut self,
        date: impl Into<String>,
        voter_name: impl Into<String>,
        response: ResponseKind,
    ) {
        let date = date.into();
        let voter_name = voter_name.into();
        self.entries
            .retain(|entry| !(entry.date == date && entry.voter_name == voter_name));
        self.entries.push(VoteEntry {
            date,
            voter_name,
            response,
        });
    }

    pub fn entries(&self) -> &[VoteEntry] {
        &self.entries
    }

    /// All entries for one date, in store order.
    pub fn entries_for_date(&self, date: &str) -> Vec<&VoteEntry> {
        self.entries.iter().filter(|entry| entry.date == date).collect()
    }
}
