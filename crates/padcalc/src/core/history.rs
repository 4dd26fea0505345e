//! Calculation history
//!
//! An append-only log of completed evaluations. Entries are never reordered,
//! edited or removed; the log lives for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// One completed evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The equation as it was accumulated
    pub equation: String,
    /// The formatted result shown on the display
    pub result: String,
    /// When the evaluation happened (Unix epoch millis)
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates a new history entry stamped with the current time
    #[must_use]
    pub fn new(equation: impl Into<String>, result: impl Into<String>) -> Self {
        Self::with_timestamp(equation, result, Self::current_timestamp())
    }

    /// Creates a history entry with a specific timestamp
    #[must_use]
    pub fn with_timestamp(
        equation: impl Into<String>,
        result: impl Into<String>,
        timestamp: u64,
    ) -> Self {
        Self {
            equation: equation.into(),
            result: result.into(),
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Renders the record as `"<equation> = <result>"`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.equation, self.result)
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.equation, self.result)
    }
}

/// Append-only, unbounded history log
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Appends a completed evaluation and returns the stored record
    pub fn record(&mut self, equation: &str, result: &str) -> &HistoryEntry {
        self.entries.push(HistoryEntry::new(equation, result));
        &self.entries[self.entries.len() - 1]
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been evaluated yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates entries newest first
    pub fn iter_rev(&self) -> std::iter::Rev<std::slice::Iter<'_, HistoryEntry>> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the last n entries (newest first)
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Returns the entries as a slice, oldest first
    #[must_use]
    pub fn as_slice(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Renders every record on its own line, oldest first
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
