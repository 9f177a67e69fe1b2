//! Per-part performance summaries.

use serde::{Deserialize, Serialize};

/// Key performance numbers of one computed part, as a plain numeric mapping.
///
/// Keys are stable snake_case strings; values are SI numbers. The
/// presentation collaborator formats them — this structure never carries
/// formatted text. Insertion order is preserved for stable display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PartSummary {
    entries: Vec<(String, f64)>,
}

impl PartSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a metric. Later pushes with the same key shadow earlier ones
    /// in `get`, but both are retained in iteration order.
    pub fn push(&mut self, key: &str, value: f64) {
        self.entries.push((key.to_string(), value));
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
