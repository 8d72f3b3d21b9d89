use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Atomic scoring dimension (cost, cycles, area, ...)
///
/// Metrics are ordered by their catalog position, falling back to the id so
/// that the ordering stays total even for hand-built values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Metric {
    /// Stable identifier used by catalog files
    pub id: String,

    /// Short label shown in leaderboard embeds
    pub label: String,

    /// Position in the catalog
    #[serde(default)]
    pub order: usize,
}

impl Metric {
    pub fn new(id: impl Into<String>, label: impl Into<String>, order: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            order,
        }
    }
}

impl Ord for Metric {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order
            .cmp(&other.order)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for Metric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
