use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::core::Metric;
use crate::error::{LeaderboardError, Result};

/// One ranking axis: an ordered, non-empty path of metrics plus its label
///
/// The last metric of the path is the distinguishing one; shorter prefixes are
/// shared with other categories (`G` and `GC` both start with cost).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    id: String,
    label: String,
    metrics: Vec<Metric>,
}

impl Category {
    /// Create a category, rejecting an empty metric path
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        metrics: Vec<Metric>,
    ) -> Result<Self> {
        let id = id.into();
        if metrics.is_empty() {
            return Err(LeaderboardError::EmptyPath(id));
        }
        Ok(Self {
            id,
            label: label.into(),
            metrics,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Metric path, never empty
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// First metric of the path, the primary sort key
    pub fn primary(&self) -> &Metric {
        &self.metrics[0]
    }

    /// Comma-separated metric ids, used in error messages and logs
    pub fn path_string(&self) -> String {
        self.metrics
            .iter()
            .map(|m| m.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary()
            .cmp(other.primary())
            .then_with(|| self.metrics.cmp(&other.metrics))
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
