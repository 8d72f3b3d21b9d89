use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Metric entry of a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricConfig {
    pub id: String,
    pub label: String,
}

/// Category entry of a catalog file; `path` lists metric ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub id: String,

    /// Defaults to the id
    #[serde(default)]
    pub label: Option<String>,

    pub path: Vec<String>,
}

/// Leaderboard catalog as written in `catalog.yaml`
///
/// ```yaml
/// metrics:
///   - { id: cost, label: G }
///   - { id: cycles, label: C }
/// categories:
///   - { id: GC, path: [cost, cycles] }
/// entities:
///   - Three Sided Symmetry
/// ```
///
/// Metric order is the order of the `metrics` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub metrics: Vec<MetricConfig>,

    #[serde(default)]
    pub categories: Vec<CategoryConfig>,

    /// Names users can resolve (puzzles, games)
    #[serde(default)]
    pub entities: Vec<String>,
}

impl CatalogConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a catalog file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }
}
