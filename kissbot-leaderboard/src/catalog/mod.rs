//! Leaderboard catalog: metrics, categories and resolvable names.
//!
//! A catalog is validated once when it is built. Rendering code can then rely
//! on every category having a non-empty, unique metric path.

pub mod config;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use crate::core::{Category, Metric};
use crate::error::{LeaderboardError, Result};
use crate::tree::{build_tree, PathTree};

pub use config::{CatalogConfig, CategoryConfig, MetricConfig};

static INSTALLED: OnceLock<Catalog> = OnceLock::new();

/// Validated set of metrics and categories
#[derive(Debug, Clone)]
pub struct Catalog {
    metrics: Vec<Metric>,
    categories: Vec<Category>,
    entities: Vec<String>,
    reference: PathTree,
}

impl Catalog {
    /// Build a catalog, checking ids and paths
    pub fn new(metrics: Vec<Metric>, categories: Vec<Category>) -> Result<Self> {
        let mut metric_ids = HashSet::new();
        for metric in &metrics {
            if !metric_ids.insert(metric.id.as_str()) {
                return Err(LeaderboardError::DuplicateMetric(metric.id.clone()));
            }
        }

        let mut category_ids = HashSet::new();
        let mut paths: HashMap<&[Metric], &Category> = HashMap::new();
        for category in &categories {
            if !category_ids.insert(category.id()) {
                return Err(LeaderboardError::DuplicateCategory(category.id().to_string()));
            }
            if let Some(unknown) = category.metrics().iter().find(|m| !metrics.contains(m)) {
                return Err(LeaderboardError::UnknownMetric {
                    category: category.id().to_string(),
                    metric: unknown.id.clone(),
                });
            }
            if let Some(existing) = paths.insert(category.metrics(), category) {
                return Err(LeaderboardError::DuplicatePath {
                    first: existing.id().to_string(),
                    second: category.id().to_string(),
                    path: category.path_string(),
                });
            }
        }

        let reference = build_tree(&categories);
        tracing::debug!(
            "Built catalog with {} metrics and {} categories",
            metrics.len(),
            categories.len()
        );

        Ok(Self {
            metrics,
            categories,
            entities: Vec::new(),
            reference,
        })
    }

    /// Attach the names users resolve against
    pub fn with_entities(mut self, entities: Vec<String>) -> Self {
        self.entities = entities;
        self
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        let metrics: Vec<Metric> = config
            .metrics
            .into_iter()
            .enumerate()
            .map(|(order, m)| Metric::new(m.id, m.label, order))
            .collect();

        let categories = config
            .categories
            .into_iter()
            .map(|c| {
                let path = c
                    .path
                    .iter()
                    .map(|id| {
                        metrics.iter().find(|m| &m.id == id).cloned().ok_or_else(|| {
                            LeaderboardError::UnknownMetric {
                                category: c.id.clone(),
                                metric: id.clone(),
                            }
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let label = c.label.unwrap_or_else(|| c.id.clone());
                Category::new(c.id, label, path)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(metrics, categories)?.with_entities(config.entities))
    }

    /// Load and validate a catalog file (YAML, or JSON by extension)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_config(CatalogConfig::from_path(path)?)?;
        tracing::info!(
            "Loaded catalog {} ({} categories, {} entities)",
            path.display(),
            catalog.categories.len(),
            catalog.entities.len()
        );
        Ok(catalog)
    }

    /// Metrics in catalog order
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Categories in catalog order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn metric(&self, id: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Path tree of every category in the catalog
    pub fn reference_tree(&self) -> &PathTree {
        &self.reference
    }
}

/// Install the process-wide catalog
///
/// Fails if a catalog is already installed; the installed catalog is never
/// replaced.
pub fn install(catalog: Catalog) -> Result<&'static Catalog> {
    INSTALLED
        .set(catalog)
        .map_err(|_| LeaderboardError::CatalogAlreadyInstalled)?;
    let installed = installed().ok_or(LeaderboardError::CatalogAlreadyInstalled)?;
    tracing::info!(
        "Installed catalog with {} categories",
        installed.categories.len()
    );
    Ok(installed)
}

/// The process-wide catalog, once installed
pub fn installed() -> Option<&'static Catalog> {
    INSTALLED.get()
}
