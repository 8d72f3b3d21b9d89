//! Metric path trees built from category sets.
//!
//! Every category contributes its metric path; shared prefixes share nodes and
//! the node a path ends on is tagged with the category. Children keep
//! first-insertion order so rendering is deterministic.

pub mod collapse;

use crate::core::{Category, Metric};

pub use collapse::{collapse, collapse_and_format, is_fully_present};

/// One node of a [`PathTree`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathNode {
    children: Vec<(Metric, PathNode)>,
    tag: Option<Category>,
}

impl PathNode {
    /// Children in first-insertion order
    pub fn children(&self) -> &[(Metric, PathNode)] {
        &self.children
    }

    pub fn child(&self, metric: &Metric) -> Option<&PathNode> {
        self.children
            .iter()
            .find(|(key, _)| key == metric)
            .map(|(_, node)| node)
    }

    /// Category whose path ends here, if any
    pub fn tag(&self) -> Option<&Category> {
        self.tag.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn child_or_insert(&mut self, metric: &Metric) -> &mut PathNode {
        let index = match self.children.iter().position(|(key, _)| key == metric) {
            Some(index) => index,
            None => {
                self.children.push((metric.clone(), PathNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }
}

/// Tree of category metric paths; the root carries no metric
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    root: PathNode,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &PathNode {
        &self.root
    }

    /// True when no category has been inserted
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Node reached by following `path` from the root
    pub fn node(&self, path: &[Metric]) -> Option<&PathNode> {
        path.iter()
            .try_fold(&self.root, |node, metric| node.child(metric))
    }

    /// Insert a category's path, tagging its terminal node
    pub fn insert(&mut self, category: &Category) {
        let mut node = &mut self.root;
        for metric in category.metrics() {
            node = node.child_or_insert(metric);
        }
        if let Some(existing) = &node.tag {
            if existing != category {
                tracing::warn!(
                    "Category '{}' shares path [{}] with '{}', ignoring it",
                    category.id(),
                    category.path_string(),
                    existing.id()
                );
            }
        } else {
            node.tag = Some(category.clone());
        }
    }
}

/// Build a path tree from categories, in iteration order
pub fn build_tree<'a>(categories: impl IntoIterator<Item = &'a Category>) -> PathTree {
    let mut tree = PathTree::new();
    for category in categories {
        tree.insert(category);
    }
    tree
}
