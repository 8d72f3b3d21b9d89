//! Shortening of category listings.
//!
//! A record usually holds many categories at once. Instead of listing them all,
//! the record's categories are built into a [`PathTree`] and compared with the
//! tree of every category the puzzle supports. Any branch the record holds in
//! full is printed as one label.

use crate::core::{Category, Metric};
use crate::tree::{build_tree, PathNode, PathTree};

/// Collapse `actual` against `reference` and join the labels with `", "`
///
/// An empty category set yields an empty string; embed rendering substitutes
/// a zero-width space for it.
pub fn collapse_and_format<'a>(
    actual: impl IntoIterator<Item = &'a Category>,
    reference: &PathTree,
) -> String {
    collapse(actual, reference).join(", ")
}

/// Shortened labels for `actual`, in tree order
pub fn collapse<'a>(
    actual: impl IntoIterator<Item = &'a Category>,
    reference: &PathTree,
) -> Vec<String> {
    let tree = build_tree(actual);
    let mut labels = Vec::new();
    let mut path = Vec::new();
    for (metric, node) in tree.root().children() {
        walk(
            metric,
            node,
            reference.root().child(metric),
            &mut path,
            &mut labels,
        );
    }
    labels
}

/// Whether `actual` holds the whole subtree below `reference`
///
/// A reference leaf is held by an actual leaf tagged with the same category.
/// An internal node is decided by its children alone: the actual node must
/// have exactly the reference node's child metrics, each fully present in
/// turn. An untagged leaf is never fully present.
pub fn is_fully_present(actual: &PathNode, reference: &PathNode) -> bool {
    if reference.is_leaf() {
        return actual.is_leaf() && actual.tag().is_some() && actual.tag() == reference.tag();
    }
    actual.children().len() == reference.children().len()
        && reference.children().iter().all(|(metric, reference_child)| {
            actual
                .child(metric)
                .is_some_and(|child| is_fully_present(child, reference_child))
        })
}

fn walk<'t>(
    metric: &'t Metric,
    node: &'t PathNode,
    reference: Option<&PathNode>,
    path: &mut Vec<&'t Metric>,
    labels: &mut Vec<String>,
) {
    path.push(metric);

    if reference.is_some_and(|reference| is_fully_present(node, reference)) {
        let label = match node.tag() {
            Some(category) => category.label().to_string(),
            None => path.iter().map(|m| m.label.as_str()).collect(),
        };
        labels.push(label);
    } else {
        // A held category is always listed, even when its descendants are only
        // partially held.
        if let Some(category) = node.tag() {
            labels.push(category.label().to_string());
        }
        for (child_metric, child) in node.children() {
            walk(
                child_metric,
                child,
                reference.and_then(|reference| reference.child(child_metric)),
                path,
                labels,
            );
        }
    }

    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        cost: Metric,
        cycles: Metric,
        area: Metric,
        instructions: Metric,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                cost: Metric::new("cost", "G", 0),
                cycles: Metric::new("cycles", "C", 1),
                area: Metric::new("area", "A", 2),
                instructions: Metric::new("instructions", "I", 3),
            }
        }

        fn category(&self, label: &str, metrics: &[&Metric]) -> Category {
            Category::new(label, label, metrics.iter().map(|&m| m.clone()).collect()).unwrap()
        }
    }

    fn labels(categories: &[&Category], reference: &[Category]) -> String {
        collapse_and_format(categories.iter().copied(), &build_tree(reference))
    }

    #[test]
    fn test_full_set_collapses_per_top_level_branch() {
        let f = Fixture::new();
        let reference = vec![
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
            f.category("CG", &[&f.cycles, &f.cost]),
            f.category("CA", &[&f.cycles, &f.area]),
            f.category("I", &[&f.instructions]),
        ];
        let actual: Vec<&Category> = reference.iter().collect();
        assert_eq!(labels(&actual, &reference), "G, C, I");
    }

    #[test]
    fn test_single_leaf_uses_own_label() {
        let f = Fixture::new();
        let reference = vec![
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
        ];
        assert_eq!(labels(&[&reference[0]], &reference), "GC");
    }

    #[test]
    fn test_partial_branch_lists_children() {
        let f = Fixture::new();
        let reference = vec![
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
            f.category("CG", &[&f.cycles, &f.cost]),
            f.category("CA", &[&f.cycles, &f.area]),
        ];
        let actual = [&reference[0], &reference[1], &reference[2]];
        assert_eq!(labels(&actual, &reference), "G, CG");
    }

    #[test]
    fn test_deep_branch_uses_metric_labels() {
        let f = Fixture::new();
        let reference = vec![
            f.category("GCA", &[&f.cost, &f.cycles, &f.area]),
            f.category("GCI", &[&f.cost, &f.cycles, &f.instructions]),
            f.category("GA", &[&f.cost, &f.area]),
        ];
        let actual = [&reference[0], &reference[1]];
        assert_eq!(labels(&actual, &reference), "GC");
    }

    #[test]
    fn test_tagged_prefix() {
        let f = Fixture::new();
        let reference = vec![
            f.category("G", &[&f.cost]),
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
        ];
        let all: Vec<&Category> = reference.iter().collect();
        assert_eq!(labels(&all, &reference), "G");
    }

    #[test]
    fn test_branch_held_without_prefix_category() {
        let f = Fixture::new();
        let reference = vec![
            f.category("G", &[&f.cost]),
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
        ];
        assert_eq!(labels(&[&reference[1], &reference[2]], &reference), "G");
        assert_eq!(labels(&[&reference[1]], &reference), "GC");
    }

    #[test]
    fn test_prefix_category_with_partial_branch() {
        let f = Fixture::new();
        let reference = vec![
            f.category("G", &[&f.cost]),
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
        ];
        assert_eq!(labels(&[&reference[0], &reference[1]], &reference), "G, GC");
        assert_eq!(labels(&[&reference[0]], &reference), "G");
    }

    #[test]
    fn test_tagged_leaf_must_match_reference_leaf() {
        let f = Fixture::new();
        let reference = vec![f.category("GC", &[&f.cost, &f.cycles])];
        let other = f.category("GC2", &[&f.cost, &f.cycles]);
        assert_eq!(labels(&[&other], &reference), "GC2");
    }

    #[test]
    fn test_category_missing_from_reference() {
        let f = Fixture::new();
        let reference = vec![f.category("GC", &[&f.cost, &f.cycles])];
        let ci = f.category("CI", &[&f.cycles, &f.instructions]);
        assert_eq!(labels(&[&ci], &reference), "CI");
        assert_eq!(labels(&[&ci], &[]), "CI");
    }

    #[test]
    fn test_empty_actual() {
        let f = Fixture::new();
        let reference = vec![f.category("GC", &[&f.cost, &f.cycles])];
        assert_eq!(labels(&[], &reference), "");
        assert!(collapse(&Vec::<Category>::new(), &build_tree(&reference)).is_empty());
    }

    #[test]
    fn test_order_follows_actual() {
        let f = Fixture::new();
        let reference = vec![
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
            f.category("CG", &[&f.cycles, &f.cost]),
            f.category("CA", &[&f.cycles, &f.area]),
        ];
        let actual = [&reference[2], &reference[0]];
        assert_eq!(labels(&actual, &reference), "CG, GC");
    }

    #[test]
    fn test_deterministic() {
        let f = Fixture::new();
        let reference = vec![
            f.category("GC", &[&f.cost, &f.cycles]),
            f.category("GA", &[&f.cost, &f.area]),
            f.category("CA", &[&f.cycles, &f.area]),
        ];
        let tree = build_tree(&reference);
        let actual = [&reference[2], &reference[0], &reference[1]];
        let first = collapse(actual.iter().copied(), &tree);
        let second = collapse(actual.iter().copied(), &tree);
        assert_eq!(first, second);
        assert_eq!(first, vec!["C".to_string(), "G".to_string()]);
    }

    #[test]
    fn test_untagged_leaf_never_fully_present() {
        let untagged = PathNode::default();
        assert!(!is_fully_present(&untagged, &PathNode::default()));
    }
}
