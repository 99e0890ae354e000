//! Transitive Descendants
//!
//! For every variable, the full set of variables downstream of it: the
//! consumers that must be re-evaluated, directly or indirectly, when its
//! value changes.
//!
//! The computation walks a topological order in reverse. By the time a node
//! is processed, every one of its children has already been processed, so
//! its closure is just the union of each child plus that child's closure.
//! One pass, no repeated traversals.

use indexmap::{IndexMap, IndexSet};

use super::DependencyGraph;

/// Compute the downstream closure of every node in `order`.
///
/// `order` must come from the topological sorter. Nodes excluded from it
/// (cycle members) get no descendant set; callers treat a missing entry as
/// "recompute everything", since a cycle already signals an unusable graph.
///
/// A node never appears in its own set unless a self-loop puts it there.
pub fn transitive_descendants(
    order: &[String],
    graph: &DependencyGraph,
) -> IndexMap<String, IndexSet<String>> {
    let mut descendants: IndexMap<String, IndexSet<String>> =
        IndexMap::with_capacity(order.len());

    for node in order.iter().rev() {
        let mut closure = IndexSet::new();
        if let Some(children) = graph.get(node.as_str()) {
            for child in children {
                closure.insert(child.clone());
                if let Some(below) = descendants.get(child.as_str()) {
                    closure.extend(below.iter().cloned());
                }
            }
        }
        descendants.insert(node.clone(), closure);
    }

    descendants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::topological_sort;

    fn graph_of(edges: &[(&str, &[&str])]) -> DependencyGraph {
        edges
            .iter()
            .map(|(node, children)| {
                (
                    node.to_string(),
                    children.iter().map(|c| c.to_string()).collect::<IndexSet<_>>(),
                )
            })
            .collect()
    }

    fn names(set: &IndexSet<String>) -> Vec<&str> {
        let mut names: Vec<_> = set.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn chain_closure_includes_indirect_consumers() {
        let graph = graph_of(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        let sorted = topological_sort(&graph);

        let descendants = transitive_descendants(&sorted.order, &graph);

        assert_eq!(names(&descendants["a"]), ["b", "c"]);
        assert_eq!(names(&descendants["b"]), ["c"]);
        assert!(descendants["c"].is_empty());
    }

    #[test]
    fn diamond_closure_counts_each_node_once() {
        let graph = graph_of(&[
            ("a", &["b", "c"]),
            ("b", &["d"]),
            ("c", &["d"]),
            ("d", &[]),
        ]);
        let sorted = topological_sort(&graph);

        let descendants = transitive_descendants(&sorted.order, &graph);

        assert_eq!(names(&descendants["a"]), ["b", "c", "d"]);
        assert_eq!(names(&descendants["b"]), ["d"]);
        assert_eq!(names(&descendants["c"]), ["d"]);
        assert!(descendants["d"].is_empty());
    }

    #[test]
    fn leaf_nodes_have_empty_closures() {
        let graph = graph_of(&[("a", &[]), ("b", &[])]);
        let sorted = topological_sort(&graph);

        let descendants = transitive_descendants(&sorted.order, &graph);

        assert!(descendants["a"].is_empty());
        assert!(descendants["b"].is_empty());
    }

    #[test]
    fn cycle_members_get_no_entry() {
        let graph = graph_of(&[("a", &["x"]), ("x", &["y"]), ("y", &["x"])]);
        let sorted = topological_sort(&graph);

        let descendants = transitive_descendants(&sorted.order, &graph);

        // Only "a" survived the sort; the cycle members are absent.
        assert!(descendants.contains_key("a"));
        assert!(!descendants.contains_key("x"));
        assert!(!descendants.contains_key("y"));
        // "a" still records its direct child, conservatively.
        assert!(descendants["a"].contains("x"));
    }

    #[test]
    fn node_is_not_its_own_descendant() {
        let graph = graph_of(&[("a", &["b"]), ("b", &[])]);
        let sorted = topological_sort(&graph);

        let descendants = transitive_descendants(&sorted.order, &graph);

        assert!(!descendants["a"].contains("a"));
        assert!(!descendants["b"].contains("b"));
    }
}
