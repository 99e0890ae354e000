//! Topological Ordering
//!
//! Kahn's algorithm over the forward graph. Nodes with no unresolved
//! producers are emitted first; each emission relaxes its children.
//!
//! The pass doubles as the authoritative cycle check: if the queue drains
//! before every node was emitted, the unemitted remainder must contain a
//! cycle. That count mismatch is more reliable than any reconstructed path,
//! so resolutions derive their `has_cycle` flag from here.
//!
//! # Determinism
//!
//! The in-degree map and the initial queue are seeded in declaration order,
//! and children relax in the order their references were discovered. Equal
//! inputs therefore produce byte-equal orders, regardless of hash seeds.

use std::collections::VecDeque;

use indexmap::IndexMap;

use super::DependencyGraph;

/// Result of a Kahn's-algorithm pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoSort {
    /// Evaluation order: every producer before every consumer that depends
    /// on it. Under a cycle this holds only the nodes outside the cycle(s).
    pub order: Vec<String>,

    /// Whether some nodes could not be emitted.
    pub has_cycle: bool,
}

/// Order the graph's nodes so producers precede consumers.
pub fn topological_sort(graph: &DependencyGraph) -> TopoSort {
    // Node universe and in-degrees. Children of a well-formed graph are
    // always keys too, but hand-built graphs may omit them; count both so
    // the function stands alone.
    let mut in_degree: IndexMap<&str, usize> = IndexMap::new();
    for (node, children) in graph {
        in_degree.entry(node.as_str()).or_insert(0);
        for child in children {
            *in_degree.entry(child.as_str()).or_insert(0) += 1;
        }
    }

    let mut queue: VecDeque<&str> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(node, _)| *node)
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());
    while let Some(node) = queue.pop_front() {
        order.push(node.to_string());

        if let Some(children) = graph.get(node) {
            for child in children {
                if let Some(degree) = in_degree.get_mut(child.as_str()) {
                    *degree = degree.saturating_sub(1);
                    if *degree == 0 {
                        queue.push_back(child.as_str());
                    }
                }
            }
        }
    }

    let has_cycle = order.len() < in_degree.len();
    TopoSort { order, has_cycle }
}
