//! Resolution Pipeline
//!
//! Bundles the four graph analyses into one result for the evaluation
//! scheduler: evaluation order, cycle information, parent lookups, and
//! transitive descendant sets.
//!
//! Every call recomputes from scratch over the supplied snapshot. Dashboards
//! hold at most tens of variables, so a full rebuild on every edit is
//! cheaper than any incremental bookkeeping would be to maintain.

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::error::CycleError;
use crate::variables::{ReferenceScanner, Variable};

use super::{
    build_dependency_graph, detect_cycle, invert_graph, topological_sort,
    transitive_descendants, DependencyGraph, ParentGraph,
};

/// Aggregate of all dependency analyses for one variable snapshot.
///
/// Consumed by the evaluation scheduler: iterate `order` to evaluate, check
/// `has_cycle` before auto-evaluating, use `parent_graph` for "what does X
/// need" and `transitive_descendants` for "what must re-run when X changes".
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Topological evaluation order. Partial when a cycle exists: only the
    /// nodes outside the cycle(s), still in valid dependency order.
    pub order: Vec<String>,

    /// Forward graph: producer → its direct consumers.
    pub graph: DependencyGraph,

    /// Inverse graph: consumer → its direct producers.
    pub parent_graph: ParentGraph,

    /// Downstream closure per node, excluding the node itself. Cycle members
    /// have no entry.
    pub transitive_descendants: IndexMap<String, IndexSet<String>>,

    /// Authoritative cycle flag, derived from the sorter's count mismatch.
    pub has_cycle: bool,

    /// One representative cycle in forward-edge order, when the detector
    /// found one.
    pub cycle_nodes: Option<Vec<String>>,
}

/// Run the full resolution pipeline over a variable snapshot.
///
/// Pure apart from logging: same input, same output, nothing retained
/// between calls.
pub fn resolve(variables: &[Variable], scanner: &impl ReferenceScanner) -> Resolution {
    let graph = build_dependency_graph(variables, scanner);
    debug!(
        variables = variables.len(),
        nodes = graph.len(),
        "built variable dependency graph"
    );

    let cycle = detect_cycle(&graph);
    let sorted = topological_sort(&graph);
    if sorted.has_cycle {
        warn!(cycle = ?cycle.cycle_path, "variable dependency graph contains a cycle");
    }

    let parent_graph = invert_graph(&graph);
    let descendants = transitive_descendants(&sorted.order, &graph);

    Resolution {
        order: sorted.order,
        graph,
        parent_graph,
        transitive_descendants: descendants,
        has_cycle: sorted.has_cycle,
        cycle_nodes: cycle.cycle_path,
    }
}

impl Resolution {
    /// Direct producers of `name`: the variables it needs values for before
    /// it can run. `None` for unknown names.
    pub fn parents_of(&self, name: &str) -> Option<&IndexSet<String>> {
        self.parent_graph.get(name)
    }

    /// Full downstream closure of `name`. `None` for unknown names and for
    /// cycle members, which callers treat as "recompute everything".
    pub fn descendants_of(&self, name: &str) -> Option<&IndexSet<String>> {
        self.transitive_descendants.get(name)
    }

    /// The changed variable plus everything downstream of it, in evaluation
    /// order. Empty when the variable is unknown or sits inside a cycle.
    pub fn cascade_order(&self, name: &str) -> Vec<&str> {
        let Some(descendants) = self.transitive_descendants.get(name) else {
            return Vec::new();
        };

        self.order
            .iter()
            .filter(|candidate| {
                candidate.as_str() == name || descendants.contains(candidate.as_str())
            })
            .map(String::as_str)
            .collect()
    }

    /// Save-time validation gate: `Err` with the offending variables when
    /// the graph has a cycle.
    ///
    /// Prefers the detector's representative path; if the path walk
    /// dead-ended, falls back to every node the sorter could not emit, so
    /// the diagnostic always names the offenders.
    pub fn ensure_acyclic(&self) -> Result<(), CycleError> {
        if !self.has_cycle {
            return Ok(());
        }

        let nodes = match &self.cycle_nodes {
            Some(nodes) => nodes.clone(),
            None => self
                .graph
                .keys()
                .filter(|node| !self.order.contains(node))
                .cloned()
                .collect(),
        };

        Err(CycleError::new(nodes))
    }
}
