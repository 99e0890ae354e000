//! Cycle Detection
//!
//! Depth-first search over the forward graph using the classic three-color
//! scheme: white = unvisited, gray = on the current recursion stack,
//! black = finished. Meeting a gray neighbor confirms a cycle.
//!
//! # Path reconstruction
//!
//! When a cycle is confirmed, a representative path is rebuilt by walking
//! backward from the cycle-closing node, repeatedly asking "which gray node
//! has an edge into me" against the forward graph. No parent-pointer stack
//! is kept during the traversal, so the reported path is best-effort
//! illustrative: it names nodes that are on a cycle, but is not guaranteed
//! to retrace the exact traversal that triggered detection.
//!
//! The authoritative cycle flag for a resolution comes from the topological
//! sorter's count mismatch; this detector exists to name the offenders for
//! diagnostics.

use indexmap::IndexMap;
use smallvec::SmallVec;

use super::DependencyGraph;

/// Outcome of a cycle scan over the forward graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleCheck {
    /// Whether the traversal met a back edge.
    pub has_cycle: bool,

    /// One representative cycle, in forward-edge order. `None` when the
    /// graph is acyclic.
    pub cycle_path: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Traversal state threaded through the recursion.
///
/// Kept as an explicit object so no state outlives a single `detect_cycle`
/// call.
struct Traversal<'g> {
    graph: &'g DependencyGraph,
    colors: IndexMap<&'g str, Color>,
}

/// Scan the graph for a cycle.
///
/// Self-referencing nodes (`graph[n]` contains `n`) are reported as cycles
/// of length 1. Returns `has_cycle = false` and no path for acyclic graphs.
pub fn detect_cycle(graph: &DependencyGraph) -> CycleCheck {
    let mut traversal = Traversal {
        graph,
        colors: graph.keys().map(|node| (node.as_str(), Color::White)).collect(),
    };

    for node in graph.keys() {
        if traversal.colors.get(node.as_str()) == Some(&Color::White) {
            if let Some(path) = traversal.visit(node) {
                return CycleCheck {
                    has_cycle: true,
                    cycle_path: Some(path),
                };
            }
        }
    }

    CycleCheck {
        has_cycle: false,
        cycle_path: None,
    }
}

impl<'g> Traversal<'g> {
    fn visit(&mut self, node: &'g str) -> Option<Vec<String>> {
        self.colors.insert(node, Color::Gray);

        let graph = self.graph;
        if let Some(children) = graph.get(node) {
            for child in children {
                match self.colors.get(child.as_str()).copied() {
                    Some(Color::Gray) => {
                        // Back edge: `node` closes a cycle through `child`.
                        return Some(self.reconstruct(child, node));
                    }
                    Some(Color::White) => {
                        if let Some(path) = self.visit(child) {
                            return Some(path);
                        }
                    }
                    _ => {}
                }
            }
        }

        self.colors.insert(node, Color::Black);
        None
    }

    /// Rebuild one illustrative cycle from `end` back to `start` via
    /// incoming-edge lookup. Only gray nodes qualify as predecessors; if the
    /// walk dead-ends the partial path is returned as-is.
    fn reconstruct(&self, start: &str, end: &str) -> Vec<String> {
        let mut path: SmallVec<[&str; 8]> = SmallVec::new();
        path.push(end);

        let mut current = end;
        while current != start {
            let predecessor = self.graph.iter().find(|(candidate, children)| {
                self.colors.get(candidate.as_str()) == Some(&Color::Gray)
                    && children.contains(current)
                    && !path.contains(&candidate.as_str())
            });

            match predecessor {
                Some((candidate, _)) => {
                    path.push(candidate.as_str());
                    current = candidate;
                }
                None => break,
            }
        }

        path.reverse();
        path.into_iter().map(str::to_string).collect()
    }
}
