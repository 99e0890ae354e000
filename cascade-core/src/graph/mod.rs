//! Dependency Graph Analyses
//!
//! This module implements the dependency resolution pipeline over dashboard
//! variables.
//!
//! # Overview
//!
//! The pipeline is a chain of small, pure passes:
//!
//! 1. Build the forward graph (producer → direct consumers) by scanning
//!    every variable's query text against every other variable's name.
//! 2. Detect cycles with a three-color DFS, naming one representative cycle
//!    for diagnostics.
//! 3. Topologically sort with Kahn's algorithm, which also yields the
//!    authoritative cycle flag from its count mismatch.
//! 4. Invert the graph so "what does X depend on" is an O(1) lookup.
//! 5. Fold the topological order in reverse into per-node transitive
//!    descendant sets for cascading invalidation.
//!
//! # Design Decisions
//!
//! 1. Everything is keyed by variable name and stored in insertion-ordered
//!    maps, so equal inputs produce equal outputs on every platform.
//!
//! 2. There is no incremental state: every resolution recomputes from a
//!    fresh snapshot. Dashboards hold tens of variables at most.
//!
//! 3. A cycle is a first-class result, not an error. The sorter still emits
//!    the acyclic remainder so the rest of the dashboard stays usable.

mod builder;
mod cycle;
mod descendants;
mod resolution;
mod topo;

pub use builder::{build_dependency_graph, invert_graph, DependencyGraph, ParentGraph};
pub use cycle::{detect_cycle, CycleCheck};
pub use descendants::transitive_descendants;
pub use resolution::{resolve, Resolution};
pub use topo::{topological_sort, TopoSort};
