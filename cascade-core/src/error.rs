//! Error Types

use thiserror::Error;

/// A dependency cycle between dashboard variables.
///
/// Cycles are an expected outcome of user editing, not a programming error,
/// so the engine reports them through result values. This type exists for
/// callers that want a hard gate (refusing to save a variable, blocking
/// auto-evaluation) with a user-facing message naming the offenders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("circular dependency detected between variables: {}", .nodes.join(" → "))]
pub struct CycleError {
    nodes: Vec<String>,
}

impl CycleError {
    /// Build an error from the variables on the cycle, in walk order.
    pub fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    /// The variables involved in the cycle.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}
