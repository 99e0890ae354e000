//! Cascade Core
//!
//! This crate provides the dependency resolution engine for dashboard
//! variables. It determines:
//!
//! - A safe evaluation order, so a variable is only resolved after every
//!   variable it references has been resolved
//! - Whether the reference graph contains a cycle, which makes evaluation
//!   impossible
//! - Which variables must be re-evaluated, transitively, when a variable's
//!   value changes
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - `variables`: The variable model and the reference-scanner boundary
//! - `graph`: Graph construction and the four analyses (cycle detection,
//!   topological ordering, inversion, transitive descendants)
//!
//! Query execution, value caching, and evaluation triggering belong to the
//! caller; this engine answers *what* must run, in *what order*.
//!
//! # Example
//!
//! ```rust,ignore
//! use cascade_core::{resolve, Variable};
//!
//! let variables = vec![
//!     Variable::custom("region"),
//!     Variable::query("service", "SELECT service WHERE region = $region"),
//! ];
//!
//! // Reference detection is supplied by the caller's templating layer.
//! let scanner = |query: &str, name: &str| query.contains(&format!("${name}"));
//!
//! let resolution = resolve(&variables, &scanner);
//! assert_eq!(resolution.order, ["region", "service"]);
//! ```

pub mod error;
pub mod graph;
pub mod variables;

pub use error::CycleError;
pub use graph::{resolve, DependencyGraph, ParentGraph, Resolution};
pub use variables::{ReferenceScanner, Variable, VariableKind};
