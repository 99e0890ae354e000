//! Reference Scanner
//!
//! The engine never parses query text itself. Whether a query references a
//! variable is answered by an external collaborator, the [`ReferenceScanner`],
//! which encapsulates whatever templating syntax the dashboard uses
//! (`$name`, `{{.name}}`, `[[name]]`, ...).
//!
//! The trait is blanket-implemented for closures, so callers can hand the
//! engine their templating engine's matcher directly:
//!
//! ```rust,ignore
//! let scanner = |query: &str, name: &str| query.contains(&format!("${name}"));
//! let resolution = resolve(&variables, &scanner);
//! ```

/// Answers whether a query text references a variable by name.
///
/// Implementations must be pure and total: no side effects, and callable
/// once per (consumer, producer) pair without memoization assumptions on the
/// engine's side.
pub trait ReferenceScanner {
    /// Whether `query_text` contains a reference to the variable `name`.
    fn references(&self, query_text: &str, name: &str) -> bool;
}

impl<F> ReferenceScanner for F
where
    F: Fn(&str, &str) -> bool,
{
    fn references(&self, query_text: &str, name: &str) -> bool {
        self(query_text, name)
    }
}
