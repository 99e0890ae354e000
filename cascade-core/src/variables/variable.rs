//! Variable Definitions
//!
//! This module defines the dashboard variable model that the resolution
//! engine operates on.
//!
//! A variable is a named value that can be substituted into queries. Some
//! variables are themselves derived from a query, and that query text may
//! mention other variables by name. Those mentions are what the dependency
//! graph is built from.
//!
//! The serde model mirrors the dashboard JSON payload shape (`type`,
//! `queryValue`), so definitions can be deserialized straight from a stored
//! dashboard.

use serde::{Deserialize, Serialize};

/// The kind of a dashboard variable.
///
/// Only `Query` variables can reference other variables: their query text is
/// scanned for mentions. The remaining kinds hold user-supplied values and
/// never consume, though any kind can be referenced (produced against).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VariableKind {
    /// Derived from a query executed against a backend.
    Query,

    /// A fixed, user-defined list of values.
    Custom,

    /// Free-form text entered by the user.
    Textbox,

    /// Populated dynamically from an attribute source.
    Dynamic,
}

impl VariableKind {
    /// Whether variables of this kind can reference other variables.
    pub fn can_reference(&self) -> bool {
        matches!(self, VariableKind::Query)
    }
}

/// A dashboard variable definition.
///
/// Variables are owned by a dashboard and handed to the engine as an
/// immutable snapshot. A variable with an empty `name` is skipped entirely
/// by the graph builder and never appears in any analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Name used to reference this variable from query text.
    /// Unique within a dashboard; may be empty for a half-edited definition.
    #[serde(default)]
    pub name: String,

    /// What kind of variable this is.
    #[serde(rename = "type")]
    pub kind: VariableKind,

    /// Free-text query; only meaningful for `Query` variables.
    #[serde(rename = "queryValue", default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Human-readable description shown in the dashboard settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Opaque identity assigned by the owning dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Variable {
    /// Create a query-derived variable.
    pub fn query(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Query,
            query: Some(query.into()),
            description: None,
            id: None,
        }
    }

    /// Create a custom (fixed value list) variable.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Custom,
            query: None,
            description: None,
            id: None,
        }
    }

    /// Create a textbox variable.
    pub fn textbox(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Textbox,
            query: None,
            description: None,
            id: None,
        }
    }

    /// Create a dynamic variable.
    pub fn dynamic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Dynamic,
            query: None,
            description: None,
            id: None,
        }
    }

    /// Whether this variable has a usable name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Query text to scan for references, if this variable can consume
    /// others. Returns `None` for non-query kinds and for query variables
    /// with no query text yet.
    pub fn scannable_query(&self) -> Option<&str> {
        if self.kind.can_reference() {
            self.query.as_deref()
        } else {
            None
        }
    }

    /// Deserialize a variable definition from dashboard JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize this definition back to dashboard JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
