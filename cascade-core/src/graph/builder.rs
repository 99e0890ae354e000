//! Graph Construction
//!
//! Builds the forward dependency graph from a snapshot of variable
//! definitions, and inverts it for parent lookups.
//!
//! The forward graph maps a producer to its direct consumers: if variable
//! `B`'s query text references `A`, then `B ∈ graph[A]`. The parent graph is
//! the structural inverse: `A ∈ parents[B]`.

use indexmap::{IndexMap, IndexSet};

use crate::variables::{ReferenceScanner, Variable};

/// Forward dependency graph: variable name → names of the variables whose
/// query text references it (its direct consumers).
///
/// Insertion order follows declaration order, which keeps every downstream
/// analysis deterministic.
pub type DependencyGraph = IndexMap<String, IndexSet<String>>;

/// Inverse graph: variable name → names of the variables it directly
/// references (its direct producers).
pub type ParentGraph = IndexMap<String, IndexSet<String>>;

/// Build the forward dependency graph for a list of variables.
///
/// Every named variable becomes a key, in declaration order, even when
/// nothing references it. Variables with an empty name are skipped entirely.
/// For every ordered (producer, consumer) pair where the consumer's query
/// text references the producer's name, the consumer is recorded as a child
/// of the producer.
///
/// Self-references are kept as-is; downstream analyses treat them as
/// one-node cycles. Child lists have set semantics, so scanning the same
/// pair twice cannot produce a duplicate edge.
pub fn build_dependency_graph(
    variables: &[Variable],
    scanner: &impl ReferenceScanner,
) -> DependencyGraph {
    let mut graph = DependencyGraph::new();

    for variable in variables {
        if variable.has_name() {
            graph.entry(variable.name.clone()).or_default();
        }
    }

    for producer in variables {
        if !producer.has_name() {
            continue;
        }
        for consumer in variables {
            if !consumer.has_name() {
                continue;
            }
            let Some(query) = consumer.scannable_query() else {
                continue;
            };
            if scanner.references(query, &producer.name) {
                if let Some(children) = graph.get_mut(&producer.name) {
                    children.insert(consumer.name.clone());
                }
            }
        }
    }

    graph
}

/// Invert a forward graph into a parent graph.
///
/// Every node of the input is seeded with an empty entry, so every known
/// variable has a deterministic (possibly empty) parent set. A cycle in the
/// input simply appears as a cycle in the output; no special handling.
pub fn invert_graph(graph: &DependencyGraph) -> ParentGraph {
    let mut parents = ParentGraph::new();

    for node in graph.keys() {
        parents.entry(node.clone()).or_default();
    }

    for (producer, consumers) in graph {
        for consumer in consumers {
            parents
                .entry(consumer.clone())
                .or_default()
                .insert(producer.clone());
        }
    }

    parents
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_scanner(query: &str, name: &str) -> bool {
        query.contains(&format!("${name}"))
    }

    #[test]
    fn every_named_variable_becomes_a_key() {
        let variables = vec![
            Variable::custom("region"),
            Variable::query("service", "SELECT service WHERE region = $region"),
            Variable::textbox("note"),
        ];

        let graph = build_dependency_graph(&variables, &contains_scanner);

        assert_eq!(graph.len(), 3);
        assert!(graph.contains_key("region"));
        assert!(graph.contains_key("service"));
        assert!(graph.contains_key("note"));
    }

    #[test]
    fn references_create_child_edges() {
        let variables = vec![
            Variable::custom("region"),
            Variable::query("service", "SELECT service WHERE region = $region"),
        ];

        let graph = build_dependency_graph(&variables, &contains_scanner);

        assert!(graph["region"].contains("service"));
        assert!(graph["service"].is_empty());
    }

    #[test]
    fn empty_names_are_skipped() {
        let variables = vec![
            Variable::custom(""),
            Variable::query("service", "SELECT $region"),
            Variable::custom("region"),
        ];

        let graph = build_dependency_graph(&variables, &contains_scanner);

        assert_eq!(graph.len(), 2);
        assert!(!graph.contains_key(""));
    }

    #[test]
    fn non_query_variables_never_consume() {
        let mut textbox = Variable::textbox("note");
        textbox.query = Some("mentions $region".to_string());

        let variables = vec![Variable::custom("region"), textbox];
        let graph = build_dependency_graph(&variables, &contains_scanner);

        assert!(graph["region"].is_empty());
    }

    #[test]
    fn self_reference_is_kept() {
        let variables = vec![Variable::query("s", "SELECT $s")];

        let graph = build_dependency_graph(&variables, &contains_scanner);

        assert!(graph["s"].contains("s"));
    }

    #[test]
    fn duplicate_scans_do_not_duplicate_edges() {
        // A scanner that always matches exercises the set semantics: every
        // pair is scanned once per producer occurrence, but the child set
        // stays deduplicated.
        let always = |_: &str, _: &str| true;
        let variables = vec![
            Variable::custom("a"),
            Variable::query("b", "whatever"),
            Variable::query("b", "whatever"),
        ];

        let graph = build_dependency_graph(&variables, &always);

        assert_eq!(graph["a"].len(), 1);
        assert!(graph["a"].contains("b"));
    }

    #[test]
    fn keys_follow_declaration_order() {
        let variables = vec![
            Variable::custom("z"),
            Variable::custom("a"),
            Variable::custom("m"),
        ];

        let graph = build_dependency_graph(&variables, &contains_scanner);
        let keys: Vec<_> = graph.keys().map(String::as_str).collect();

        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn inversion_mirrors_every_edge() {
        let variables = vec![
            Variable::custom("a"),
            Variable::query("b", "SELECT $a"),
            Variable::query("c", "SELECT $a, $b"),
        ];

        let graph = build_dependency_graph(&variables, &contains_scanner);
        let parents = invert_graph(&graph);

        assert!(parents["a"].is_empty());
        assert_eq!(
            parents["b"].iter().collect::<Vec<_>>(),
            ["a"]
        );
        assert!(parents["c"].contains("a"));
        assert!(parents["c"].contains("b"));

        // parents[c] contains p iff graph[p] contains c
        for (producer, consumers) in &graph {
            for consumer in consumers {
                assert!(parents[consumer].contains(producer));
            }
        }
        for (consumer, producers) in &parents {
            for producer in producers {
                assert!(graph[producer].contains(consumer));
            }
        }
    }

    #[test]
    fn inverting_twice_restores_edge_set() {
        let variables = vec![
            Variable::custom("a"),
            Variable::query("b", "SELECT $a"),
            Variable::query("c", "SELECT $b"),
        ];

        let graph = build_dependency_graph(&variables, &contains_scanner);
        let round_trip = invert_graph(&invert_graph(&graph));

        assert_eq!(graph, round_trip);
    }
}
