use std::collections::BTreeSet;

use serde::Serialize;

use crate::ontology::{Iri, Ontology};

/// Category tag attached to every node handed to the rendering engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    Class,
    Property,
    Individual,
}

/// Relation kind carried on an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EdgeKind {
    #[serde(rename = "subClassOf")]
    SubClassOf,
    #[serde(rename = "instance_of")]
    InstanceOf,
    #[serde(rename = "domain")]
    Domain,
    #[serde(rename = "range")]
    Range,
}

/// A vertex of the projected graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    pub title: String,
    pub group: NodeGroup,
}

/// A typed relation between two vertices, identified by their IRIs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    pub title: EdgeKind,
}

/// Node/edge projection of an ontology for a force-directed consumer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

impl NetworkGraph {
    fn push_node(&mut self, seen: &mut BTreeSet<Iri>, id: &Iri, label: &str, group: NodeGroup) {
        // First emission wins; later emissions for the same IRI are no-ops.
        if !seen.insert(id.clone()) {
            return;
        }
        self.nodes.push(NetworkNode {
            id: id.as_str().to_string(),
            label: label.to_string(),
            title: id.as_str().to_string(),
            group,
        });
    }

    fn push_edge(&mut self, source: &Iri, target: &Iri, kind: EdgeKind) {
        self.edges.push(NetworkEdge {
            source: source.as_str().to_string(),
            target: target.as_str().to_string(),
            title: kind,
        });
    }
}

/// Projects the ontology into a deduplicated node/edge graph.
///
/// The top class never surfaces as a node and no edge may reference it.
/// Classes referenced from type assertions or subclass axioms without a
/// declaration of their own materialize on demand.
#[must_use]
pub fn project(ontology: &Ontology) -> NetworkGraph {
    let mut graph = NetworkGraph::default();
    let mut seen: BTreeSet<Iri> = BTreeSet::new();

    for (id, class) in ontology.classes() {
        if id.is_owl_thing() {
            continue;
        }
        graph.push_node(&mut seen, id, class.display_label(), NodeGroup::Class);
    }
    for (id, property) in ontology.properties() {
        graph.push_node(&mut seen, id, property.display_label(), NodeGroup::Property);
    }
    for (id, individual) in ontology.individuals() {
        graph.push_node(&mut seen, id, individual.display_label(), NodeGroup::Individual);
    }

    for (id, class) in ontology.classes() {
        if id.is_owl_thing() {
            continue;
        }
        for parent in class.named_parents() {
            if parent.is_owl_thing() {
                continue;
            }
            graph.push_node(&mut seen, parent, parent.local_name(), NodeGroup::Class);
            graph.push_edge(id, parent, EdgeKind::SubClassOf);
        }
    }

    for (id, individual) in ontology.individuals() {
        for class in individual.types() {
            if class.is_owl_thing() {
                continue;
            }
            graph.push_node(&mut seen, class, class.local_name(), NodeGroup::Class);
            graph.push_edge(id, class, EdgeKind::InstanceOf);
        }
    }

    for (id, property) in ontology.properties() {
        for class in property.domains() {
            if class.is_owl_thing() {
                continue;
            }
            graph.push_edge(id, class, EdgeKind::Domain);
        }
        for class in property.ranges() {
            if class.is_owl_thing() {
                continue;
            }
            graph.push_edge(id, class, EdgeKind::Range);
        }
    }

    graph
}
