use ontoview::ontology::{Class, Individual, Iri, Ontology, Property, PropertyKind, OWL_THING};
use ontoview::projection::{project, EdgeKind, NetworkGraph, NodeGroup};

fn iri(text: &str) -> Iri {
    Iri::new(text).expect("valid iri")
}

fn zoo() -> Ontology {
    let mut ontology = Ontology::new(iri("http://example.org/zoo"));
    let animal = iri("http://example.org/zoo#Animal");
    let dog = iri("http://example.org/zoo#Dog");
    let pet = iri("http://example.org/zoo#Pet");

    let mut animal_class = Class::new(animal.clone());
    animal_class.add_parent(Iri::owl_thing());
    ontology.add_class(animal_class).expect("animal");
    ontology.add_class(Class::new(pet.clone())).expect("pet");

    // Multiple inheritance: Dog specializes both Animal and Pet.
    let mut dog_class = Class::new(dog.clone());
    dog_class.add_parent(animal);
    dog_class.add_parent(pet);
    ontology.add_class(dog_class).expect("dog");

    let mut owner = Property::new(iri("http://example.org/zoo#hasOwner"), PropertyKind::Object);
    owner.add_domain(dog.clone());
    owner.add_range(iri("http://example.org/zoo#Person"));
    ontology.add_property(owner).expect("owner");

    let mut rex = Individual::new(iri("http://example.org/zoo#rex"));
    rex.assert_type(dog.clone());
    rex.assert_type(iri("http://example.org/zoo#Pet"));
    rex.assert_type(Iri::owl_thing());
    ontology.add_individual(rex).expect("rex");

    ontology
}

fn edge_count(graph: &NetworkGraph, source: &str, target: &str, kind: EdgeKind) -> usize {
    graph
        .edges
        .iter()
        .filter(|edge| {
            edge.source.ends_with(source) && edge.target.ends_with(target) && edge.title == kind
        })
        .count()
}

#[test]
fn every_entity_becomes_exactly_one_node() {
    let graph = project(&zoo());
    let mut ids: Vec<_> = graph.nodes.iter().map(|node| node.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before, "duplicate node ids in projection");
}

#[test]
fn multiple_inheritance_produces_one_edge_per_parent() {
    let graph = project(&zoo());
    assert_eq!(edge_count(&graph, "#Dog", "#Animal", EdgeKind::SubClassOf), 1);
    assert_eq!(edge_count(&graph, "#Dog", "#Pet", EdgeKind::SubClassOf), 1);
}

#[test]
fn multiply_asserted_types_stay_deduplicated() {
    let graph = project(&zoo());
    // rex is typed Dog and Pet; Pet already exists as a declared class node.
    assert_eq!(edge_count(&graph, "#rex", "#Dog", EdgeKind::InstanceOf), 1);
    assert_eq!(edge_count(&graph, "#rex", "#Pet", EdgeKind::InstanceOf), 1);
    let pet_nodes = graph
        .nodes
        .iter()
        .filter(|node| node.id.ends_with("#Pet"))
        .count();
    assert_eq!(pet_nodes, 1);
}

#[test]
fn the_top_class_never_reaches_the_consumer() {
    let graph = project(&zoo());
    assert!(graph.nodes.iter().all(|node| node.id != OWL_THING));
    assert!(graph
        .edges
        .iter()
        .all(|edge| edge.source != OWL_THING && edge.target != OWL_THING));
}

#[test]
fn undeclared_range_classes_do_not_break_domain_edges() {
    let graph = project(&zoo());
    assert_eq!(
        edge_count(&graph, "#hasOwner", "#Dog", EdgeKind::Domain),
        1
    );
    assert_eq!(
        edge_count(&graph, "#hasOwner", "#Person", EdgeKind::Range),
        1
    );
}

#[test]
fn asserted_types_materialize_missing_class_nodes() {
    let mut ontology = Ontology::new(iri("http://example.org/zoo"));
    let mut ghost = Individual::new(iri("http://example.org/zoo#ghost"));
    ghost.assert_type(iri("http://example.org/zoo#Phantom"));
    ontology.add_individual(ghost).expect("ghost");

    let graph = project(&ontology);
    let phantom = graph
        .nodes
        .iter()
        .find(|node| node.id.ends_with("#Phantom"))
        .expect("type class emitted on demand");
    assert_eq!(phantom.group, NodeGroup::Class);
    assert_eq!(edge_count(&graph, "#ghost", "#Phantom", EdgeKind::InstanceOf), 1);
}

#[test]
fn properties_without_domain_or_range_contribute_no_edges() {
    let mut ontology = Ontology::new(iri("http://example.org/zoo"));
    ontology
        .add_property(Property::new(
            iri("http://example.org/zoo#floating"),
            PropertyKind::Data,
        ))
        .expect("floating");

    let graph = project(&ontology);
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}
