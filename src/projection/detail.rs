use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::ontology::{
    Class, Filler, Individual, Iri, Ontology, Property, PropertyAssertion, Restriction,
};

/// Flat, display-ready record describing a single entity.
///
/// The distinguished keys `label`, `iri` and `type` are always present;
/// `comment` and the per-variant aggregate keys appear only when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DetailRecord {
    fields: BTreeMap<String, String>,
}

impl DetailRecord {
    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.fields.insert(key.to_string(), value.into());
    }

    fn insert_nonempty(&mut self, key: &str, value: String) {
        if !value.is_empty() {
            self.fields.insert(key.to_string(), value);
        }
    }

    /// Returns the value stored under the given attribute name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns all attributes in alphabetical order.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// Errors raised while resolving an entity.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DetailError {
    /// No class, individual or property carries the requested identifier.
    #[error("no entity found for `{identifier}`")]
    EntityNotFound { identifier: String },
}

/// Resolves an entity identifier into its [`DetailRecord`].
///
/// Lookup scans classes first, then individuals, then properties; the first
/// match wins. A miss is the distinct [`DetailError::EntityNotFound`].
pub fn resolve(ontology: &Ontology, identifier: &str) -> Result<DetailRecord, DetailError> {
    let not_found = || DetailError::EntityNotFound {
        identifier: identifier.to_string(),
    };
    let Ok(iri) = Iri::new(identifier) else {
        return Err(not_found());
    };

    if let Some(class) = ontology.class(&iri) {
        return Ok(class_record(ontology, class));
    }
    if let Some(individual) = ontology.individual(&iri) {
        return Ok(individual_record(ontology, individual));
    }
    if let Some(property) = ontology.property(&iri) {
        return Ok(property_record(property));
    }
    Err(not_found())
}

fn class_record(ontology: &Ontology, class: &Class) -> DetailRecord {
    let mut record = DetailRecord::default();
    record.insert("label", class.display_label());
    record.insert("iri", class.id().as_str());
    record.insert("type", "Class");
    if let Some(comment) = class.comment() {
        record.insert("comment", comment);
    }

    record.insert_nonempty("Parents", readable_iri_list(class.named_parents()));
    record.insert_nonempty(
        "Restrictions",
        join_clauses(class.restrictions().map(readable_restriction)),
    );
    record.insert_nonempty(
        "Subclasses",
        readable_iri_list(ontology.subclasses_of(class.id()).map(Class::id)),
    );

    let outgoing = ontology
        .properties()
        .values()
        .filter(|property| property.domains().contains(class.id()))
        .map(|property| {
            format!(
                "{} → {}",
                property.display_label(),
                readable_iri_list(property.ranges().iter())
            )
        });
    record.insert_nonempty("Outgoing Properties", join_clauses(outgoing));

    let incoming = ontology
        .properties()
        .values()
        .filter(|property| property.ranges().contains(class.id()))
        .map(|property| {
            format!(
                "{} → {}",
                readable_iri_list(property.domains().iter()),
                property.display_label()
            )
        });
    record.insert_nonempty("Incoming Properties", join_clauses(incoming));

    record
}

fn individual_record(ontology: &Ontology, individual: &Individual) -> DetailRecord {
    let mut record = DetailRecord::default();
    record.insert("label", individual.display_label());
    record.insert("iri", individual.id().as_str());
    record.insert("type", "Individual");
    if let Some(comment) = individual.comment() {
        record.insert("comment", comment);
    }

    record.insert_nonempty("Types", readable_iri_list(individual.types().iter()));

    let values = individual.properties().iter().map(|(property, assertions)| {
        let name = ontology
            .property(property)
            .map_or_else(|| property.local_name().to_string(), |p| p.display_label().to_string());
        let rendered: Vec<String> = assertions.iter().map(readable_assertion).collect();
        format!("{name}: {}", rendered.join(", "))
    });
    record.insert_nonempty("Property Values", join_clauses(values));

    record
}

fn property_record(property: &Property) -> DetailRecord {
    let mut record = DetailRecord::default();
    record.insert("label", property.display_label());
    record.insert("iri", property.id().as_str());
    record.insert("type", "Property");
    if let Some(comment) = property.comment() {
        record.insert("comment", comment);
    }

    record.insert("Kind", property.kind().as_str());
    record.insert_nonempty("Domain", readable_iri_list(property.domains().iter()));
    record.insert_nonempty("Range", readable_iri_list(property.ranges().iter()));

    record
}

/// Renders an optional filler value, with `"None"` for the absent case.
#[must_use]
pub fn readable(value: Option<&Filler>) -> String {
    match value {
        None => "None".to_string(),
        Some(filler) => readable_filler(filler),
    }
}

fn readable_filler(filler: &Filler) -> String {
    match filler {
        Filler::Named(iri) => iri.local_name().to_string(),
        Filler::Literal(text) => text.clone(),
        Filler::List(items) => {
            let rendered: Vec<String> = items.iter().map(readable_filler).collect();
            rendered.join(", ")
        }
        Filler::Restriction(restriction) => readable_restriction(restriction),
    }
}

/// Renders a restriction expression, e.g. `hasAction some ClearRubble`.
#[must_use]
pub fn readable_restriction(restriction: &Restriction) -> String {
    format!(
        "{} {} {}",
        restriction.property().local_name(),
        restriction.quantifier(),
        readable_filler(restriction.filler())
    )
}

fn readable_assertion(assertion: &PropertyAssertion) -> String {
    match assertion {
        PropertyAssertion::Individual(target) => target.local_name().to_string(),
        PropertyAssertion::Literal(text) => text.clone(),
    }
}

fn readable_iri_list<'a>(iris: impl Iterator<Item = &'a Iri>) -> String {
    let rendered: Vec<&str> = iris.map(Iri::local_name).collect();
    rendered.join(", ")
}

fn join_clauses(clauses: impl Iterator<Item = String>) -> String {
    let rendered: Vec<String> = clauses.collect();
    rendered.join("; ")
}

#[cfg(test)]
mod tests {
    use super::{readable, readable_restriction, resolve, DetailError};
    use crate::ontology::{
        Class, Filler, Individual, Iri, Ontology, Property, PropertyAssertion, PropertyKind,
        Quantifier, Restriction,
    };

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    fn sample() -> Ontology {
        let mut ontology = Ontology::new(iri("https://example.org/onto"));
        let dog = iri("https://example.org/Dog");
        let person = iri("https://example.org/Person");

        let mut dog_class = Class::new(dog.clone());
        dog_class.add_parent(iri("https://example.org/Animal"));
        dog_class.add_comment("Best friend");
        ontology.add_class(dog_class).expect("dog");
        ontology
            .add_class(Class::new(person.clone()))
            .expect("person");

        let mut owner = Property::new(iri("https://example.org/hasOwner"), PropertyKind::Object);
        owner.add_domain(dog.clone());
        owner.add_range(person.clone());
        ontology.add_property(owner).expect("owner");

        let mut feeds = Property::new(iri("https://example.org/feeds"), PropertyKind::Object);
        feeds.add_domain(person.clone());
        feeds.add_range(dog.clone());
        ontology.add_property(feeds).expect("feeds");

        let mut walks = Property::new(iri("https://example.org/walksWith"), PropertyKind::Object);
        walks.add_domain(person);
        walks.add_range(dog.clone());
        ontology.add_property(walks).expect("walks");

        let mut rex = Individual::new(iri("https://example.org/rex"));
        rex.assert_type(dog);
        rex.add_property_assertion(
            iri("https://example.org/hasOwner"),
            PropertyAssertion::Individual(iri("https://example.org/alice")),
        );
        ontology.add_individual(rex).expect("rex");

        let mut stray = Individual::new(iri("https://example.org/stray"));
        stray.assert_type(iri("https://example.org/Dog"));
        ontology.add_individual(stray).expect("stray");

        ontology
    }

    #[test]
    fn unknown_identifier_is_a_distinct_miss() {
        let err = resolve(&sample(), "https://example.org/nope").expect_err("miss");
        assert!(matches!(err, DetailError::EntityNotFound { .. }));
        let err = resolve(&sample(), "not an iri at all").expect_err("miss");
        assert!(matches!(err, DetailError::EntityNotFound { .. }));
    }

    #[test]
    fn class_records_aggregate_property_relations() {
        let record = resolve(&sample(), "https://example.org/Dog").expect("record");
        assert_eq!(record.get("label"), Some("Dog"));
        assert_eq!(record.get("type"), Some("Class"));
        assert_eq!(record.get("comment"), Some("Best friend"));
        assert_eq!(record.get("Parents"), Some("Animal"));
        assert_eq!(
            record.get("Outgoing Properties"),
            Some("hasOwner → Person")
        );
        assert_eq!(
            record.get("Incoming Properties"),
            Some("Person → feeds; Person → walksWith")
        );
    }

    #[test]
    fn individual_records_aggregate_property_values() {
        let record = resolve(&sample(), "https://example.org/rex").expect("record");
        assert_eq!(record.get("type"), Some("Individual"));
        assert_eq!(record.get("Types"), Some("Dog"));
        assert_eq!(record.get("Property Values"), Some("hasOwner: alice"));
    }

    #[test]
    fn empty_aggregates_are_omitted_entirely() {
        let record = resolve(&sample(), "https://example.org/stray").expect("record");
        assert_eq!(record.get("Property Values"), None);

        let record = resolve(&sample(), "https://example.org/Person").expect("record");
        assert_eq!(record.get("Parents"), None);
        assert_eq!(record.get("Restrictions"), None);
        assert!(record.get("Outgoing Properties").is_some());
        assert!(record.get("Incoming Properties").is_some());
    }

    #[test]
    fn property_records_carry_kind_domain_and_range() {
        let record = resolve(&sample(), "https://example.org/hasOwner").expect("record");
        assert_eq!(record.get("type"), Some("Property"));
        assert_eq!(record.get("Kind"), Some("object"));
        assert_eq!(record.get("Domain"), Some("Dog"));
        assert_eq!(record.get("Range"), Some("Person"));
    }

    #[test]
    fn readable_handles_the_whole_value_space() {
        assert_eq!(readable(None), "None");

        let list = Filler::List(vec![
            Filler::Named(iri("https://example.org/Foo")),
            Filler::Named(iri("https://example.org/Bar")),
        ]);
        assert_eq!(readable(Some(&list)), "Foo, Bar");

        let restriction = Restriction::new(
            iri("https://example.org/hasAction"),
            Quantifier::Some,
            Filler::Named(iri("https://example.org/ClearRubble")),
        );
        assert_eq!(
            readable_restriction(&restriction),
            "hasAction some ClearRubble"
        );

        let nested = Restriction::new(
            iri("https://example.org/hasPart"),
            Quantifier::Only,
            Filler::Restriction(Box::new(restriction)),
        );
        assert_eq!(
            readable_restriction(&nested),
            "hasPart only hasAction some ClearRubble"
        );
    }
}
