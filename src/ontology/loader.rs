//! Line-oriented loader for uploaded ontology documents.
//!
//! The accepted format is a pragmatic Turtle/N-Triples subset: one triple per
//! line terminated by `.`, angle-bracketed IRIs, `prefix:name` terms expanded
//! through `@prefix` declarations (`rdf`, `rdfs`, `owl` and `xsd` are
//! predeclared), quoted literals with optional language tag or datatype, and
//! `_:name` blank nodes carrying `owl:Restriction` descriptions.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use super::entities::{
    Class, Filler, Individual, Ontology, OntologyError, Property, PropertyAssertion, PropertyKind,
    Quantifier, Restriction,
};
use super::value_objects::{Iri, IriError};

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
const OWL_ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";
const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
const OWL_HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";
const OWL_MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";
const OWL_MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";
const OWL_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";

const DEFAULT_ONTOLOGY_IRI: &str = "urn:ontoview:uploaded";

/// Errors raised while loading a document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The uploaded bytes were not valid UTF-8.
    #[error("document is not valid UTF-8")]
    Encoding,
    /// A line could not be parsed as a triple.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
    /// A term could not be resolved to a valid IRI.
    #[error("line {line}: invalid IRI `{value}`")]
    Iri { line: usize, value: String },
    /// A blank node claimed to be a restriction but lacked the required
    /// description, or restriction descriptions reference each other.
    #[error("restriction `_:{node}` is incomplete or cyclic")]
    UnresolvedRestriction { node: String },
    /// The assembled entities violated aggregate invariants.
    #[error(transparent)]
    Domain(#[from] OntologyError),
}

impl LoadError {
    fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Term {
    Iri(Iri),
    Blank(String),
    Literal(String),
}

#[derive(Clone, Debug)]
struct Statement {
    line: usize,
    subject: Term,
    predicate: Iri,
    object: Term,
}

#[derive(Default)]
struct ClassDraft {
    label: Option<String>,
    comments: Vec<String>,
    parents: Vec<Iri>,
    restrictions: Vec<Restriction>,
}

struct PropertyDraft {
    label: Option<String>,
    comments: Vec<String>,
    kind: PropertyKind,
    domains: Vec<Iri>,
    ranges: Vec<Iri>,
}

impl PropertyDraft {
    fn new(kind: PropertyKind) -> Self {
        Self {
            label: None,
            comments: Vec::new(),
            kind,
            domains: Vec::new(),
            ranges: Vec::new(),
        }
    }
}

#[derive(Default)]
struct IndividualDraft {
    label: Option<String>,
    comments: Vec<String>,
    types: Vec<Iri>,
    assertions: Vec<(Iri, PropertyAssertion)>,
}

/// Parses raw uploaded bytes into an [`Ontology`].
pub fn parse_bytes(bytes: &[u8]) -> Result<Ontology, LoadError> {
    let text = std::str::from_utf8(bytes).map_err(|_| LoadError::Encoding)?;
    parse_document(text)
}

/// Parses an ontology document into the domain aggregate.
pub fn parse_document(text: &str) -> Result<Ontology, LoadError> {
    let statements = scan(text)?;
    assemble(&statements)
}

fn scan(text: &str) -> Result<Vec<Statement>, LoadError> {
    let mut prefixes: BTreeMap<String, String> = BTreeMap::from([
        ("rdf".to_string(), RDF_NS.to_string()),
        ("rdfs".to_string(), RDFS_NS.to_string()),
        ("owl".to_string(), OWL_NS.to_string()),
        ("xsd".to_string(), XSD_NS.to_string()),
    ]);
    let mut statements = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("@prefix") {
            let (name, base) = parse_prefix(rest, line)?;
            prefixes.insert(name, base);
            continue;
        }

        let body = trimmed
            .strip_suffix('.')
            .ok_or_else(|| LoadError::syntax(line, "triple must end with `.`"))?
            .trim_end();

        let (subject_token, rest) = split_token(body)
            .ok_or_else(|| LoadError::syntax(line, "missing subject"))?;
        let (predicate_token, object_part) =
            split_token(rest).ok_or_else(|| LoadError::syntax(line, "missing predicate"))?;
        let object_part = object_part.trim();
        if object_part.is_empty() {
            return Err(LoadError::syntax(line, "missing object"));
        }

        let subject = parse_term(subject_token, &prefixes, line)?;
        if matches!(subject, Term::Literal(_)) {
            return Err(LoadError::syntax(line, "literal subject is not allowed"));
        }
        let predicate = match predicate_token {
            "a" => Iri::new(RDF_TYPE).expect("well-known IRI"),
            token => match parse_term(token, &prefixes, line)? {
                Term::Iri(iri) => iri,
                _ => return Err(LoadError::syntax(line, "predicate must be an IRI")),
            },
        };
        let object = parse_term(object_part, &prefixes, line)?;

        statements.push(Statement {
            line,
            subject,
            predicate,
            object,
        });
    }

    Ok(statements)
}

fn parse_prefix(rest: &str, line: usize) -> Result<(String, String), LoadError> {
    let rest = rest.trim().trim_end_matches('.').trim_end();
    let (name, base) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| LoadError::syntax(line, "malformed @prefix declaration"))?;
    let name = name
        .strip_suffix(':')
        .ok_or_else(|| LoadError::syntax(line, "prefix name must end with `:`"))?;
    let base = base.trim();
    let base = base
        .strip_prefix('<')
        .and_then(|value| value.strip_suffix('>'))
        .ok_or_else(|| LoadError::syntax(line, "prefix base must be bracketed"))?;
    Ok((name.to_string(), base.to_string()))
}

fn split_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest)),
        None => Some((input, "")),
    }
}

fn parse_term(
    token: &str,
    prefixes: &BTreeMap<String, String>,
    line: usize,
) -> Result<Term, LoadError> {
    if let Some(inner) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        let iri = Iri::new(inner).map_err(|err| invalid_iri(err, line))?;
        return Ok(Term::Iri(iri));
    }
    if let Some(name) = token.strip_prefix("_:") {
        return Ok(Term::Blank(name.to_string()));
    }
    if token.starts_with('"') {
        return Ok(Term::Literal(parse_literal(token, line)?));
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return Ok(Term::Literal(token.to_string()));
    }
    if let Some((prefix, name)) = token.split_once(':') {
        if let Some(base) = prefixes.get(prefix) {
            let iri = Iri::new(format!("{base}{name}")).map_err(|err| invalid_iri(err, line))?;
            return Ok(Term::Iri(iri));
        }
        // Unprefixed schemes such as urn: still form valid IRIs.
        if let Ok(iri) = Iri::new(token) {
            return Ok(Term::Iri(iri));
        }
    }
    Err(LoadError::syntax(line, format!("unrecognized term `{token}`")))
}

fn invalid_iri(err: IriError, line: usize) -> LoadError {
    let IriError::Invalid { value } = err;
    LoadError::Iri { line, value }
}

fn parse_literal(token: &str, line: usize) -> Result<String, LoadError> {
    let mut value = String::new();
    let mut escaped = false;
    for ch in token.chars().skip(1) {
        if escaped {
            match ch {
                'n' => value.push('\n'),
                't' => value.push('\t'),
                other => value.push(other),
            }
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            // Language tags and datatype suffixes are display-irrelevant.
            '"' => return Ok(value),
            other => value.push(other),
        }
    }
    Err(LoadError::syntax(line, "unterminated literal"))
}

fn assemble(statements: &[Statement]) -> Result<Ontology, LoadError> {
    let mut classes: BTreeMap<Iri, ClassDraft> = BTreeMap::new();
    let mut properties: BTreeMap<Iri, PropertyDraft> = BTreeMap::new();
    let mut individuals: BTreeMap<Iri, IndividualDraft> = BTreeMap::new();
    let mut blanks: BTreeMap<String, Vec<(&Iri, &Term)>> = BTreeMap::new();
    let mut ontology_id: Option<Iri> = None;
    let mut ontology_label: Option<String> = None;

    // Declarations first, so later passes can tell entity kinds apart.
    for statement in statements {
        match &statement.subject {
            Term::Blank(name) => {
                blanks
                    .entry(name.clone())
                    .or_default()
                    .push((&statement.predicate, &statement.object));
            }
            Term::Iri(subject) if statement.predicate.as_str() == RDF_TYPE => {
                let Term::Iri(object) = &statement.object else {
                    continue;
                };
                match object.as_str() {
                    OWL_CLASS => {
                        classes.entry(subject.clone()).or_default();
                    }
                    OWL_OBJECT_PROPERTY => {
                        properties
                            .entry(subject.clone())
                            .or_insert_with(|| PropertyDraft::new(PropertyKind::Object));
                    }
                    OWL_DATATYPE_PROPERTY => {
                        properties
                            .entry(subject.clone())
                            .or_insert_with(|| PropertyDraft::new(PropertyKind::Data));
                    }
                    OWL_NAMED_INDIVIDUAL => {
                        individuals.entry(subject.clone()).or_default();
                    }
                    OWL_ONTOLOGY => ontology_id = Some(subject.clone()),
                    _ => {}
                }
            }
            Term::Iri(_) | Term::Literal(_) => {}
        }
    }

    for statement in statements {
        let Term::Iri(subject) = &statement.subject else {
            continue;
        };

        match statement.predicate.as_str() {
            RDF_TYPE => {
                let Term::Iri(object) = &statement.object else {
                    tracing::warn!(line = statement.line, "ignoring non-IRI type assertion");
                    continue;
                };
                if is_meta_class(object) || classes.contains_key(subject)
                    || properties.contains_key(subject)
                {
                    continue;
                }
                individuals
                    .entry(subject.clone())
                    .or_default()
                    .types
                    .push(object.clone());
            }
            RDFS_SUB_CLASS_OF => {
                let draft = classes.entry(subject.clone()).or_default();
                match &statement.object {
                    Term::Iri(parent) => draft.parents.push(parent.clone()),
                    Term::Blank(name) => {
                        let mut visiting = BTreeSet::new();
                        let restriction = resolve_restriction(name, &blanks, &mut visiting)?;
                        draft.restrictions.push(restriction);
                    }
                    Term::Literal(_) => {
                        return Err(LoadError::syntax(
                            statement.line,
                            "subClassOf object must be a class or restriction",
                        ));
                    }
                }
            }
            RDFS_DOMAIN => {
                if let (Some(draft), Term::Iri(class)) =
                    (properties.get_mut(subject), &statement.object)
                {
                    draft.domains.push(class.clone());
                } else {
                    tracing::warn!(line = statement.line, subject = %subject, "domain on undeclared property");
                }
            }
            RDFS_RANGE => {
                if let (Some(draft), Term::Iri(class)) =
                    (properties.get_mut(subject), &statement.object)
                {
                    draft.ranges.push(class.clone());
                } else {
                    tracing::warn!(line = statement.line, subject = %subject, "range on undeclared property");
                }
            }
            RDFS_LABEL => {
                let Term::Literal(text) = &statement.object else {
                    continue;
                };
                if ontology_id.as_ref() == Some(subject) {
                    ontology_label = Some(text.clone());
                } else if let Some(draft) = classes.get_mut(subject) {
                    draft.label = Some(text.clone());
                } else if let Some(draft) = properties.get_mut(subject) {
                    draft.label = Some(text.clone());
                } else if let Some(draft) = individuals.get_mut(subject) {
                    draft.label = Some(text.clone());
                }
            }
            RDFS_COMMENT => {
                let Term::Literal(text) = &statement.object else {
                    continue;
                };
                if let Some(draft) = classes.get_mut(subject) {
                    draft.comments.push(text.clone());
                } else if let Some(draft) = properties.get_mut(subject) {
                    draft.comments.push(text.clone());
                } else if let Some(draft) = individuals.get_mut(subject) {
                    draft.comments.push(text.clone());
                }
            }
            _ => {
                if classes.contains_key(subject) || properties.contains_key(subject) {
                    tracing::debug!(line = statement.line, predicate = %statement.predicate, "ignoring annotation");
                    continue;
                }
                let assertion = match &statement.object {
                    Term::Iri(target) => PropertyAssertion::Individual(target.clone()),
                    Term::Literal(text) => PropertyAssertion::Literal(text.clone()),
                    Term::Blank(_) => {
                        tracing::warn!(line = statement.line, "ignoring blank-node assertion");
                        continue;
                    }
                };
                individuals
                    .entry(subject.clone())
                    .or_default()
                    .assertions
                    .push((statement.predicate.clone(), assertion));
            }
        }
    }

    let id = ontology_id
        .unwrap_or_else(|| Iri::new(DEFAULT_ONTOLOGY_IRI).expect("well-known IRI"));
    let mut ontology = Ontology::new(id);
    if let Some(label) = ontology_label {
        ontology = ontology.with_label(label);
    }

    for (id, draft) in classes {
        let mut class = Class::new(id);
        if let Some(label) = draft.label {
            class = class.with_label(label);
        }
        for comment in draft.comments {
            class.add_comment(comment);
        }
        for parent in draft.parents {
            class.add_parent(parent);
        }
        for restriction in draft.restrictions {
            class.add_restriction(restriction);
        }
        ontology.add_class(class)?;
    }

    for (id, draft) in properties {
        let mut property = Property::new(id, draft.kind);
        if let Some(label) = draft.label {
            property = property.with_label(label);
        }
        for comment in draft.comments {
            property.add_comment(comment);
        }
        for class in draft.domains {
            property.add_domain(class);
        }
        for class in draft.ranges {
            property.add_range(class);
        }
        ontology.add_property(property)?;
    }

    for (id, draft) in individuals {
        let mut individual = Individual::new(id);
        if let Some(label) = draft.label {
            individual = individual.with_label(label);
        }
        for comment in draft.comments {
            individual.add_comment(comment);
        }
        for class in draft.types {
            individual.assert_type(class);
        }
        for (property, assertion) in draft.assertions {
            individual.add_property_assertion(property, assertion);
        }
        ontology.add_individual(individual)?;
    }

    tracing::debug!(
        classes = ontology.classes().len(),
        properties = ontology.properties().len(),
        individuals = ontology.individuals().len(),
        "ontology document loaded"
    );

    Ok(ontology)
}

fn is_meta_class(iri: &Iri) -> bool {
    matches!(
        iri.as_str(),
        OWL_CLASS
            | OWL_OBJECT_PROPERTY
            | OWL_DATATYPE_PROPERTY
            | OWL_NAMED_INDIVIDUAL
            | OWL_ONTOLOGY
            | OWL_RESTRICTION
    )
}

fn resolve_restriction(
    node: &str,
    blanks: &BTreeMap<String, Vec<(&Iri, &Term)>>,
    visiting: &mut BTreeSet<String>,
) -> Result<Restriction, LoadError> {
    if !visiting.insert(node.to_string()) {
        return Err(LoadError::UnresolvedRestriction {
            node: node.to_string(),
        });
    }
    let description = blanks
        .get(node)
        .ok_or_else(|| LoadError::UnresolvedRestriction {
            node: node.to_string(),
        })?;

    let mut property: Option<Iri> = None;
    let mut on_class: Option<Iri> = None;
    let mut quantified: Option<(Quantifier, Option<Filler>)> = None;

    for (predicate, object) in description {
        match predicate.as_str() {
            OWL_ON_PROPERTY => {
                if let Term::Iri(iri) = object {
                    property = Some(iri.clone());
                }
            }
            OWL_ON_CLASS => {
                if let Term::Iri(iri) = object {
                    on_class = Some(iri.clone());
                }
            }
            OWL_SOME_VALUES_FROM => {
                quantified = Some((
                    Quantifier::Some,
                    Some(term_to_filler(object, blanks, visiting)?),
                ));
            }
            OWL_ALL_VALUES_FROM => {
                quantified = Some((
                    Quantifier::Only,
                    Some(term_to_filler(object, blanks, visiting)?),
                ));
            }
            OWL_HAS_VALUE => {
                quantified = Some((
                    Quantifier::Value,
                    Some(term_to_filler(object, blanks, visiting)?),
                ));
            }
            OWL_MIN_CARDINALITY => {
                quantified = Some((Quantifier::Min(parse_cardinality(object, node)?), None));
            }
            OWL_MAX_CARDINALITY => {
                quantified = Some((Quantifier::Max(parse_cardinality(object, node)?), None));
            }
            OWL_CARDINALITY => {
                quantified = Some((Quantifier::Exactly(parse_cardinality(object, node)?), None));
            }
            _ => {}
        }
    }

    visiting.remove(node);

    let property = property.ok_or_else(|| LoadError::UnresolvedRestriction {
        node: node.to_string(),
    })?;
    let (quantifier, filler) = quantified.ok_or_else(|| LoadError::UnresolvedRestriction {
        node: node.to_string(),
    })?;
    // Unqualified cardinalities fall back to the qualified class or the top
    // class as their filler.
    let filler = filler.unwrap_or_else(|| {
        Filler::Named(on_class.unwrap_or_else(Iri::owl_thing))
    });

    Ok(Restriction::new(property, quantifier, filler))
}

fn term_to_filler(
    term: &Term,
    blanks: &BTreeMap<String, Vec<(&Iri, &Term)>>,
    visiting: &mut BTreeSet<String>,
) -> Result<Filler, LoadError> {
    match term {
        Term::Iri(iri) => Ok(Filler::Named(iri.clone())),
        Term::Literal(text) => Ok(Filler::Literal(text.clone())),
        Term::Blank(name) => {
            let nested = resolve_restriction(name, blanks, visiting)?;
            Ok(Filler::Restriction(Box::new(nested)))
        }
    }
}

fn parse_cardinality(term: &Term, node: &str) -> Result<u32, LoadError> {
    let text = match term {
        Term::Literal(text) => text.as_str(),
        _ => {
            return Err(LoadError::UnresolvedRestriction {
                node: node.to_string(),
            })
        }
    };
    text.parse().map_err(|_| LoadError::UnresolvedRestriction {
        node: node.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_document, LoadError};
    use crate::ontology::entities::{Filler, PropertyKind, Quantifier};
    use crate::ontology::value_objects::Iri;

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    const DOC: &str = r#"
@prefix ex: <http://example.org/onto#> .
ex:Animal a owl:Class .
ex:Animal rdfs:label "Animal" .
ex:Animal rdfs:comment "A living" .
ex:Animal rdfs:comment "creature" .
ex:Dog a owl:Class .
ex:Dog rdfs:subClassOf ex:Animal .
ex:hasOwner a owl:ObjectProperty .
ex:hasOwner rdfs:domain ex:Dog .
ex:hasOwner rdfs:range ex:Person .
ex:rex a ex:Dog .
ex:rex ex:hasOwner ex:alice .
"#;

    #[test]
    fn parses_declarations_and_metadata() {
        let ontology = parse_document(DOC).expect("parsed");
        let animal = ontology
            .class(&iri("http://example.org/onto#Animal"))
            .expect("animal declared");
        assert_eq!(animal.label(), Some("Animal"));
        assert_eq!(animal.comment().as_deref(), Some("A living creature"));

        let dog = ontology
            .class(&iri("http://example.org/onto#Dog"))
            .expect("dog declared");
        assert!(dog
            .named_parents()
            .any(|parent| parent == &iri("http://example.org/onto#Animal")));

        let property = ontology
            .property(&iri("http://example.org/onto#hasOwner"))
            .expect("property declared");
        assert_eq!(property.kind(), PropertyKind::Object);
        assert!(property.domains().contains(&iri("http://example.org/onto#Dog")));
        assert!(property.ranges().contains(&iri("http://example.org/onto#Person")));
    }

    #[test]
    fn individuals_collect_types_and_assertions() {
        let ontology = parse_document(DOC).expect("parsed");
        let rex = ontology
            .individual(&iri("http://example.org/onto#rex"))
            .expect("rex declared");
        assert!(rex.types().contains(&iri("http://example.org/onto#Dog")));
        assert_eq!(rex.properties().len(), 1);
    }

    #[test]
    fn assembles_restriction_blank_nodes() {
        let doc = r#"
@prefix ex: <http://example.org/onto#> .
ex:Robot a owl:Class .
ex:hasAction a owl:ObjectProperty .
ex:ClearRubble a owl:Class .
_:r1 a owl:Restriction .
_:r1 owl:onProperty ex:hasAction .
_:r1 owl:someValuesFrom ex:ClearRubble .
ex:Robot rdfs:subClassOf _:r1 .
"#;
        let ontology = parse_document(doc).expect("parsed");
        let robot = ontology
            .class(&iri("http://example.org/onto#Robot"))
            .expect("robot declared");
        let restriction = robot.restrictions().next().expect("restriction attached");
        assert_eq!(
            restriction.property(),
            &iri("http://example.org/onto#hasAction")
        );
        assert_eq!(restriction.quantifier(), &Quantifier::Some);
        assert_eq!(
            restriction.filler(),
            &Filler::Named(iri("http://example.org/onto#ClearRubble"))
        );
    }

    #[test]
    fn cardinality_restrictions_default_their_filler() {
        let doc = r#"
@prefix ex: <http://example.org/onto#> .
ex:Car a owl:Class .
ex:hasWheel a owl:ObjectProperty .
_:r1 a owl:Restriction .
_:r1 owl:onProperty ex:hasWheel .
_:r1 owl:minCardinality "4" .
ex:Car rdfs:subClassOf _:r1 .
"#;
        let ontology = parse_document(doc).expect("parsed");
        let car = ontology
            .class(&iri("http://example.org/onto#Car"))
            .expect("car declared");
        let restriction = car.restrictions().next().expect("restriction attached");
        assert_eq!(restriction.quantifier(), &Quantifier::Min(4));
        assert_eq!(restriction.filler(), &Filler::Named(Iri::owl_thing()));
    }

    #[test]
    fn reports_syntax_errors_with_line_numbers() {
        let err = parse_document("ex:Dog a owl:Class\n").expect_err("missing dot");
        assert!(matches!(err, LoadError::Syntax { line: 1, .. }));
    }

    #[test]
    fn rejects_incomplete_restrictions() {
        let doc = r#"
@prefix ex: <http://example.org/onto#> .
ex:Robot a owl:Class .
_:r1 a owl:Restriction .
ex:Robot rdfs:subClassOf _:r1 .
"#;
        let err = parse_document(doc).expect_err("no onProperty");
        assert!(matches!(err, LoadError::UnresolvedRestriction { .. }));
    }

    #[test]
    fn expands_declared_prefixes() {
        let doc = "@prefix z: <http://z.example/> .\nz:A a owl:Class .\n";
        let ontology = parse_document(doc).expect("parsed");
        assert!(ontology.class(&iri("http://z.example/A")).is_some());
    }

    #[test]
    fn keeps_literal_language_tags_out_of_labels() {
        let doc = r#"
@prefix ex: <http://example.org/onto#> .
ex:Dog a owl:Class .
ex:Dog rdfs:label "Hund"@de .
"#;
        let ontology = parse_document(doc).expect("parsed");
        let dog = ontology
            .class(&iri("http://example.org/onto#Dog"))
            .expect("dog declared");
        assert_eq!(dog.label(), Some("Hund"));
    }
}
