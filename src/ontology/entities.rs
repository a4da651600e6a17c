use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use super::value_objects::Iri;

/// Quantifier of a restriction expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Quantifier {
    /// Existential quantification (`owl:someValuesFrom`).
    Some,
    /// Universal quantification (`owl:allValuesFrom`).
    Only,
    /// Value restriction (`owl:hasValue`).
    Value,
    /// Minimum cardinality.
    Min(u32),
    /// Maximum cardinality.
    Max(u32),
    /// Exact cardinality.
    Exactly(u32),
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some => f.write_str("some"),
            Self::Only => f.write_str("only"),
            Self::Value => f.write_str("value"),
            Self::Min(count) => write!(f, "min {count}"),
            Self::Max(count) => write!(f, "max {count}"),
            Self::Exactly(count) => write!(f, "exactly {count}"),
        }
    }
}

/// Compound class expression binding a property, a quantifier and a filler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Restriction {
    property: Iri,
    quantifier: Quantifier,
    filler: Filler,
}

impl Restriction {
    /// Creates a new restriction expression.
    #[must_use]
    pub fn new(property: Iri, quantifier: Quantifier, filler: Filler) -> Self {
        Self {
            property,
            quantifier,
            filler,
        }
    }

    /// Returns the restricted property.
    #[must_use]
    pub fn property(&self) -> &Iri {
        &self.property
    }

    /// Returns the quantifier of the expression.
    #[must_use]
    pub fn quantifier(&self) -> &Quantifier {
        &self.quantifier
    }

    /// Returns the filler value.
    #[must_use]
    pub fn filler(&self) -> &Filler {
        &self.filler
    }
}

/// Closed value space for restriction fillers.
///
/// A filler is either a named entity, a plain literal, a list of further
/// fillers or a nested restriction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filler {
    Named(Iri),
    Literal(String),
    List(Vec<Filler>),
    Restriction(Box<Restriction>),
}

/// Parent expression attached to a class via `is_a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuperClass {
    /// A named parent class.
    Named(Iri),
    /// An anonymous restriction the class specializes.
    Restriction(Restriction),
}

/// Ontology class definition capturing parent relationships and metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class {
    id: Iri,
    label: Option<String>,
    comments: Vec<String>,
    is_a: Vec<SuperClass>,
}

impl Class {
    /// Creates a new [`Class`] with the supplied identifier.
    #[must_use]
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            label: None,
            comments: Vec::new(),
            is_a: Vec::new(),
        }
    }

    /// Sets a human friendly label for the class.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a textual description. Multiple comments are joined on read.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Adds a named parent class relation. Duplicates are ignored.
    pub fn add_parent(&mut self, parent: Iri) -> bool {
        let parent = SuperClass::Named(parent);
        if self.is_a.contains(&parent) {
            return false;
        }
        self.is_a.push(parent);
        true
    }

    /// Attaches an anonymous restriction parent.
    pub fn add_restriction(&mut self, restriction: Restriction) {
        self.is_a.push(SuperClass::Restriction(restriction));
    }

    /// Returns the unique identifier of the class.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the label when present, otherwise the IRI local name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.local_name())
    }

    /// Returns the comments joined into a single string, if any.
    #[must_use]
    pub fn comment(&self) -> Option<String> {
        join_comments(&self.comments)
    }

    /// Returns every parent expression in declaration order.
    #[must_use]
    pub fn is_a(&self) -> &[SuperClass] {
        &self.is_a
    }

    /// Returns the named parent classes in declaration order.
    pub fn named_parents(&self) -> impl Iterator<Item = &Iri> {
        self.is_a.iter().filter_map(|parent| match parent {
            SuperClass::Named(iri) => Some(iri),
            SuperClass::Restriction(_) => None,
        })
    }

    /// Returns the restriction parents in declaration order.
    pub fn restrictions(&self) -> impl Iterator<Item = &Restriction> {
        self.is_a.iter().filter_map(|parent| match parent {
            SuperClass::Named(_) => None,
            SuperClass::Restriction(restriction) => Some(restriction),
        })
    }
}

/// Classifies the type of values a property can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// Object properties link individuals.
    Object,
    /// Data properties capture literal values.
    Data,
}

impl PropertyKind {
    /// Returns the display name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Data => "data",
        }
    }
}

/// Ontology property definition supporting object and data properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    id: Iri,
    label: Option<String>,
    comments: Vec<String>,
    kind: PropertyKind,
    domains: BTreeSet<Iri>,
    ranges: BTreeSet<Iri>,
}

impl Property {
    /// Creates a new property with the provided identifier and kind.
    #[must_use]
    pub fn new(id: Iri, kind: PropertyKind) -> Self {
        Self {
            id,
            label: None,
            comments: Vec::new(),
            kind,
            domains: BTreeSet::new(),
            ranges: BTreeSet::new(),
        }
    }

    /// Sets a human readable label for the property.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a textual description.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Declares that the property applies to the supplied domain class.
    pub fn add_domain(&mut self, class: Iri) -> bool {
        self.domains.insert(class)
    }

    /// Declares that the property produces values from the supplied range.
    ///
    /// For data properties the range holds datatype identifiers.
    pub fn add_range(&mut self, class: Iri) -> bool {
        self.ranges.insert(class)
    }

    /// Returns the property identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the label when present, otherwise the IRI local name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.local_name())
    }

    /// Returns the comments joined into a single string, if any.
    #[must_use]
    pub fn comment(&self) -> Option<String> {
        join_comments(&self.comments)
    }

    /// Returns the property kind.
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns the registered domain classes.
    #[must_use]
    pub fn domains(&self) -> &BTreeSet<Iri> {
        &self.domains
    }

    /// Returns the registered range classes.
    #[must_use]
    pub fn ranges(&self) -> &BTreeSet<Iri> {
        &self.ranges
    }
}

/// Property assertions attached to individuals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyAssertion {
    /// Object properties target another individual.
    Individual(Iri),
    /// Data properties store literal values.
    Literal(String),
}

/// An ontology individual with class memberships and property assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Individual {
    id: Iri,
    label: Option<String>,
    comments: Vec<String>,
    types: BTreeSet<Iri>,
    properties: BTreeMap<Iri, Vec<PropertyAssertion>>,
}

impl Individual {
    /// Creates a new individual with the supplied identifier.
    #[must_use]
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            label: None,
            comments: Vec::new(),
            types: BTreeSet::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Sets a human readable label for the individual.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a textual description.
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Declares that the individual is an instance of the given class.
    ///
    /// The class does not have to be declared in the same document; the
    /// projection layer resolves such references on demand.
    pub fn assert_type(&mut self, class: Iri) -> bool {
        self.types.insert(class)
    }

    /// Associates the individual with a property assertion.
    pub fn add_property_assertion(&mut self, property: Iri, assertion: PropertyAssertion) {
        self.properties.entry(property).or_default().push(assertion);
    }

    /// Returns the identifier of the individual.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the label when present, otherwise the IRI local name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.id.local_name())
    }

    /// Returns the comments joined into a single string, if any.
    #[must_use]
    pub fn comment(&self) -> Option<String> {
        join_comments(&self.comments)
    }

    /// Returns the declared types.
    #[must_use]
    pub fn types(&self) -> &BTreeSet<Iri> {
        &self.types
    }

    /// Returns the property assertions.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<Iri, Vec<PropertyAssertion>> {
        &self.properties
    }
}

fn join_comments(comments: &[String]) -> Option<String> {
    if comments.is_empty() {
        None
    } else {
        Some(comments.join(" "))
    }
}

/// Aggregates ontology classes, properties and individuals.
///
/// The top class `owl:Thing` is never stored as a class; it only exists as a
/// sentinel value referenced from parent lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ontology {
    id: Iri,
    label: Option<String>,
    classes: BTreeMap<Iri, Class>,
    properties: BTreeMap<Iri, Property>,
    individuals: BTreeMap<Iri, Individual>,
}

impl Ontology {
    /// Creates a new ontology aggregate with the supplied identifier.
    #[must_use]
    pub fn new(id: Iri) -> Self {
        Self {
            id,
            label: None,
            classes: BTreeMap::new(),
            properties: BTreeMap::new(),
            individuals: BTreeMap::new(),
        }
    }

    /// Sets a human readable label for the ontology.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds a class to the ontology, enforcing unique identifiers.
    ///
    /// The `owl:Thing` sentinel is silently dropped; it never materializes as
    /// a declared class.
    pub fn add_class(&mut self, class: Class) -> Result<(), OntologyError> {
        if class.id().is_owl_thing() {
            return Ok(());
        }
        let id = class.id().clone();
        if self.classes.contains_key(&id) {
            return Err(OntologyError::DuplicateClass(id));
        }
        self.classes.insert(id, class);
        Ok(())
    }

    /// Adds a property to the ontology, enforcing unique identifiers.
    ///
    /// Domain and range references are not required to name declared classes.
    pub fn add_property(&mut self, property: Property) -> Result<(), OntologyError> {
        let id = property.id().clone();
        if self.properties.contains_key(&id) {
            return Err(OntologyError::DuplicateProperty(id));
        }
        self.properties.insert(id, property);
        Ok(())
    }

    /// Adds an individual to the ontology, enforcing unique identifiers.
    ///
    /// Type assertions may reference classes the document never declares.
    pub fn add_individual(&mut self, individual: Individual) -> Result<(), OntologyError> {
        let id = individual.id().clone();
        if self.individuals.contains_key(&id) {
            return Err(OntologyError::DuplicateIndividual(id));
        }
        self.individuals.insert(id, individual);
        Ok(())
    }

    /// Returns the ontology identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the optional label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Retrieves a class by identifier.
    #[must_use]
    pub fn class(&self, id: &Iri) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Retrieves a property by identifier.
    #[must_use]
    pub fn property(&self, id: &Iri) -> Option<&Property> {
        self.properties.get(id)
    }

    /// Retrieves an individual by identifier.
    #[must_use]
    pub fn individual(&self, id: &Iri) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Returns all classes ordered by identifier.
    #[must_use]
    pub fn classes(&self) -> &BTreeMap<Iri, Class> {
        &self.classes
    }

    /// Returns all properties ordered by identifier.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<Iri, Property> {
        &self.properties
    }

    /// Returns all individuals ordered by identifier.
    #[must_use]
    pub fn individuals(&self) -> &BTreeMap<Iri, Individual> {
        &self.individuals
    }

    /// Returns the direct subclasses of the given class in iteration order.
    pub fn subclasses_of<'a>(&'a self, class: &'a Iri) -> impl Iterator<Item = &'a Class> {
        self.classes
            .values()
            .filter(move |candidate| candidate.named_parents().any(|parent| parent == class))
    }
}

/// Errors raised when manipulating an ontology aggregate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OntologyError {
    /// Attempted to add a class with an existing identifier.
    #[error("class `{0}` already exists")]
    DuplicateClass(Iri),
    /// Attempted to add a property with an existing identifier.
    #[error("property `{0}` already exists")]
    DuplicateProperty(Iri),
    /// Attempted to add an individual with an existing identifier.
    #[error("individual `{0}` already exists")]
    DuplicateIndividual(Iri),
}
