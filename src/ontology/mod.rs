//! Ontology domain model and document loading.
//!
//! The module defines value objects and aggregates describing a loaded
//! ontology independently from transport concerns, a loader turning uploaded
//! documents into the aggregate, and the process-wide store holding the
//! single active handle.

pub mod entities;
pub mod loader;
pub mod store;
pub mod value_objects;

pub use entities::{
    Class, Filler, Individual, Ontology, OntologyError, Property, PropertyAssertion, PropertyKind,
    Quantifier, Restriction, SuperClass,
};
pub use loader::{parse_bytes, parse_document, LoadError};
pub use store::OntologyStore;
pub use value_objects::{Iri, IriError, OWL_THING};
