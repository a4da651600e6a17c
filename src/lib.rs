//! Upload an ontology document and explore it visually: a force-directed
//! graph of classes, properties and individuals, a collapsible class
//! hierarchy, and an on-demand detail record for any selected entity.
//!
//! The [`ontology`] module owns the domain model, document loader and the
//! process-wide store; [`projection`] holds the pure read-side
//! transformations; [`controller`] exposes both over HTTP.

pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod ontology;
pub mod projection;
pub mod storage;

pub use errors::Error;

/// Crate-wide result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
