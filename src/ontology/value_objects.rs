use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use oxrdf::NamedNode;
use serde::Serialize;
use thiserror::Error;

/// IRI of the universal top class every class implicitly descends from.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";

/// Value object ensuring that supplied text represents a valid IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`] value object.
    ///
    /// The constructor rejects malformed identifiers so that every entity in
    /// the ontology uses a canonical identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        NamedNode::new(value.as_str()).map_err(|_| IriError::Invalid {
            value: value.clone(),
        })?;
        Ok(Self { value })
    }

    /// Returns the identifier of the `owl:Thing` top class.
    #[must_use]
    pub fn owl_thing() -> Self {
        Self {
            value: OWL_THING.to_string(),
        }
    }

    /// Reports whether this identifier names the `owl:Thing` top class.
    #[must_use]
    pub fn is_owl_thing(&self) -> bool {
        self.value == OWL_THING
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the short display name of the identifier.
    ///
    /// The name is the last path segment after the final `#` or `/`. When the
    /// identifier has no such segment the last dot-separated segment is used,
    /// falling back to the full text.
    #[must_use]
    pub fn local_name(&self) -> &str {
        let trimmed = self.value.trim_end_matches(['#', '/']);
        if let Some(pos) = trimmed.rfind(['#', '/']) {
            let tail = &trimmed[pos + 1..];
            if !tail.is_empty() {
                return tail;
            }
        }
        match trimmed.rsplit('.').next() {
            Some(tail) if !tail.is_empty() => tail,
            _ => &self.value,
        }
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Errors produced when validating an [`Iri`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    /// The provided text could not be parsed as an IRI.
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}
