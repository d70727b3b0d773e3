//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifier namespaces of the TIR Stack.
//! These prevent accidental identifier confusion — you cannot pass a
//! `QuestionId` where an `AreaId` is expected, and convention labels are
//! distinct from free text.

use serde::{Deserialize, Serialize};

/// Unique identifier for a request for information (a question) within
/// the catalog, e.g. `R010` or `R_CAS_FOLLOW_UP`.
///
/// Identifiers are unique across the whole catalog, not per section.
/// `Display` renders the raw identifier because attention lists and
/// printed reports show it to the reporting government verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

/// Identifier for a thematic area in the landing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub u32);

/// Display label of a ratified convention or protocol, e.g. `C.155 / P.155`
/// or `MLC 2006`.
///
/// The label is the canonical form shown to users; the short code is
/// derived, never stored separately.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConventionLabel(pub String);

impl QuestionId {
    /// Build a question identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AreaId {
    /// Access the numeric identifier.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl ConventionLabel {
    /// Build a convention label from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Access the full display label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The short convention code: the leading whitespace-delimited token
    /// of the label. `"C.155 / P.155"` yields `"C.155"`; a label without
    /// whitespace is its own code.
    pub fn code(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for AreaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "area:{}", self.0)
    }
}

impl std::fmt::Display for ConventionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<&str> for ConventionLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
