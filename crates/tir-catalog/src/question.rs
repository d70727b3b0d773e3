//! # Question Tree
//!
//! The sectioned question tree of a Thematic Implementation Report:
//! sections contain subsections, subsections contain questions. The tree
//! is a pure grouping structure — all per-question state lives in the
//! answer store, keyed by question identifier.
//!
//! The contract with catalog providers assumes question identifiers are
//! unique across the whole tree; duplicate detection is deliberately not
//! performed here.

use serde::{Deserialize, Serialize};

use tir_core::QuestionId;

/// A single request for information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionContent {
    /// Catalog-wide unique identifier, e.g. `R010`.
    pub id: QuestionId,
    /// The prompt text shown to the reporting government.
    pub text: String,
    /// Optional citation of the convention provisions the question covers,
    /// e.g. `"Article 10 (1) C102 - Articles 13 and 14 C130 - Guidance"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisions: Option<String>,
}

impl QuestionContent {
    /// Create a question without provisions text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            provisions: None,
        }
    }

    /// Create a question with provisions text.
    pub fn with_provisions(
        id: impl Into<String>,
        text: impl Into<String>,
        provisions: impl Into<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            text: text.into(),
            provisions: Some(provisions.into()),
        }
    }

    /// Whether the provisions text carries a trailing guidance link marker.
    ///
    /// Derived, never stored: a question has guidance when its provisions
    /// text ends with the literal `"Guidance"`.
    pub fn has_guidance(&self) -> bool {
        self.provisions
            .as_deref()
            .is_some_and(|p| p.ends_with("Guidance"))
    }
}

/// A subsection: an optional title and/or topic label over a run of
/// questions. Some subsections carry only a topic (the title is empty in
/// the source data); both are optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSubSection {
    /// Subsection title, e.g. "Subsection 2. Medical Care".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Topic label, e.g. "Cost-sharing".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Questions in display order.
    pub questions: Vec<QuestionContent>,
}

/// A top-level section of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSection {
    /// Section heading, e.g. "SECTION 1. LEGISLATION AND REPORTING".
    pub title: String,
    /// Optional introductory text rendered under the heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    /// Subsections in display order.
    pub sub_sections: Vec<QuestionSubSection>,
}

/// The whole question tree for one report.
///
/// Loaded once, immutable for the session. Iteration order over sections,
/// subsections, and questions is the canonical display/readiness/export
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Sections in display order.
    pub sections: Vec<QuestionSection>,
}

impl Catalog {
    /// Iterate every question in catalog order.
    pub fn questions(&self) -> impl Iterator<Item = &QuestionContent> {
        self.sections
            .iter()
            .flat_map(|s| s.sub_sections.iter())
            .flat_map(|ss| ss.questions.iter())
    }

    /// The flat, order-preserving list of all question identifiers.
    ///
    /// This is the only derived artifact of the catalog: it drives answer
    /// store initialization (total coverage) and readiness scans.
    pub fn question_ids(&self) -> Vec<QuestionId> {
        self.questions().map(|q| q.id.clone()).collect()
    }

    /// Whether the catalog contains a question with the given identifier.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.questions().any(|q| &q.id == id)
    }

    /// Look up a question by identifier.
    pub fn question(&self, id: &QuestionId) -> Option<&QuestionContent> {
        self.questions().find(|q| &q.id == id)
    }

    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.questions().count()
    }
}
