//! # Prefill Baselines
//!
//! Baseline answer text supplied by the catalog provider for a known
//! subset of questions. The prefill is the value a question starts with
//! when a report is opened, and the reference the update-detection rule
//! compares against: a prefilled question only counts as updated once its
//! text differs from the baseline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tir_core::QuestionId;

/// Question identifier → baseline answer text.
///
/// Questions absent from the map start blank. The map is immutable for
/// the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefillMap(BTreeMap<QuestionId, String>);

impl PrefillMap {
    /// An empty prefill map (every question starts blank).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The baseline text for a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    /// Insert a baseline. Replaces any previous baseline for the id.
    pub fn insert(&mut self, id: QuestionId, text: impl Into<String>) {
        self.0.insert(id, text.into());
    }

    /// Number of prefilled questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no question carries a baseline.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate baselines in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.0.iter().map(|(id, text)| (id, text.as_str()))
    }
}

impl<I, S> FromIterator<(I, S)> for PrefillMap
where
    I: Into<String>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, S)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, text)| (QuestionId::new(id), text.into()))
                .collect(),
        )
    }
}
