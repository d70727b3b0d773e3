//! # Thematic Areas
//!
//! A thematic area groups the ratified conventions and protocols a
//! government reports on together (e.g. "Forced Labour" covers C.29/P.29
//! and C.105). Areas are selected from the landing catalog; selecting one
//! opens a fresh reporting session over the question tree.

use serde::{Deserialize, Serialize};

use tir_core::{AreaId, ConventionLabel};

/// A thematic area from the landing catalog.
///
/// Immutable once loaded. The convention sequence is ordered: it is the
/// order the labels are presented for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThematicArea {
    /// Catalog identifier for the area.
    pub id: AreaId,
    /// Display title, e.g. "Occupational Safety and Health".
    pub title: String,
    /// Ordered ratified convention/protocol labels covered by this area.
    pub conventions: Vec<ConventionLabel>,
}

impl ThematicArea {
    /// Create an area from a numeric id, title, and raw convention labels.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        conventions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: AreaId(id),
            title: title.into(),
            conventions: conventions
                .into_iter()
                .map(|c| ConventionLabel::new(c))
                .collect(),
        }
    }

    /// Whether the area covers a convention with the given label.
    pub fn has_convention(&self, label: &ConventionLabel) -> bool {
        self.conventions.contains(label)
    }

    /// The labels whose short code appears in `codes`, in catalog order.
    ///
    /// Used for preselection rules that name conventions by code
    /// (e.g. preselect `C.102` regardless of its protocol suffix).
    pub fn conventions_with_codes<'a>(&'a self, codes: &'a [&'a str]) -> Vec<ConventionLabel> {
        self.conventions
            .iter()
            .filter(|c| codes.contains(&c.code()))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for ThematicArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {}", self.id, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_area() -> ThematicArea {
        ThematicArea::new(
            9,
            "Social Security and Maternity Protection",
            ["C.102", "C.118", "C.183"],
        )
    }

    #[test]
    fn test_new_preserves_order() {
        let area = sample_area();
        assert_eq!(area.id, AreaId(9));
        assert_eq!(area.conventions[0].as_str(), "C.102");
        assert_eq!(area.conventions[2].as_str(), "C.183");
    }

    #[test]
    fn test_has_convention() {
        let area = sample_area();
        assert!(area.has_convention(&ConventionLabel::new("C.118")));
        assert!(!area.has_convention(&ConventionLabel::new("C.999")));
    }

    #[test]
    fn test_conventions_with_codes_matches_compound_labels() {
        let area = ThematicArea::new(2, "Forced Labour", ["C.29 / P.29", "C.105"]);
        let selected = area.conventions_with_codes(&["C.29"]);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].as_str(), "C.29 / P.29");
    }

    #[test]
    fn test_conventions_with_codes_preserves_order() {
        let area = sample_area();
        let selected = area.conventions_with_codes(&["C.183", "C.102"]);
        assert_eq!(selected[0].as_str(), "C.102");
        assert_eq!(selected[1].as_str(), "C.183");
    }
}
