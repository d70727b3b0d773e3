//! # tir-catalog — Catalog Data for the TIR Stack
//!
//! The read-only side of the questionnaire: thematic areas, the sectioned
//! question tree, and the prefill baselines applied when a report is
//! opened. The catalog is loaded once per process and never mutated; the
//! only derived artifact is the flat, order-preserving list of question
//! identifiers, which drives answer-store initialization and readiness
//! scans.
//!
//! ## Ordering Invariant
//!
//! Insertion order throughout the tree is semantically meaningful: it is
//! the display order, the navigation order, the readiness-scan order, and
//! the export order. Nothing in this crate sorts.
//!
//! ## Modules
//!
//! - `area` — thematic areas and their ratified conventions.
//! - `question` — the section/subsection/question tree and `Catalog`.
//! - `prefill` — baseline answer text keyed by question identifier.
//! - `builtin` — the fixed dataset shipped with the reporting desk.
//! - `loader` — JSON/YAML catalog and prefill file loading.

pub mod area;
pub mod builtin;
pub mod loader;
pub mod prefill;
pub mod question;

pub use area::ThematicArea;
pub use loader::CatalogError;
pub use prefill::PrefillMap;
pub use question::{Catalog, QuestionContent, QuestionSection, QuestionSubSection};
