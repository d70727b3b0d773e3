//! # tir-review — Submission-Readiness Evaluation
//!
//! Scans an answer store against the catalog and the store's review
//! policy, producing the ordered list of questions still requiring
//! attention before a report is handed over.
//!
//! ## Advisory Contract
//!
//! The readiness list warns; it never blocks. The reporting government
//! may confirm submission with an arbitrarily incomplete report, so
//! nothing in this crate is a validator and nothing here has side
//! effects or error conditions.

pub mod readiness;

pub use readiness::{evaluate, AttentionItem, AttentionReason, ReadinessReport};
