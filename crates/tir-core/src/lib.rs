//! # tir-core — Foundational Types for the TIR Stack
//!
//! This crate is the bedrock of the TIR Stack, the domain core behind
//! Thematic Implementation Report questionnaires. It defines the primitive
//! types every other crate in the workspace builds on; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `QuestionId`, `AreaId`,
//!    `ConventionLabel` — no bare strings or integers for identifiers, so a
//!    question identifier can never be passed where an area identifier is
//!    expected.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision, so submission receipts render one
//!    canonical time form everywhere.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tir-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{AreaId, ConventionLabel, QuestionId};
pub use temporal::Timestamp;
