//! # tir-form — Form State for the TIR Stack
//!
//! The mutable half of the questionnaire. One `Answer` record exists per
//! catalog question for the lifetime of a session; every record is created
//! at initialization and none is ever deleted. All mutation flows through
//! the `AnswerStore` surface, which applies the update-detection rules and
//! consults the review-policy table — the presentation layer never touches
//! a flag directly.
//!
//! ## Design
//!
//! - **Update detection is pure.** `update::value_updated` and
//!   `update::reply_updated` are total functions over trimmed text; the
//!   store only wires them to the right fields.
//!
//! - **Special cases live in one table.** Three questions carry dedicated
//!   reply fields or mirror flags. Which questions those are is decided by
//!   the `ReviewPolicy` table, consulted uniformly by the store and by the
//!   readiness evaluator — there are no identifier comparisons scattered
//!   through the logic.
//!
//! - **The surface is total.** Every mutation accepts any question id and
//!   any text and cannot fail; unknown ids get a default record. Advisory
//!   completeness checking belongs to the readiness evaluator, not here.

pub mod answer;
pub mod policy;
pub mod store;
pub mod update;

pub use answer::Answer;
pub use policy::{ReviewPolicy, ReviewRule};
pub use store::AnswerStore;
