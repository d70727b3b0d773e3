//! # tir-session — Session Lifecycle for the TIR Stack
//!
//! Ties the read-only catalog and the mutable form state together into
//! the flow a reporting government actually walks: pick a thematic area,
//! fill the form, review the advisory attention list, confirm, and hand
//! the report to a submission sink.
//!
//! ## State Machines
//!
//! - **ReportSession** (`session.rs`): `Open → AwaitingConfirmation →
//!   Submitted`, with `cancel` returning to `Open`. Invalid transitions
//!   are structured errors, not silent no-ops.
//!
//! - **ReportingDesk** (`desk.rs`): the landing-catalog layer — at most
//!   one active session, fresh form state every time an area is opened,
//!   and a deduplicated record of submitted areas. Nothing survives a
//!   session switch; persistence across sessions is explicitly out of
//!   scope.
//!
//! ## Submission
//!
//! Submission is simulated: confirming builds a [`SubmissionReceipt`] and
//! delivers it to a [`SubmissionSink`]. The default sink logs the receipt
//! via `tracing`, standing in for a transport that does not exist yet.

pub mod desk;
pub mod session;
pub mod sink;

pub use desk::ReportingDesk;
pub use session::{ReportSession, SessionError, SessionPhase, POST_SUBMISSION_REDIRECT};
pub use sink::{LogSink, MemorySink, SubmissionReceipt, SubmissionSink};
