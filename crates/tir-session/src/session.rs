//! # Report Session
//!
//! One open thematic area: a fresh answer store, the active convention
//! selection, and the submission state machine.
//!
//! ## States
//!
//! ```text
//! Open ──▶ AwaitingConfirmation ──▶ Submitted (terminal)
//!   ▲              │
//!   └──────────────┘ (cancel)
//! ```
//!
//! Opening a session always starts from defaults — there is no carry-over
//! from a previously opened area and no persistence when the session is
//! discarded. The attention list computed at submission intent is
//! advisory: confirmation proceeds regardless of how many questions it
//! names.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use tir_catalog::{builtin, Catalog, PrefillMap, ThematicArea};
use tir_core::{ConventionLabel, QuestionId, Timestamp};
use tir_form::{AnswerStore, ReviewPolicy};
use tir_review::{evaluate, ReadinessReport};

use crate::sink::{SubmissionReceipt, SubmissionSink};

/// The fixed delay before the presentation layer returns to the area
/// list after a confirmed submission. Scheduling — and cancelling the
/// callback if the user navigates away first — is owned by the
/// presentation layer.
pub const POST_SUBMISSION_REDIRECT: Duration = Duration::from_secs(3);

/// The lifecycle phase of a report session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// The form is editable; no submission is in flight.
    Open,
    /// Submission intent declared; the attention list is on display and
    /// the user must confirm or cancel.
    AwaitingConfirmation,
    /// The report has been handed to the sink (terminal).
    Submitted,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "OPEN",
            Self::AwaitingConfirmation => "AWAITING_CONFIRMATION",
            Self::Submitted => "SUBMITTED",
        };
        f.write_str(s)
    }
}

/// Errors from the session lifecycle.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The action is not valid in the session's current phase.
    #[error("invalid session action {action:?} in phase {phase}")]
    InvalidPhase {
        /// The phase the session was in.
        phase: SessionPhase,
        /// The attempted action.
        action: &'static str,
    },

    /// No thematic area with the given identifier exists in the catalog.
    #[error("unknown thematic area: {0}")]
    UnknownArea(tir_core::AreaId),

    /// No report session is currently open.
    #[error("no active report session")]
    NoActiveSession,

    /// The submission sink rejected the receipt.
    #[error("submission delivery failed: {0}")]
    Delivery(String),
}

/// A reporting session over one thematic area.
#[derive(Debug, Clone)]
pub struct ReportSession {
    area: ThematicArea,
    catalog: Catalog,
    store: AnswerStore,
    active_conventions: Vec<ConventionLabel>,
    phase: SessionPhase,
    attention: Option<ReadinessReport>,
}

impl ReportSession {
    /// Open a fresh session on an area: a new answer store initialized
    /// from the catalog and prefills, and the area's preselected
    /// conventions active.
    ///
    /// This is the explicit reset point — opening an area never inherits
    /// state from any previous session.
    pub fn open(
        area: ThematicArea,
        catalog: &Catalog,
        prefills: &PrefillMap,
        policy: ReviewPolicy,
    ) -> Self {
        let store = AnswerStore::initialize(catalog, prefills, policy);
        let active_conventions = builtin::preselected_conventions(&area);

        tracing::debug!(area = %area.id, questions = store.len(), "report session opened");

        Self {
            area,
            catalog: catalog.clone(),
            store,
            active_conventions,
            phase: SessionPhase::Open,
            attention: None,
        }
    }

    /// The session's thematic area.
    pub fn area(&self) -> &ThematicArea {
        &self.area
    }

    /// The session's answer store (read-only; mutate through the surface
    /// below).
    pub fn store(&self) -> &AnswerStore {
        &self.store
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The currently active convention labels, in selection order.
    pub fn active_conventions(&self) -> &[ConventionLabel] {
        &self.active_conventions
    }

    /// The attention list computed at submission intent, while one is on
    /// display.
    pub fn attention_list(&self) -> Option<&ReadinessReport> {
        self.attention.as_ref()
    }

    // ─── Convention selection ────────────────────────────────────────

    /// Toggle a convention label in or out of the active selection.
    pub fn toggle_convention(&mut self, label: &ConventionLabel) -> Result<(), SessionError> {
        self.require_editable("toggle_convention")?;
        match self.active_conventions.iter().position(|c| c == label) {
            Some(idx) => {
                self.active_conventions.remove(idx);
            }
            None => self.active_conventions.push(label.clone()),
        }
        Ok(())
    }

    /// Whether a convention label is currently selected.
    pub fn is_convention_active(&self, label: &ConventionLabel) -> bool {
        self.active_conventions.contains(label)
    }

    // ─── Form interaction surface ────────────────────────────────────
    //
    // Pass-throughs to the store, guarded only by the lifecycle: a
    // submitted report is immutable.

    /// Set a question's primary response.
    pub fn set_value(&mut self, id: &QuestionId, text: impl Into<String>) -> Result<(), SessionError> {
        self.require_editable("set_value")?;
        self.store.set_value(id, text);
        Ok(())
    }

    /// Set a question's review-session label.
    pub fn set_ceacr_session(
        &mut self,
        id: &QuestionId,
        session: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_editable("set_ceacr_session")?;
        self.store.set_ceacr_session(id, session);
        Ok(())
    }

    /// Set a question's staff legal analysis.
    pub fn set_legal_analysis(
        &mut self,
        id: &QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_editable("set_legal_analysis")?;
        self.store.set_legal_analysis(id, text);
        Ok(())
    }

    /// Set a question's draft legal comment.
    pub fn set_dlc_comment(
        &mut self,
        id: &QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_editable("set_dlc_comment")?;
        self.store.set_dlc_comment(id, text);
        Ok(())
    }

    /// Set a question's government reply to the session comment.
    pub fn set_government_reply(
        &mut self,
        id: &QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_editable("set_government_reply")?;
        self.store.set_government_reply(id, text);
        Ok(())
    }

    /// Set a question's reply to the static review-committee comment.
    pub fn set_static_ceacr_reply(
        &mut self,
        id: &QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_editable("set_static_ceacr_reply")?;
        self.store.set_static_ceacr_reply(id, text);
        Ok(())
    }

    /// Set a question's reply to the CAS follow-up conclusions.
    pub fn set_follow_up_reply(
        &mut self,
        id: &QuestionId,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.require_editable("set_follow_up_reply")?;
        self.store.set_follow_up_reply(id, text);
        Ok(())
    }

    // ─── Submission ──────────────────────────────────────────────────

    /// Declare submission intent (OPEN → AWAITING_CONFIRMATION).
    ///
    /// Computes and retains the advisory attention list for the
    /// confirmation dialog. The list never blocks the confirmation.
    pub fn begin_submission(&mut self) -> Result<&ReadinessReport, SessionError> {
        self.require_phase(SessionPhase::Open, "begin_submission")?;
        let report = evaluate(&self.catalog, &self.store);
        self.phase = SessionPhase::AwaitingConfirmation;
        Ok(self.attention.insert(report))
    }

    /// Abandon the submission intent (AWAITING_CONFIRMATION → OPEN),
    /// discarding the attention list.
    pub fn cancel_submission(&mut self) -> Result<(), SessionError> {
        self.require_phase(SessionPhase::AwaitingConfirmation, "cancel_submission")?;
        self.phase = SessionPhase::Open;
        self.attention = None;
        Ok(())
    }

    /// Confirm the submission (AWAITING_CONFIRMATION → SUBMITTED).
    ///
    /// Builds the receipt, delivers it to the sink, and returns it. The
    /// session becomes immutable; the caller is expected to return to the
    /// area list after [`POST_SUBMISSION_REDIRECT`].
    pub fn confirm_submission(
        &mut self,
        sink: &mut dyn SubmissionSink,
    ) -> Result<SubmissionReceipt, SessionError> {
        self.require_phase(SessionPhase::AwaitingConfirmation, "confirm_submission")?;

        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            country: builtin::COUNTRY.to_string(),
            area_id: self.area.id,
            area_title: self.area.title.clone(),
            submitted_at: Timestamp::now(),
            active_conventions: self.active_conventions.clone(),
            answers: self.store.clone(),
        };

        sink.deliver(&receipt)?;

        self.phase = SessionPhase::Submitted;
        self.attention = None;

        tracing::info!(area = %self.area.id, receipt = %receipt.id, "submission confirmed");
        Ok(receipt)
    }

    fn require_editable(&self, action: &'static str) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Submitted {
            return Err(SessionError::InvalidPhase {
                phase: self.phase,
                action,
            });
        }
        Ok(())
    }

    fn require_phase(&self, expected: SessionPhase, action: &'static str) -> Result<(), SessionError> {
        if self.phase != expected {
            return Err(SessionError::InvalidPhase {
                phase: self.phase,
                action,
            });
        }
        Ok(())
    }
}
