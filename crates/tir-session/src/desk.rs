//! # Reporting Desk
//!
//! The landing-catalog layer: the list of thematic areas, at most one
//! open [`ReportSession`], and the deduplicated record of which areas
//! have already been submitted this reporting cycle.
//!
//! Opening an area always replaces whatever session was active with a
//! fresh one. The submitted-areas record is the only state that outlives
//! a session.

use std::collections::BTreeSet;

use tir_catalog::{builtin, Catalog, PrefillMap, ThematicArea};
use tir_core::AreaId;
use tir_form::ReviewPolicy;

use crate::session::{ReportSession, SessionError};
use crate::sink::{SubmissionReceipt, SubmissionSink};

/// The front desk of a reporting cycle.
#[derive(Debug, Clone)]
pub struct ReportingDesk {
    areas: Vec<ThematicArea>,
    catalog: Catalog,
    prefills: PrefillMap,
    policy: ReviewPolicy,
    submitted: BTreeSet<AreaId>,
    active: Option<ReportSession>,
}

impl ReportingDesk {
    /// A desk over an explicit area list, catalog, and prefill baseline.
    pub fn new(
        areas: Vec<ThematicArea>,
        catalog: Catalog,
        prefills: PrefillMap,
        policy: ReviewPolicy,
    ) -> Self {
        Self {
            areas,
            catalog,
            prefills,
            policy,
            submitted: BTreeSet::new(),
            active: None,
        }
    }

    /// A desk over the built-in dataset with the standard review policy.
    pub fn standard() -> Self {
        Self::new(
            builtin::thematic_areas(),
            builtin::catalog(),
            builtin::prefills(),
            ReviewPolicy::standard(),
        )
    }

    /// The thematic areas on offer, in display order.
    pub fn areas(&self) -> &[ThematicArea] {
        &self.areas
    }

    /// Look up an area by identifier.
    pub fn area(&self, id: AreaId) -> Option<&ThematicArea> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// The currently open session, if any.
    pub fn active_session(&self) -> Option<&ReportSession> {
        self.active.as_ref()
    }

    /// Mutable access to the currently open session, if any.
    pub fn active_session_mut(&mut self) -> Option<&mut ReportSession> {
        self.active.as_mut()
    }

    /// Open a session on an area, discarding any session that was active.
    ///
    /// The new session starts from a fresh answer store and the area's
    /// preselected conventions; nothing carries over from the discarded
    /// session. Already-submitted areas may be reopened, producing a
    /// second submission for the same area.
    pub fn open_area(&mut self, id: AreaId) -> Result<&mut ReportSession, SessionError> {
        let area = self.area(id).cloned().ok_or(SessionError::UnknownArea(id))?;

        if let Some(prior) = &self.active {
            tracing::debug!(discarded = %prior.area().id, opened = %id, "switching report session");
        }

        let session = ReportSession::open(area, &self.catalog, &self.prefills, self.policy.clone());
        Ok(self.active.insert(session))
    }

    /// Discard the active session without submitting.
    pub fn close_session(&mut self) {
        self.active = None;
    }

    /// Confirm the active session's submission and record its area.
    ///
    /// The session must already be awaiting confirmation (see
    /// [`ReportSession::begin_submission`]). The session stays active in
    /// its terminal phase so the presentation layer can show the receipt
    /// before closing it.
    pub fn submit_active(
        &mut self,
        sink: &mut dyn SubmissionSink,
    ) -> Result<SubmissionReceipt, SessionError> {
        let session = self.active.as_mut().ok_or(SessionError::NoActiveSession)?;
        let receipt = session.confirm_submission(sink)?;
        self.submitted.insert(receipt.area_id);
        Ok(receipt)
    }

    /// Whether an area has been submitted this cycle.
    pub fn is_submitted(&self, id: AreaId) -> bool {
        self.submitted.contains(&id)
    }

    /// The areas submitted so far, each listed once.
    pub fn submitted_areas(&self) -> Vec<AreaId> {
        self.submitted.iter().copied().collect()
    }
}
