//! # Submission Sinks and Receipts
//!
//! The seam between the session lifecycle and whatever eventually
//! receives a submitted report. There is no server-side component in
//! scope, so the production sink logs the receipt; tests capture it in
//! memory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tir_core::{AreaId, ConventionLabel, Timestamp};
use tir_form::AnswerStore;

use crate::session::SessionError;

/// Record of a confirmed submission.
///
/// Carries everything the presentation layer hands over on confirmation:
/// the area, the convention selection active at submission time, and a
/// full snapshot of the answer store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Unique receipt identifier.
    pub id: Uuid,
    /// The reporting member state.
    pub country: String,
    /// The submitted thematic area.
    pub area_id: AreaId,
    /// The area's display title, for rendering the confirmation message.
    pub area_title: String,
    /// When the submission was confirmed.
    pub submitted_at: Timestamp,
    /// Convention labels selected as active at submission time.
    pub active_conventions: Vec<ConventionLabel>,
    /// Snapshot of the full answer store.
    pub answers: AnswerStore,
}

impl SubmissionReceipt {
    /// The confirmation line shown to the user after submission.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Submission received for {} on thematic area \"{}\" at {}.",
            self.country, self.area_title, self.submitted_at
        )
    }
}

/// Destination for confirmed submissions.
pub trait SubmissionSink {
    /// Deliver a receipt. Delivery failures surface as session errors so
    /// the caller can retry the confirmation.
    fn deliver(&mut self, receipt: &SubmissionReceipt) -> Result<(), SessionError>;
}

/// The simulated backend: logs the receipt and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&mut self, receipt: &SubmissionReceipt) -> Result<(), SessionError> {
        tracing::info!(
            receipt_id = %receipt.id,
            area = %receipt.area_id,
            country = %receipt.country,
            conventions = receipt.active_conventions.len(),
            answers = receipt.answers.len(),
            "report submitted"
        );
        Ok(())
    }
}

/// Test sink that retains every delivered receipt.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Receipts in delivery order.
    pub receipts: Vec<SubmissionReceipt>,
}

impl SubmissionSink for MemorySink {
    fn deliver(&mut self, receipt: &SubmissionReceipt) -> Result<(), SessionError> {
        self.receipts.push(receipt.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tir_catalog::{builtin, PrefillMap};
    use tir_form::ReviewPolicy;

    fn sample_receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            id: Uuid::new_v4(),
            country: builtin::COUNTRY.to_string(),
            area_id: AreaId(9),
            area_title: "Social Security and Maternity Protection".to_string(),
            submitted_at: Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
            active_conventions: vec![ConventionLabel::new("C.102")],
            answers: AnswerStore::initialize(
                &builtin::catalog(),
                &PrefillMap::empty(),
                ReviewPolicy::standard(),
            ),
        }
    }

    #[test]
    fn test_confirmation_message() {
        let receipt = sample_receipt();
        assert_eq!(
            receipt.confirmation_message(),
            "Submission received for Country X on thematic area \"Social Security and Maternity Protection\" at 2026-01-15T12:00:00Z."
        );
    }

    #[test]
    fn test_memory_sink_retains_receipts() {
        let mut sink = MemorySink::default();
        let receipt = sample_receipt();
        sink.deliver(&receipt).unwrap();
        assert_eq!(sink.receipts.len(), 1);
        assert_eq!(sink.receipts[0].area_id, AreaId(9));
    }

    #[test]
    fn test_log_sink_succeeds() {
        let mut sink = LogSink;
        assert!(sink.deliver(&sample_receipt()).is_ok());
    }

    #[test]
    fn test_receipt_serde_roundtrip() {
        let receipt = sample_receipt();
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: SubmissionReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, receipt);
    }
}
