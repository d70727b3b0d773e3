//! # Readiness Scan
//!
//! The evaluator walks the catalog's question identifiers in catalog
//! order and, per identifier, consults the store's review policy for
//! which flag carries the "addressed" signal. A question whose flag is
//! still false lands on the attention list with a typed reason.
//!
//! A missing record needs attention by construction: the default record
//! has every flag false.

use serde::{Deserialize, Serialize};

use tir_catalog::Catalog;
use tir_core::QuestionId;
use tir_form::{AnswerStore, ReviewRule};

/// Why a question landed on the attention list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionReason {
    /// The primary response has not been updated from its baseline.
    PrimaryNotUpdated,
    /// The reply to the static review-committee comment is still blank.
    StaticReplyPending,
    /// The pending-comments question's main reply is still pending.
    PendingCommentReplyPending,
    /// The reply to the CAS follow-up conclusions is still blank.
    FollowUpReplyPending,
}

impl std::fmt::Display for AttentionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::PrimaryNotUpdated => "main answer not updated",
            Self::StaticReplyPending => "reply to the CEACR comment pending",
            Self::PendingCommentReplyPending => "reply to pending comments missing",
            Self::FollowUpReplyPending => "reply to the CAS follow-up conclusions pending",
        };
        f.write_str(s)
    }
}

/// One entry of the attention list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionItem {
    /// The question needing attention.
    pub question: QuestionId,
    /// Which signal is still missing.
    pub reason: AttentionReason,
}

/// The advisory result of a readiness scan, in catalog order.
///
/// Surfaced to the user at submission time for confirmation and then
/// discarded; it carries no authority to block the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Questions still requiring attention, in catalog order.
    pub items: Vec<AttentionItem>,
}

impl ReadinessReport {
    /// The identifiers needing attention, in catalog order.
    pub fn question_ids(&self) -> Vec<QuestionId> {
        self.items.iter().map(|i| i.question.clone()).collect()
    }

    /// Whether every question has been addressed.
    pub fn is_fully_addressed(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of questions needing attention.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the attention list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a specific question is on the list.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.items.iter().any(|i| &i.question == id)
    }
}

/// Scan the store against the catalog and produce the attention list.
///
/// Pure: no side effects, no error conditions. Evaluation follows the
/// store's review policy per identifier, in catalog order.
pub fn evaluate(catalog: &Catalog, store: &AnswerStore) -> ReadinessReport {
    let items = catalog
        .question_ids()
        .into_iter()
        .filter_map(|id| {
            let answer = store.get(&id);
            let pending = match store.policy().rule_for(&id) {
                ReviewRule::StaticCommentReply => (!answer.static_ceacr_reply_updated)
                    .then_some(AttentionReason::StaticReplyPending),
                ReviewRule::PrimaryWithPendingMirror => (!answer.pending_comment_reply_updated)
                    .then_some(AttentionReason::PendingCommentReplyPending),
                ReviewRule::FollowUpReply => (!answer.cas_follow_up_reply_updated)
                    .then_some(AttentionReason::FollowUpReplyPending),
                ReviewRule::Primary => {
                    (!answer.is_updated).then_some(AttentionReason::PrimaryNotUpdated)
                }
            };
            pending.map(|reason| AttentionItem { question: id, reason })
        })
        .collect();

    ReadinessReport { items }
}
