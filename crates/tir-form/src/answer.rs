//! # Answer Records
//!
//! The mutable unit of form state: one `Answer` per question identifier.
//! Most fields are plain text; the boolean flags are derived by the store
//! through the update-detection rules and never set directly by callers.

use serde::{Deserialize, Serialize};

/// Per-question answer state.
///
/// Created with defaults (possibly a prefilled `value`, all flags false,
/// auxiliary text empty) when a session opens, mutated only through the
/// [`crate::AnswerStore`] surface, and discarded when the session ends.
///
/// The three dedicated reply fields (`static_ceacr_reply`,
/// `pending_comment_reply_updated`, `cas_follow_up_reply`) are only
/// meaningful on the questions the [`crate::ReviewPolicy`] binds them to;
/// on every other record they stay at their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Free-text primary response.
    pub value: String,
    /// Whether `value` counts as updated relative to its prefill baseline.
    pub is_updated: bool,

    /// Review-session label. A non-empty value gates the visibility of the
    /// three fields below; the field is part of the record contract even
    /// though the government-facing flow never sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceacr_session: Option<String>,
    /// Staff-only legal analysis. Carries no updated flag and never
    /// affects readiness.
    pub legal_analysis: String,
    /// Draft legal comment. No updated flag, no readiness effect.
    pub dlc_comment: String,
    /// Government reply to the session comment. No updated flag, no
    /// readiness effect.
    pub government_reply: String,

    /// Reply to the static review-committee comment (the `R010` panel in
    /// the standard policy).
    pub static_ceacr_reply: String,
    /// Whether `static_ceacr_reply` is non-blank after trimming.
    pub static_ceacr_reply_updated: bool,

    /// Mirror of `is_updated` for the pending-comments question, tracked
    /// separately because that question's primary reply doubles as its
    /// "comment addressed" signal.
    pub pending_comment_reply_updated: bool,

    /// Reply to the Conference Committee follow-up conclusions (the CAS
    /// follow-up item, which has no primary answer box).
    pub cas_follow_up_reply: String,
    /// Whether `cas_follow_up_reply` is non-blank after trimming.
    pub cas_follow_up_reply_updated: bool,
}

impl Answer {
    /// A record whose `value` starts from a prefill baseline.
    ///
    /// The prefill does not count as an update: all flags start false.
    pub fn prefilled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// Whether the review-session gate is open: a non-empty session label
    /// is present.
    pub fn has_review_session(&self) -> bool {
        self.ceacr_session
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}
