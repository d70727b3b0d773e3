//! # Review-Policy Table
//!
//! One declarative table decides how each question's "addressed" signal is
//! computed. Three questions in the standard questionnaire deviate from
//! the plain primary-value rule; binding those deviations here keeps the
//! store mutations and the readiness evaluator free of identifier
//! comparisons.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use tir_catalog::builtin;
use tir_core::QuestionId;

/// How a question's readiness signal is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewRule {
    /// Readiness follows the primary value's `is_updated` flag. The
    /// default for every question not listed in the table.
    #[default]
    Primary,
    /// Like `Primary`, but every primary edit also writes the computed
    /// flag into `pending_comment_reply_updated`, keeping the two flags
    /// equal. Used for the pending-comments question.
    PrimaryWithPendingMirror,
    /// Readiness follows `static_ceacr_reply_updated`: the question is
    /// addressed once its dedicated reply to the static review-committee
    /// comment is non-blank. The primary value is ignored.
    StaticCommentReply,
    /// Readiness follows `cas_follow_up_reply_updated`. The question has
    /// no primary-value semantics at all.
    FollowUpReply,
}

/// Question identifier → review rule.
///
/// Immutable once built. Unlisted identifiers resolve to
/// [`ReviewRule::Primary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPolicy {
    rules: BTreeMap<QuestionId, ReviewRule>,
}

impl ReviewPolicy {
    /// A policy with no special cases: every question follows the primary
    /// rule.
    pub fn uniform() -> Self {
        Self::default()
    }

    /// The standard questionnaire policy: binds the static-reply,
    /// pending-comments, and CAS follow-up questions of the built-in
    /// catalog.
    pub fn standard() -> Self {
        Self::uniform()
            .with_rule(builtin::STATIC_REPLY_QUESTION, ReviewRule::StaticCommentReply)
            .with_rule(
                builtin::PENDING_COMMENTS_QUESTION,
                ReviewRule::PrimaryWithPendingMirror,
            )
            .with_rule(builtin::CAS_FOLLOW_UP_QUESTION, ReviewRule::FollowUpReply)
    }

    /// Bind a rule to a question identifier.
    pub fn with_rule(mut self, id: impl Into<String>, rule: ReviewRule) -> Self {
        self.rules.insert(QuestionId::new(id), rule);
        self
    }

    /// The rule for a question; unlisted identifiers follow the primary
    /// rule.
    pub fn rule_for(&self, id: &QuestionId) -> ReviewRule {
        self.rules.get(id).copied().unwrap_or_default()
    }

    /// Iterate the explicitly bound rules in identifier order.
    pub fn bindings(&self) -> impl Iterator<Item = (&QuestionId, ReviewRule)> {
        self.rules.iter().map(|(id, rule)| (id, *rule))
    }
}
