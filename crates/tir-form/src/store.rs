//! # Answer Store
//!
//! The central mutable structure of a reporting session: question
//! identifier → [`Answer`], plus the prefill baseline and the review
//! policy the mutations consult.
//!
//! ## Coverage Invariant
//!
//! Initialization creates exactly one record per catalog question and no
//! record is ever deleted. Reads tolerate unknown identifiers anyway —
//! [`AnswerStore::get`] resolves them to a shared zero-value record, so
//! consumers never branch on "missing". Mutations on an unknown
//! identifier create a default record first; the surface is total and
//! cannot fail.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use tir_catalog::{Catalog, PrefillMap};
use tir_core::QuestionId;

use crate::answer::Answer;
use crate::policy::{ReviewPolicy, ReviewRule};
use crate::update;

fn default_answer() -> &'static Answer {
    static DEFAULT: OnceLock<Answer> = OnceLock::new();
    DEFAULT.get_or_init(Answer::default)
}

/// The per-session answer store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, Answer>,
    baseline: PrefillMap,
    policy: ReviewPolicy,
}

impl AnswerStore {
    /// Build a fresh store covering every question in the catalog.
    ///
    /// `value` starts from the prefill baseline where one exists, empty
    /// otherwise; every flag starts false. The baseline is retained: it is
    /// what later edits are compared against.
    pub fn initialize(catalog: &Catalog, prefills: &PrefillMap, policy: ReviewPolicy) -> Self {
        let answers = catalog
            .question_ids()
            .into_iter()
            .map(|id| {
                let answer = match prefills.get(&id) {
                    Some(text) => Answer::prefilled(text),
                    None => Answer::default(),
                };
                (id, answer)
            })
            .collect();

        Self {
            answers,
            baseline: prefills.clone(),
            policy,
        }
    }

    /// The record for a question. Unknown identifiers resolve to a shared
    /// zero-value record rather than failing.
    pub fn get(&self, id: &QuestionId) -> &Answer {
        self.answers.get(id).unwrap_or_else(|| default_answer())
    }

    /// The prefill baseline for a question (empty when none was supplied).
    pub fn baseline(&self, id: &QuestionId) -> &str {
        self.baseline.get(id).unwrap_or("")
    }

    /// The review policy this store was initialized with.
    pub fn policy(&self) -> &ReviewPolicy {
        &self.policy
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate records in identifier order.
    pub fn answers(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers.iter()
    }

    // ─── Mutation surface ────────────────────────────────────────────
    //
    // Each operation touches exactly one record and applies the
    // update-detection rules where applicable. All are total: any id,
    // any text.

    /// Set the primary response text, recomputing `is_updated` against the
    /// prefill baseline. On a question bound to the pending-mirror rule,
    /// the computed flag is also written into
    /// `pending_comment_reply_updated`.
    pub fn set_value(&mut self, id: &QuestionId, text: impl Into<String>) {
        let text = text.into();
        let updated = update::value_updated(self.baseline(id), &text);
        let mirror = self.policy.rule_for(id) == ReviewRule::PrimaryWithPendingMirror;

        let answer = self.entry(id);
        answer.value = text;
        answer.is_updated = updated;
        if mirror {
            answer.pending_comment_reply_updated = updated;
        }
    }

    /// Set the review-session label. An empty label closes the gate again.
    pub fn set_ceacr_session(&mut self, id: &QuestionId, session: impl Into<String>) {
        let session = session.into();
        self.entry(id).ceacr_session = if session.is_empty() { None } else { Some(session) };
    }

    /// Set the staff legal-analysis text. Never affects readiness.
    pub fn set_legal_analysis(&mut self, id: &QuestionId, text: impl Into<String>) {
        self.entry(id).legal_analysis = text.into();
    }

    /// Set the draft legal comment. Never affects readiness.
    pub fn set_dlc_comment(&mut self, id: &QuestionId, text: impl Into<String>) {
        self.entry(id).dlc_comment = text.into();
    }

    /// Set the government reply to the session comment. Never affects
    /// readiness.
    pub fn set_government_reply(&mut self, id: &QuestionId, text: impl Into<String>) {
        self.entry(id).government_reply = text.into();
    }

    /// Set the reply to the static review-committee comment, recomputing
    /// its updated flag (non-blank after trimming).
    pub fn set_static_ceacr_reply(&mut self, id: &QuestionId, text: impl Into<String>) {
        let text = text.into();
        let updated = update::reply_updated(&text);
        let answer = self.entry(id);
        answer.static_ceacr_reply = text;
        answer.static_ceacr_reply_updated = updated;
    }

    /// Set the reply to the CAS follow-up conclusions, recomputing its
    /// updated flag (non-blank after trimming).
    pub fn set_follow_up_reply(&mut self, id: &QuestionId, text: impl Into<String>) {
        let text = text.into();
        let updated = update::reply_updated(&text);
        let answer = self.entry(id);
        answer.cas_follow_up_reply = text;
        answer.cas_follow_up_reply_updated = updated;
    }

    /// The mutable record for an id, created at its default if absent.
    fn entry(&mut self, id: &QuestionId) -> &mut Answer {
        self.answers.entry(id.clone()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tir_catalog::builtin;

    fn standard_store() -> AnswerStore {
        AnswerStore::initialize(
            &builtin::catalog(),
            &builtin::prefills(),
            ReviewPolicy::standard(),
        )
    }

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw)
    }

    // ── initialization ───────────────────────────────────────────────

    #[test]
    fn test_initialize_covers_every_catalog_question() {
        let catalog = builtin::catalog();
        let store = standard_store();
        assert_eq!(store.len(), catalog.question_count());
        for id in catalog.question_ids() {
            assert!(!store.get(&id).is_updated);
        }
    }

    #[test]
    fn test_initialize_applies_prefills() {
        let store = standard_store();
        assert_eq!(store.get(&qid("R005")).value, "No temporary exceptions.");
        assert!(!store.get(&qid("R005")).is_updated);
        assert_eq!(store.get(&qid("R002")).value, "");
    }

    #[test]
    fn test_get_unknown_id_yields_default_record() {
        let store = standard_store();
        let answer = store.get(&qid("R999"));
        assert_eq!(answer, &Answer::default());
    }

    // ── primary value edits ──────────────────────────────────────────

    #[test]
    fn test_set_value_blank_start_question() {
        let mut store = standard_store();
        let id = qid("R002");

        store.set_value(&id, "Communicated to the chamber of labour.");
        assert!(store.get(&id).is_updated);

        store.set_value(&id, "   ");
        assert!(!store.get(&id).is_updated);
    }

    #[test]
    fn test_set_value_prefilled_question_requires_divergence() {
        let mut store = standard_store();
        let id = qid("R005");

        // Retyping the prefill exactly is not an update.
        store.set_value(&id, "No temporary exceptions.");
        assert!(!store.get(&id).is_updated);

        store.set_value(&id, "One exception remains in force.");
        assert!(store.get(&id).is_updated);

        // Reverting to the prefill un-marks (fully reversible).
        store.set_value(&id, "No temporary exceptions.");
        assert!(!store.get(&id).is_updated);
    }

    #[test]
    fn test_set_value_trims_for_comparison_but_stores_verbatim() {
        let mut store = standard_store();
        let id = qid("R007");

        store.set_value(&id, "  Not applied.\n");
        assert_eq!(store.get(&id).value, "  Not applied.\n");
        assert!(!store.get(&id).is_updated);
    }

    #[test]
    fn test_set_value_idempotent() {
        let mut store = standard_store();
        let id = qid("R003");

        store.set_value(&id, "Observations received from the trade unions.");
        let first = store.get(&id).clone();
        store.set_value(&id, "Observations received from the trade unions.");
        assert_eq!(store.get(&id), &first);
    }

    #[test]
    fn test_set_value_on_unknown_id_creates_record() {
        let mut store = standard_store();
        let id = qid("R999");
        store.set_value(&id, "late addition");
        assert!(store.get(&id).is_updated);
        assert_eq!(store.len(), builtin::catalog().question_count() + 1);
    }

    // ── pending-comments mirror ──────────────────────────────────────

    #[test]
    fn test_pending_mirror_follows_primary_flag() {
        let mut store = standard_store();
        let id = qid(builtin::PENDING_COMMENTS_QUESTION);

        store.set_value(&id, "Reply to the pending comment.");
        let answer = store.get(&id);
        assert!(answer.is_updated);
        assert!(answer.pending_comment_reply_updated);

        store.set_value(&id, "");
        let answer = store.get(&id);
        assert!(!answer.is_updated);
        assert!(!answer.pending_comment_reply_updated);
    }

    #[test]
    fn test_mirror_not_applied_to_ordinary_questions() {
        let mut store = standard_store();
        let id = qid("R002");
        store.set_value(&id, "text");
        assert!(!store.get(&id).pending_comment_reply_updated);
    }

    // ── dedicated reply fields ───────────────────────────────────────

    #[test]
    fn test_static_reply_independent_of_primary() {
        let mut store = standard_store();
        let id = qid(builtin::STATIC_REPLY_QUESTION);

        store.set_static_ceacr_reply(&id, "The threshold affects 3,400 workers.");
        let answer = store.get(&id);
        assert!(answer.static_ceacr_reply_updated);
        assert!(!answer.is_updated);

        store.set_static_ceacr_reply(&id, "   ");
        assert!(!store.get(&id).static_ceacr_reply_updated);
    }

    #[test]
    fn test_follow_up_reply_flag() {
        let mut store = standard_store();
        let id = qid(builtin::CAS_FOLLOW_UP_QUESTION);

        store.set_follow_up_reply(&id, "ok");
        assert!(store.get(&id).cas_follow_up_reply_updated);

        store.set_follow_up_reply(&id, "");
        assert!(!store.get(&id).cas_follow_up_reply_updated);
    }

    // ── gated auxiliary fields ───────────────────────────────────────

    #[test]
    fn test_auxiliary_fields_never_touch_flags() {
        let mut store = standard_store();
        let id = qid("R004");

        store.set_ceacr_session(&id, "CEACR 2026");
        store.set_legal_analysis(&id, "Analysis text.");
        store.set_dlc_comment(&id, "Draft comment.");
        store.set_government_reply(&id, "Reply text.");

        let answer = store.get(&id);
        assert!(answer.has_review_session());
        assert_eq!(answer.legal_analysis, "Analysis text.");
        assert_eq!(answer.dlc_comment, "Draft comment.");
        assert_eq!(answer.government_reply, "Reply text.");
        assert!(!answer.is_updated);
        assert!(!answer.static_ceacr_reply_updated);
    }

    #[test]
    fn test_clearing_session_closes_gate() {
        let mut store = standard_store();
        let id = qid("R004");
        store.set_ceacr_session(&id, "CEACR 2026");
        store.set_ceacr_session(&id, "");
        assert!(!store.get(&id).has_review_session());
    }

    // ── serialization ────────────────────────────────────────────────

    #[test]
    fn test_store_serde_roundtrip() {
        let mut store = standard_store();
        store.set_value(&qid("R002"), "answered");
        let json = serde_json::to_string(&store).unwrap();
        let parsed: AnswerStore = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, store);
    }
}
