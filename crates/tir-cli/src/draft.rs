//! # Draft Subcommand and Draft File Format
//!
//! A draft file is the CLI's stand-in for the browser form: the target
//! area, the convention selection, and per-question field edits. Drafts
//! are JSON or YAML, dispatched on file extension like catalog files.
//!
//! Applying a draft replays each field through the session's interaction
//! surface, so the update rules fire exactly as they would for live
//! edits; a draft that restates a prefill verbatim does not mark the
//! question as updated.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use tir_core::{AreaId, QuestionId};
use tir_session::ReportSession;

/// Per-question field edits in a draft file. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftAnswer {
    /// The primary response text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// The review-session label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceacr_session: Option<String>,
    /// Staff legal analysis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_analysis: Option<String>,
    /// Draft legal comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dlc_comment: Option<String>,
    /// Government reply to the session comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_reply: Option<String>,
    /// Reply to the static review-committee comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_ceacr_reply: Option<String>,
    /// Reply to the CAS follow-up conclusions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cas_follow_up_reply: Option<String>,
}

/// A report draft: one area's worth of offline edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// The thematic area the draft targets.
    pub area: AreaId,
    /// The desired active convention selection. When absent, the area's
    /// preselection stands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conventions: Option<Vec<String>>,
    /// Field edits keyed by question identifier.
    #[serde(default)]
    pub answers: BTreeMap<QuestionId, DraftAnswer>,
}

impl Draft {
    /// Load a draft from a `.json`, `.yaml`, or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read draft {}", path.display()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON draft {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
                .with_context(|| format!("invalid YAML draft {}", path.display())),
            _ => bail!(
                "unsupported draft file format: {} (expected .json, .yaml, or .yml)",
                path.display()
            ),
        }
    }

    /// Replay the draft's edits into an open session.
    ///
    /// The draft's area must match the session's. Conventions listed in
    /// the draft become the active selection; question edits go through
    /// the per-field setters in catalog-independent identifier order.
    pub fn apply(&self, session: &mut ReportSession) -> Result<()> {
        if self.area != session.area().id {
            bail!(
                "draft targets area {} but the session is open on area {}",
                self.area,
                session.area().id
            );
        }

        if let Some(wanted) = &self.conventions {
            let current: Vec<_> = session.active_conventions().to_vec();
            for label in &current {
                if !wanted.iter().any(|w| w == label.as_str()) {
                    session.toggle_convention(label)?;
                }
            }
            for label in wanted {
                let label = tir_core::ConventionLabel::new(label.clone());
                if !session.is_convention_active(&label) {
                    session.toggle_convention(&label)?;
                }
            }
        }

        for (id, fields) in &self.answers {
            if let Some(v) = &fields.value {
                session.set_value(id, v.clone())?;
            }
            if let Some(v) = &fields.ceacr_session {
                session.set_ceacr_session(id, v.clone())?;
            }
            if let Some(v) = &fields.legal_analysis {
                session.set_legal_analysis(id, v.clone())?;
            }
            if let Some(v) = &fields.dlc_comment {
                session.set_dlc_comment(id, v.clone())?;
            }
            if let Some(v) = &fields.government_reply {
                session.set_government_reply(id, v.clone())?;
            }
            if let Some(v) = &fields.static_ceacr_reply {
                session.set_static_ceacr_reply(id, v.clone())?;
            }
            if let Some(v) = &fields.cas_follow_up_reply {
                session.set_follow_up_reply(id, v.clone())?;
            }
        }

        tracing::debug!(
            area = %self.area,
            edited = self.answers.len(),
            "draft applied to session"
        );
        Ok(())
    }
}

/// Arguments for the `tir draft` subcommand.
#[derive(Args, Debug)]
pub struct DraftArgs {
    /// Thematic area the skeleton targets (1-15).
    #[arg(long)]
    pub area: u32,

    /// Write the skeleton to a file instead of stdout. Extension picks
    /// the format; stdout defaults to YAML.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a catalog file (JSON or YAML) overriding the built-in one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// Execute the draft subcommand: emit a skeleton with every catalog
/// question and empty field edits.
///
/// Returns exit code 0 on success, 2 on operational error.
pub fn run_draft(args: &DraftArgs) -> Result<u8> {
    let area = match tir_catalog::builtin::thematic_area(args.area) {
        Some(area) => area,
        None => {
            println!("ERROR: no thematic area with id {}", args.area);
            return Ok(2);
        }
    };

    let catalog = crate::catalog_from_file(args.catalog.as_deref())?;
    let skeleton = Draft {
        area: area.id,
        conventions: None,
        answers: catalog
            .question_ids()
            .into_iter()
            .map(|id| (id, DraftAnswer::default()))
            .collect(),
    };

    match &args.output {
        Some(path) => {
            let rendered = match path.extension().and_then(|e| e.to_str()) {
                Some("json") => serde_json::to_string_pretty(&skeleton)?,
                Some("yaml") | Some("yml") => serde_yaml::to_string(&skeleton)?,
                _ => bail!(
                    "unsupported draft file format: {} (expected .json, .yaml, or .yml)",
                    path.display()
                ),
            };
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write draft {}", path.display()))?;
            println!("Wrote draft skeleton for area {} to {}", area.id, path.display());
        }
        None => print!("{}", serde_yaml::to_string(&skeleton)?),
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tir_catalog::builtin;
    use tir_form::ReviewPolicy;

    fn open_area_9() -> ReportSession {
        ReportSession::open(
            builtin::thematic_area(9).unwrap(),
            &builtin::catalog(),
            &builtin::prefills(),
            ReviewPolicy::standard(),
        )
    }

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw)
    }

    #[test]
    fn test_draft_yaml_roundtrip() {
        let draft = Draft {
            area: AreaId(9),
            conventions: Some(vec!["C.102".to_string()]),
            answers: [(
                qid("R002"),
                DraftAnswer {
                    value: Some("answered".to_string()),
                    ..DraftAnswer::default()
                },
            )]
            .into_iter()
            .collect(),
        };

        let yaml = serde_yaml::to_string(&draft).unwrap();
        let parsed: Draft = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, draft);
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("draft.json");
        std::fs::write(&json_path, r#"{"area": 9}"#).unwrap();
        assert_eq!(Draft::load(&json_path).unwrap().area, AreaId(9));

        let yaml_path = dir.path().join("draft.yaml");
        std::fs::write(&yaml_path, "area: 3\n").unwrap();
        assert_eq!(Draft::load(&yaml_path).unwrap().area, AreaId(3));

        let toml_path = dir.path().join("draft.toml");
        std::fs::write(&toml_path, "area = 9").unwrap();
        assert!(Draft::load(&toml_path).is_err());
    }

    #[test]
    fn test_apply_replays_update_rules() {
        let mut session = open_area_9();
        let prefill = session.store().baseline(&qid("R001")).to_string();

        let draft = Draft {
            area: AreaId(9),
            conventions: None,
            answers: [
                (
                    qid("R001"),
                    DraftAnswer {
                        value: Some(prefill),
                        ..DraftAnswer::default()
                    },
                ),
                (
                    qid("R002"),
                    DraftAnswer {
                        value: Some("a real answer".to_string()),
                        government_reply: Some("noted".to_string()),
                        ..DraftAnswer::default()
                    },
                ),
            ]
            .into_iter()
            .collect(),
        };

        draft.apply(&mut session).unwrap();

        // Restating the prefill is not an update; a fresh answer is.
        assert!(!session.store().get(&qid("R001")).is_updated);
        assert!(session.store().get(&qid("R002")).is_updated);
        assert_eq!(session.store().get(&qid("R002")).government_reply, "noted");
    }

    #[test]
    fn test_apply_sets_convention_selection_exactly() {
        let mut session = open_area_9();

        let draft = Draft {
            area: AreaId(9),
            conventions: Some(vec!["C.183".to_string(), "C.130".to_string()]),
            answers: BTreeMap::new(),
        };
        draft.apply(&mut session).unwrap();

        let active: Vec<&str> = session.active_conventions().iter().map(|c| c.as_str()).collect();
        assert!(active.contains(&"C.183"));
        assert!(active.contains(&"C.130"));
        assert!(!active.contains(&"C.102"));
    }

    #[test]
    fn test_apply_without_conventions_keeps_preselection() {
        let mut session = open_area_9();
        let draft = Draft {
            area: AreaId(9),
            conventions: None,
            answers: BTreeMap::new(),
        };
        draft.apply(&mut session).unwrap();
        assert_eq!(session.active_conventions().len(), 2);
    }

    #[test]
    fn test_apply_rejects_area_mismatch() {
        let mut session = open_area_9();
        let draft = Draft {
            area: AreaId(3),
            conventions: None,
            answers: BTreeMap::new(),
        };
        assert!(draft.apply(&mut session).is_err());
    }

    #[test]
    fn test_run_draft_writes_skeleton_with_all_questions() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("skeleton.yaml");

        let args = DraftArgs {
            area: 9,
            output: Some(out.clone()),
            catalog: None,
        };
        assert_eq!(run_draft(&args).unwrap(), 0);

        let skeleton = Draft::load(&out).unwrap();
        assert_eq!(skeleton.area, AreaId(9));
        assert_eq!(skeleton.answers.len(), builtin::catalog().question_count());
    }

    #[test]
    fn test_run_draft_unknown_area_is_operational_error() {
        let args = DraftArgs {
            area: 99,
            output: None,
            catalog: None,
        };
        assert_eq!(run_draft(&args).unwrap(), 2);
    }
}
