//! # Review Subcommand
//!
//! Runs the advisory readiness scan over a draft and prints the
//! attention list. The exit code distinguishes "fully addressed" from
//! "items pending" for scripting, but pending items never block a
//! later `tir submit` of the same draft.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use tir_core::AreaId;

use crate::draft::Draft;

/// Arguments for the `tir review` subcommand.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Thematic area to review (1-15). Defaults to the draft's area.
    #[arg(long)]
    pub area: Option<u32>,

    /// Path to a draft file (JSON or YAML) to replay before scanning.
    #[arg(long, value_name = "PATH")]
    pub draft: Option<PathBuf>,

    /// Path to a catalog file overriding the built-in one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Path to a prefill file overriding the built-in one.
    #[arg(long, value_name = "PATH")]
    pub prefills: Option<PathBuf>,

    /// Emit the attention list as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the review subcommand.
///
/// Returns exit code 0 when every question is addressed, 1 when the
/// attention list is non-empty, 2 on operational error.
pub fn run_review(args: &ReviewArgs) -> Result<u8> {
    let draft = args.draft.as_deref().map(Draft::load).transpose()?;

    let area_id = match area_id_from(args.area, draft.as_ref()) {
        Some(id) => id,
        None => {
            println!("Usage: tir review --area <ID> [--draft PATH]");
            return Ok(2);
        }
    };

    let mut desk = crate::desk_from_files(args.catalog.as_deref(), args.prefills.as_deref())?;
    let session = match desk.open_area(area_id) {
        Ok(session) => session,
        Err(e) => {
            println!("ERROR: {e}");
            return Ok(2);
        }
    };

    if let Some(draft) = &draft {
        draft.apply(session)?;
    }

    let attention = session.begin_submission()?.clone();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&attention)?);
    } else {
        print_attention(area_id, &attention);
    }

    if attention.is_fully_addressed() {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn area_id_from(flag: Option<u32>, draft: Option<&Draft>) -> Option<AreaId> {
    flag.map(AreaId).or_else(|| draft.map(|d| d.area))
}

fn print_attention(area: AreaId, attention: &tir_review::ReadinessReport) {
    if attention.is_fully_addressed() {
        println!("Area {}: all questions addressed.", area.as_u32());
        return;
    }

    println!(
        "Area {}: {} question(s) still need attention:",
        area.as_u32(),
        attention.len()
    );
    for item in &attention.items {
        println!("  {} — {}", item.question, item.reason);
    }
    println!("\nAdvisory only: submission proceeds regardless.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_draft(dir: &std::path::Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_review_fresh_area_reports_pending() {
        let args = ReviewArgs {
            area: Some(9),
            draft: None,
            catalog: None,
            prefills: None,
            json: false,
        };
        assert_eq!(run_review(&args).unwrap(), 1);
    }

    #[test]
    fn test_review_without_area_or_draft_is_usage_error() {
        let args = ReviewArgs {
            area: None,
            draft: None,
            catalog: None,
            prefills: None,
            json: false,
        };
        assert_eq!(run_review(&args).unwrap(), 2);
    }

    #[test]
    fn test_review_takes_area_from_draft() {
        let dir = tempfile::tempdir().unwrap();
        let draft = write_draft(
            dir.path(),
            "draft.yaml",
            "area: 9\nanswers:\n  R002:\n    value: answered\n",
        );

        let args = ReviewArgs {
            area: None,
            draft: Some(draft),
            catalog: None,
            prefills: None,
            json: true,
        };
        // Still pending overall, but the draft's area carried.
        assert_eq!(run_review(&args).unwrap(), 1);
    }

    #[test]
    fn test_review_unknown_area_is_operational_error() {
        let args = ReviewArgs {
            area: Some(99),
            draft: None,
            catalog: None,
            prefills: None,
            json: false,
        };
        assert_eq!(run_review(&args).unwrap(), 2);
    }

    #[test]
    fn test_review_fully_addressed_draft_exits_zero() {
        let dir = tempfile::tempdir().unwrap();

        // A one-question catalog keeps the draft small.
        let catalog = write_draft(
            dir.path(),
            "catalog.yaml",
            "sections:\n  - title: SECTION 1\n    sub_sections:\n      - questions:\n          - id: R001\n            text: List the legislation.\n",
        );
        let draft = write_draft(
            dir.path(),
            "draft.yaml",
            "area: 1\nanswers:\n  R001:\n    value: fresh answer\n",
        );

        let args = ReviewArgs {
            area: None,
            draft: Some(draft),
            catalog: Some(catalog),
            prefills: None,
            json: false,
        };
        assert_eq!(run_review(&args).unwrap(), 0);
    }
}
