//! # tir-cli — TIR Stack Command-Line Interface
//!
//! Provides the `tir` command-line interface over the reporting desk:
//! the same flow the questionnaire front end walks, driven from files
//! instead of a browser.
//!
//! ## Subcommands
//!
//! - `tir areas` — list the thematic areas and their conventions.
//! - `tir catalog` — print the sectioned question catalog.
//! - `tir draft` — emit a report draft skeleton for an area.
//! - `tir review` — run the advisory readiness scan over a draft.
//! - `tir submit` — submit a draft and print the receipt.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to the domain crates; no form or readiness
//!   semantics live here.
//! - The readiness scan is advisory everywhere: `review` reports exit
//!   code 1 when questions still need attention, but `submit` never
//!   refuses a draft because of them.

pub mod areas;
pub mod catalog;
pub mod draft;
pub mod review;
pub mod submit;

use std::path::Path;

use anyhow::{Context, Result};

use tir_catalog::{builtin, loader, Catalog, PrefillMap};
use tir_form::ReviewPolicy;
use tir_session::ReportingDesk;

/// Build a reporting desk from optional catalog and prefill files,
/// falling back to the built-in dataset for whichever is absent.
pub fn desk_from_files(catalog: Option<&Path>, prefills: Option<&Path>) -> Result<ReportingDesk> {
    Ok(ReportingDesk::new(
        builtin::thematic_areas(),
        catalog_from_file(catalog)?,
        prefills_from_file(prefills)?,
        ReviewPolicy::standard(),
    ))
}

/// Load a catalog from an optional file, defaulting to the built-in one.
pub fn catalog_from_file(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => loader::load_catalog(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(builtin::catalog()),
    }
}

/// Load a prefill map from an optional file, defaulting to the built-in one.
pub fn prefills_from_file(path: Option<&Path>) -> Result<PrefillMap> {
    match path {
        Some(path) => loader::load_prefills(path)
            .with_context(|| format!("failed to load prefills from {}", path.display())),
        None => Ok(builtin::prefills()),
    }
}
