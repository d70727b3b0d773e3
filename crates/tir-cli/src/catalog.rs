//! # Catalog Subcommand
//!
//! Prints the sectioned question tree, either the built-in catalog or
//! one loaded from a JSON/YAML file.

use std::path::PathBuf;

use clap::Args;

/// Arguments for the `tir catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Path to a catalog file (JSON or YAML) overriding the built-in one.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Path to a prefill file overriding the built-in one.
    #[arg(long, value_name = "PATH")]
    pub prefills: Option<PathBuf>,

    /// Emit the catalog as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print full question texts instead of identifiers only.
    #[arg(long)]
    pub full: bool,
}

/// Execute the catalog subcommand.
///
/// Returns exit code 0 on success, 2 on operational error (unreadable or
/// malformed catalog file).
pub fn run_catalog(args: &CatalogArgs) -> anyhow::Result<u8> {
    let catalog = crate::catalog_from_file(args.catalog.as_deref())?;
    let prefills = crate::prefills_from_file(args.prefills.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(0);
    }

    println!("{} questions in {} sections", catalog.question_count(), catalog.sections.len());
    for section in &catalog.sections {
        println!("\n{}", section.title);
        for sub in &section.sub_sections {
            if let Some(title) = &sub.title {
                println!("  {title}");
            }
            if let Some(topic) = &sub.topic {
                println!("  [{topic}]");
            }
            for question in &sub.questions {
                let marker = if prefills.get(&question.id).is_some() { "*" } else { " " };
                if args.full {
                    println!("  {marker} {}: {}", question.id, question.text);
                    if let Some(provisions) = &question.provisions {
                        println!("      ({provisions})");
                    }
                } else {
                    println!("  {marker} {}", question.id);
                }
            }
        }
    }
    if !prefills.is_empty() {
        println!("\n  * prefilled from the previous reporting cycle");
    }

    Ok(0)
}
