//! # Areas Subcommand
//!
//! Lists the thematic areas a report can target, with their ratified
//! conventions and preselection.

use clap::Args;

use tir_catalog::builtin;

/// Arguments for the `tir areas` subcommand.
#[derive(Args, Debug)]
pub struct AreasArgs {
    /// Emit the area list as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the areas subcommand.
///
/// Returns exit code 0; the area list is static data.
pub fn run_areas(args: &AreasArgs) -> anyhow::Result<u8> {
    let areas = builtin::thematic_areas();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&areas)?);
        return Ok(0);
    }

    println!("Thematic areas ({}):", areas.len());
    for area in &areas {
        println!("  {:>2}. {}", area.id.as_u32(), area.title);
        let preselected = builtin::preselected_conventions(area);
        for convention in &area.conventions {
            let marker = if preselected.contains(convention) { "*" } else { " " };
            println!("      {marker} {convention}");
        }
    }
    if areas.iter().any(|a| !builtin::preselected_conventions(a).is_empty()) {
        println!("\n  * preselected when the area is opened");
    }

    Ok(0)
}
