//! Clean command - apply a cleaning action and save the result.

use std::path::{Path, PathBuf};

use colored::Colorize;
use vista::dataset::value::display;
use vista::{CleaningAction, Vista};

/// `data.json` -> `data.clean.json`
fn default_output(file: &Path) -> PathBuf {
    let stem = file.file_stem().unwrap_or_default().to_string_lossy();
    file.with_file_name(format!("{}.clean.json", stem))
}

pub fn run(
    vista: &Vista,
    file: PathBuf,
    action: CleaningAction,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = vista.load(&file)?;
    let profile = vista.profile(&dataset);

    if profile.is_clean() {
        println!("{} nothing to clean", "Note:".yellow());
    }

    let outcome = vista.clean_and_profile(&dataset, &profile, action)?;
    let output = output.unwrap_or_else(|| default_output(&file));
    outcome.dataset.save(&output)?;

    println!("{} {}", "Cleaned:".cyan().bold(), outcome.report.description());
    for change in &outcome.report.changes {
        println!(
            "  {} ({}): {} value(s) set to {}",
            change.column,
            change.inferred_type,
            change.values_filled,
            display(&change.fill_value).white().bold()
        );
    }

    let status = if outcome.profile.is_clean() {
        "clean".green()
    } else {
        "still has issues".yellow()
    };
    println!();
    println!("Wrote {} ({})", output.display(), status);

    Ok(())
}
