//! Profile command - report column types, missing values and duplicates.

use std::path::PathBuf;

use colored::Colorize;
use vista::{ColumnType, Vista};

pub fn run(vista: &Vista, file: PathBuf, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = vista.load(&file)?;
    let profile = vista.profile(&dataset);

    if json_output {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "summary": profile.summary(),
            "missing_info": profile.missing_info(),
            "duplicates": profile.duplicate_rows,
            "columns": profile.columns,
            "fingerprint": profile.fingerprint,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Profile of".cyan().bold(),
        file.display().to_string().white()
    );
    println!();
    println!(
        "  Rows: {}  Columns: {}",
        dataset.len().to_string().white().bold(),
        dataset.column_count().to_string().white().bold()
    );
    println!();

    println!("{}", "Columns:".yellow().bold());
    let width = profile
        .columns
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);
    for column in &profile.columns {
        let kind = match column.inferred_type {
            ColumnType::Number => column.inferred_type.as_str().blue(),
            ColumnType::Date => column.inferred_type.as_str().magenta(),
            ColumnType::Text => column.inferred_type.as_str().white(),
        };
        let missing = if column.missing_count > 0 {
            format!("{} missing", column.missing_count).red()
        } else {
            "complete".green()
        };
        println!("  {:<width$}  {:<6}  {}", column.name, kind, missing, width = width);
    }
    println!();

    if profile.has_duplicates() {
        let shown: Vec<String> = profile
            .duplicate_rows
            .iter()
            .take(10)
            .map(|i| i.to_string())
            .collect();
        let more = if profile.duplicate_rows.len() > 10 { ", ..." } else { "" };
        println!(
            "{} {} ({}{})",
            "Duplicate rows:".yellow().bold(),
            profile.duplicate_rows.len().to_string().red(),
            shown.join(", "),
            more
        );
    } else {
        println!("{} {}", "Duplicate rows:".yellow().bold(), "none".green());
    }
    println!();

    if profile.is_clean() {
        println!("{}", "Dataset is clean.".green().bold());
    } else {
        println!(
            "Run {} or {} to clean it.",
            format!("vista clean {} --action remove", file.display()).cyan(),
            "--action fill".cyan()
        );
    }

    Ok(())
}
