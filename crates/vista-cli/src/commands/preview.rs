//! Preview command - print one page of rows.

use std::path::PathBuf;

use colored::Colorize;
use vista::dataset::value::display;
use vista::{PageRequest, Vista};

/// Longest cell shown in the table view.
const MAX_CELL_WIDTH: usize = 24;

fn truncate(s: String) -> String {
    if s.chars().count() <= MAX_CELL_WIDTH {
        return s;
    }
    let head: String = s.chars().take(MAX_CELL_WIDTH - 1).collect();
    format!("{}…", head)
}

pub fn run(
    vista: &Vista,
    file: PathBuf,
    start: i64,
    end: Option<i64>,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = vista.load(&file)?;
    let page = vista.preview(&dataset, PageRequest { start, end });

    if json_output {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    let header: Vec<String> = page
        .columns
        .iter()
        .map(|c| format!("{} ({})", c.name, c.inferred_type))
        .collect();
    let cells: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|row| row.values().map(|v| truncate(display(v))).collect())
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: &[String]| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<w$}", v, w = w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(&header).cyan().bold());
    for row in &cells {
        println!("{}", line(row));
    }
    println!();
    println!(
        "Rows {}..{} of {}{}",
        page.start,
        page.end,
        page.total_rows,
        if page.has_more { " (more available)".yellow().to_string() } else { String::new() }
    );

    Ok(())
}
