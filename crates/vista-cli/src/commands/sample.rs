//! Sample command - write a generated employee dataset.

use std::path::PathBuf;

use colored::Colorize;
use vista::sample::{SampleOptions, generate};

pub fn run(
    rows: usize,
    dirty: bool,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = SampleOptions { rows, dirty, seed };
    let dataset = generate(&options);

    match output {
        Some(path) => {
            dataset.save(&path)?;
            println!(
                "{} {} rows to {}",
                "Wrote".green().bold(),
                dataset.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&dataset)?),
    }

    Ok(())
}
