//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vista::CleaningAction;

/// Vista: profile, preview and clean tabular datasets
#[derive(Parser)]
#[command(name = "vista")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a JSON config file (fill policy, page size)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer column types and report missing values and duplicate rows
    Profile {
        /// Path to the dataset (JSON array of records)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove dirty rows or fill missing values
    Clean {
        /// Path to the dataset (JSON array of records)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Cleaning action
        #[arg(short, long)]
        action: ActionChoice,

        /// Output path (default: <file>.clean.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a range of rows
    Preview {
        /// Path to the dataset (JSON array of records)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// First row, inclusive
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,

        /// Last row, exclusive (default: start + page size)
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a sample employee dataset
    Sample {
        /// Number of rows
        #[arg(short, long, default_value = "100")]
        rows: usize,

        /// Blank some cells and add duplicate rows
        #[arg(long)]
        dirty: bool,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the HTTP API for uploading, previewing and cleaning a dataset
    Serve {
        /// Dataset to load at startup
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Port for web server
        #[arg(short, long, default_value = "3141")]
        port: u16,
    },
}

/// Cleaning action choice
#[derive(Clone, Copy, Debug)]
pub enum ActionChoice {
    /// Drop rows with missing values and repeated rows
    Remove,
    /// Replace missing values by column type
    Fill,
}

impl std::str::FromStr for ActionChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remove" | "drop" => Ok(ActionChoice::Remove),
            "fill" | "impute" => Ok(ActionChoice::Fill),
            _ => Err(format!("Unknown action: {}. Use remove or fill.", s)),
        }
    }
}

impl std::fmt::Display for ActionChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionChoice::Remove => write!(f, "remove"),
            ActionChoice::Fill => write!(f, "fill"),
        }
    }
}

impl From<ActionChoice> for CleaningAction {
    fn from(choice: ActionChoice) -> Self {
        match choice {
            ActionChoice::Remove => CleaningAction::Remove,
            ActionChoice::Fill => CleaningAction::Fill,
        }
    }
}
