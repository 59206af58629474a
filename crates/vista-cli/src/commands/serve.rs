//! Serve command - run the HTTP API.

use std::path::PathBuf;

use colored::Colorize;
use vista::Vista;

use crate::server::{app, state::AppState};

pub fn run(vista: Vista, file: Option<PathBuf>, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = match &file {
        Some(path) => Some(vista.load(path)?),
        None => None,
    };
    let state = AppState::new(vista, dataset);

    let url = format!("http://localhost:{}", port);
    println!();
    println!(
        "{} {}",
        "Starting Vista server at".cyan().bold(),
        url.white().bold()
    );
    println!();
    match &file {
        Some(path) => println!("  Dataset: {}", path.display()),
        None => println!("  Dataset: none (POST {}/api/upload)", url),
    }
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, port))
}
