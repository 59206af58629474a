//! Vista CLI - profile, preview and clean tabular datasets.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};
use vista::{Vista, VistaConfig};

/// Install the tracing subscriber. `RUST_LOG` wins over `--verbose`.
/// Logs go to stderr so `--json` output stays parseable.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_vista(cli: &Cli) -> Result<Vista, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => VistaConfig::load(path)?,
        None => VistaConfig::default(),
    };
    Ok(Vista::with_config(config)?)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_vista(&cli).and_then(|vista| match cli.command {
        Commands::Profile { file, json } => commands::profile::run(&vista, file, json),

        Commands::Clean {
            file,
            action,
            output,
        } => commands::clean::run(&vista, file, action.into(), output),

        Commands::Preview {
            file,
            start,
            end,
            json,
        } => commands::preview::run(&vista, file, start, end, json),

        Commands::Sample {
            rows,
            dirty,
            seed,
            output,
        } => commands::sample::run(rows, dirty, seed, output),

        Commands::Serve { file, port } => commands::serve::run(vista, file, port),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
