mod aggregator;
mod classifier;
mod cli;
mod error;
mod exporter;
mod fmt;
mod importer;
mod logging;
mod models;
mod settings;
mod validator;

use clap::Parser;

use cli::{Cli, Commands};
use settings::PathOverrides;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::setup_logging(cli.verbose) {
        eprintln!("Warning: could not start logging: {e}");
    }

    let overrides = PathOverrides::from(cli.paths);
    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cli::run::run(&overrides),
        Commands::Check => cli::check::run(&overrides),
        Commands::Init => cli::init::run(&overrides),
        Commands::Paths => cli::paths::run(&overrides),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
