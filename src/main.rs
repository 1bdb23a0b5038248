//! Entry point: parse CLI, set up logging, dispatch to command handlers.

use clap::Parser;
use nba_betting_db::{
    cli::{Commands, NbaBettingDb},
    commands::{init::handle_init, setup::handle_setup, verify::handle_verify},
    resolve_db_path, SetupConfig,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = NbaBettingDb::parse();

    // RUST_LOG wins over --verbose when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if app.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config =
        SetupConfig::new(resolve_db_path(app.db_path)).with_foreign_keys(app.foreign_keys);

    match app.command.unwrap_or(Commands::Setup) {
        Commands::Setup => handle_setup(&config, app.json)?,
        Commands::Init => handle_init(&config, app.json)?,
        Commands::Verify => handle_verify(&config.db_path, app.json)?,
    }

    Ok(())
}
