mod cli;
mod commands;
mod error;
mod fetch;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("pdbview CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let command_result = match cli.command {
        Commands::Fetch(args) => {
            info!("Dispatching to 'fetch' command.");
            commands::fetch::run(args).await
        }
        Commands::Prepare(args) => {
            info!("Dispatching to 'prepare' command.");
            commands::prepare::run(args).await
        }
    };

    if let Err(e) = &command_result {
        error!("Command failed: {}", e);
    }
    command_result
}
