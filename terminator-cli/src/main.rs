use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use terminator::app::App;
use terminator::cli::{Cli, Commands};
use terminator::cmd::{LaunchOutcome, cmd_launch, cmd_list, cmd_settings};
use terminator::config::Config;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    info!("Starting terminator");

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli);

    // Load configuration
    let config_path = cli.config.map(PathBuf::from);
    let config = Config::load_from_path(config_path)?;

    let app = App::new(config, cli.socket)?;

    match cli.command {
        Some(Commands::Launch { name }) => launch(&app, name.as_deref()),
        Some(Commands::List { json }) => cmd_list(&app, json),
        Some(Commands::Settings) => cmd_settings(&app),
        None => {
            info!("No command specified, launching interactively");
            launch(&app, None)
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn launch(app: &App, name: Option<&str>) -> Result<()> {
    match cmd_launch(app, name)? {
        LaunchOutcome::Launched(handle) => {
            println!("Launched terminal: {}", handle.name);
        }
        outcome => debug!("Launch finished without a terminal: {:?}", outcome),
    }
    Ok(())
}
