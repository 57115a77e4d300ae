use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "terminator")]
#[command(about = "Launch preconfigured terminals in kitty")]
pub struct Cli {
    /// Path to settings file
    #[arg(short, long, env = "TERMINATOR_CONFIG")]
    pub config: Option<String>,

    /// Kitty remote control socket, overriding settings and KITTY_LISTEN_ON
    #[arg(short, long)]
    pub socket: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch a terminal (interactive selection when no name is given)
    #[command(alias = "l")]
    Launch {
        /// Name of the terminal profile to launch
        name: Option<String>,
    },
    /// List configured terminals
    #[command(alias = "ls")]
    List {
        /// Print the profiles as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the settings file in an editor tab
    Settings,
}
