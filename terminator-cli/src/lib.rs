pub mod app;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod kitty;
pub mod params;
pub mod picker;
pub mod substitute;
pub mod ui;
pub mod utils;

// Re-export commonly used types and functions
pub use app::App;
pub use config::{Config, EnvMap, TerminalProfile};
pub use substitute::{substitute, substitute_str};
