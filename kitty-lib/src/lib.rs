pub mod commands;
pub mod executor;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use commands::focus_window::KittenFocusWindowCommand;
pub use commands::launch::KittenLaunchCommand;
pub use executor::{CommandExecutor, KittyExecutor, MockExecutor};
pub use types::{KittyCommandResult, KittyLaunchResponse};
