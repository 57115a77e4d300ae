pub mod launch;
pub mod list;
pub mod settings;

// Re-export the main command functions
pub use launch::{LaunchOutcome, cmd_launch, launch_by_name, launch_interactive};
pub use list::cmd_list;
pub use settings::cmd_settings;
