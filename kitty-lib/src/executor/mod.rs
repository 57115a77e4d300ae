pub mod kitty_executor;
pub mod mock_executor;

use crate::commands::focus_window::KittenFocusWindowCommand;
use crate::commands::launch::KittenLaunchCommand;
use crate::types::{KittyCommandResult, KittyLaunchResponse};
use anyhow::Result;

/// Remote-control operations the launcher needs from kitty.
pub trait CommandExecutor {
    fn launch(
        &self,
        command: KittenLaunchCommand,
    ) -> Result<KittyCommandResult<KittyLaunchResponse>>;
    fn focus_window(&self, command: KittenFocusWindowCommand) -> Result<KittyCommandResult<()>>;
}

pub use kitty_executor::KittyExecutor;
pub use mock_executor::MockExecutor;
