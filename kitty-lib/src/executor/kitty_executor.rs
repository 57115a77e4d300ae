use anyhow::{Context, Result};
use log::{debug, error};
use std::process::{Command, Output};

use crate::commands::focus_window::KittenFocusWindowCommand;
use crate::commands::launch::KittenLaunchCommand;
use crate::executor::CommandExecutor;
use crate::types::{KittyCommandResult, KittyLaunchResponse};
use crate::utils::resolve_socket;

pub struct KittyExecutor {
    socket: Option<String>,
}

impl KittyExecutor {
    pub fn new() -> Self {
        Self::with_socket(None)
    }

    pub fn with_socket(socket: Option<&str>) -> Self {
        Self {
            socket: resolve_socket(socket),
        }
    }

    fn remote_args(&self, action: &str) -> Vec<String> {
        let mut args = vec!["@".to_string()];
        if let Some(socket) = &self.socket {
            args.push(format!("--to={}", socket));
        }
        args.push(action.to_string());
        args
    }

    fn run(&self, args: &[String]) -> Result<Output> {
        debug!("Running kitten {}", args.join(" "));
        Command::new("kitten")
            .args(args)
            .output()
            .with_context(|| "Failed to run kitten, is kitty installed and on PATH?")
    }
}

impl Default for KittyExecutor {
    fn default() -> Self {
        Self::new()
    }
}

fn stderr_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("kitten exited with {}", output.status)
    } else {
        stderr
    }
}

impl CommandExecutor for KittyExecutor {
    fn launch(
        &self,
        command: KittenLaunchCommand,
    ) -> Result<KittyCommandResult<KittyLaunchResponse>> {
        let mut args = self.remote_args("launch");
        args.extend(command.args());

        let output = self.run(&args)?;
        if !output.status.success() {
            let message = stderr_message(&output);
            error!("kitten launch failed: {}", message);
            return Ok(KittyCommandResult::error(message));
        }

        let response = KittyLaunchResponse::parse(&String::from_utf8_lossy(&output.stdout));
        debug!("Launched kitty window: {:?}", response.window_id);
        Ok(KittyCommandResult::success(response))
    }

    fn focus_window(&self, command: KittenFocusWindowCommand) -> Result<KittyCommandResult<()>> {
        let mut args = self.remote_args("focus-window");
        args.push(command.match_arg());

        let output = self.run(&args)?;
        if !output.status.success() {
            let message = stderr_message(&output);
            error!("kitten focus-window failed: {}", message);
            return Ok(KittyCommandResult::error(message));
        }

        Ok(KittyCommandResult::success(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_args_with_socket() {
        let executor = KittyExecutor::with_socket(Some("unix:/tmp/kitty-a"));
        assert_eq!(
            executor.remote_args("launch"),
            vec!["@", "--to=unix:/tmp/kitty-a", "launch"]
        );
    }

    #[test]
    fn test_remote_args_without_socket() {
        let executor = KittyExecutor { socket: None };
        assert_eq!(executor.remote_args("focus-window"), vec!["@", "focus-window"]);
    }
}
