use anyhow::{Result, anyhow};
use kitty_lib::{
    CommandExecutor, KittenFocusWindowCommand, KittenLaunchCommand, KittyExecutor,
};
use log::{debug, error, info, warn};
use std::env;
use std::path::Path;

use crate::config::{EnvMap, LaunchType};
use crate::utils::{expand_tilde, format_env_lines, format_tab_title};

const DEFAULT_EDITOR: &str = "vi";

/// Everything kitty needs to open one configured terminal
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TerminalOptions {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub work_dir: String,
    pub env: EnvMap,
    pub message: Option<String>,
    pub shell_path: String,
    pub shell_args: Vec<String>,
}

/// A terminal created through kitty remote control
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalHandle {
    pub name: String,
    pub window_id: Option<u32>,
}

pub struct Kitty<E: CommandExecutor> {
    kitty: E,
    launch_type: LaunchType,
}

impl Default for Kitty<KittyExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl Kitty<KittyExecutor> {
    pub fn new() -> Self {
        Self::with_executor(KittyExecutor::new())
    }
}

impl<E: CommandExecutor> Kitty<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            kitty: executor,
            launch_type: LaunchType::default(),
        }
    }

    pub fn with_launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = launch_type;
        self
    }

    /// Launch a terminal without moving focus away from the current window
    pub fn create_terminal(&self, options: &TerminalOptions) -> Result<TerminalHandle> {
        info!(
            "Creating terminal '{}' running {} {:?}",
            options.name, options.shell_path, options.shell_args
        );
        debug!("Terminal environment: {:?}", format_env_lines(&options.env));

        let mut launch_command = KittenLaunchCommand::new()
            .launch_type(self.launch_type.as_str())
            .keep_focus(true)
            .tab_title(&format_tab_title(options.icon.as_deref(), &options.name))
            .window_title(&options.name)
            .program(&options.shell_path, options.shell_args.iter().cloned());

        if !options.work_dir.is_empty() {
            launch_command = launch_command.cwd(&expand_tilde(&options.work_dir));
        }
        for (key, value) in &options.env {
            launch_command = launch_command.env(key, value);
        }
        if let Some(color) = non_empty(&options.color) {
            launch_command = launch_command.color(color);
        }
        if let Some(message) = non_empty(&options.message) {
            launch_command = launch_command.message(message);
        }

        let response = self
            .kitty
            .launch(launch_command)?
            .into_result()
            .map_err(|e| {
                error!("Failed to create terminal '{}': {}", options.name, e);
                anyhow!("Failed to create terminal '{}': {}", options.name, e)
            })?;

        let window_id = response.window_id;
        info!(
            "Successfully created terminal '{}' (window: {:?})",
            options.name, window_id
        );

        Ok(TerminalHandle {
            name: options.name.clone(),
            window_id,
        })
    }

    /// Show a created terminal. With `take_focus` unset the focused window stays focused.
    pub fn reveal(&self, handle: &TerminalHandle, take_focus: bool) -> Result<()> {
        if !take_focus {
            debug!(
                "Terminal '{}' revealed in the background, focus unchanged",
                handle.name
            );
            return Ok(());
        }

        let Some(window_id) = handle.window_id else {
            warn!(
                "Terminal '{}' has no known window id, cannot focus it",
                handle.name
            );
            return Ok(());
        };

        self.kitty
            .focus_window(KittenFocusWindowCommand::new(window_id))?
            .into_result()
            .map_err(|e| {
                error!("Failed to focus window {}: {}", window_id, e);
                anyhow!("Failed to focus window {}: {}", window_id, e)
            })?;

        info!("Focused terminal '{}'", handle.name);
        Ok(())
    }

    /// Open `path` in the user's editor inside a new, focused tab
    pub fn open_in_editor(&self, path: &Path) -> Result<TerminalHandle> {
        let mut editor = editor_command();
        let program = editor.remove(0);
        editor.push(path.to_string_lossy().to_string());
        info!("Opening {:?} with {}", path, program);

        let launch_command = KittenLaunchCommand::new()
            .launch_type(LaunchType::Tab.as_str())
            .tab_title("terminator settings")
            .program(&program, editor);

        let response = self
            .kitty
            .launch(launch_command)?
            .into_result()
            .map_err(|e| {
                error!("Failed to open editor for {:?}: {}", path, e);
                anyhow!("Failed to open editor: {}", e)
            })?;

        Ok(TerminalHandle {
            name: "terminator settings".to_string(),
            window_id: response.window_id,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `$VISUAL`, then `$EDITOR`, then vi; split on whitespace so `code -w` works
fn editor_command() -> Vec<String> {
    let editor = ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

    let parts: Vec<String> = editor.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        vec![DEFAULT_EDITOR.to_string()]
    } else {
        parts
    }
}
