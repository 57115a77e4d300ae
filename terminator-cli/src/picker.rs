use anyhow::Result;
use kitty_lib::CommandExecutor;
use log::{info, warn};

use crate::app::App;
use crate::cmd::settings::open_settings;
use crate::config::SettingsStore;
use crate::ui::Prompter;

pub const NO_TERMINALS_WARNING: &str = "Please define a terminal in settings";
pub const OPEN_SETTINGS_ACTION: &str = "Open Settings";
pub const PICKER_PLACEHOLDER: &str = "Select the terminal to launch";

/// Result of asking the user which terminal to launch
#[derive(Debug, Clone, PartialEq)]
pub enum Pick {
    Selected(String),
    /// Nothing configured; the user has been warned
    NoTerminals,
    Dismissed,
}

impl Pick {
    pub fn name(self) -> Option<String> {
        match self {
            Pick::Selected(name) => Some(name),
            Pick::NoTerminals | Pick::Dismissed => None,
        }
    }
}

/// Offer the configured terminal names for selection.
///
/// With nothing configured the user gets a warning offering to open the
/// settings instead, and no picker is shown.
pub fn pick_terminal_name<E, U, S>(app: &App<E, U, S>) -> Result<Pick>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    let names = app.config.list_profile_names()?;

    if names.is_empty() {
        let action = app
            .ui
            .show_warning(NO_TERMINALS_WARNING, OPEN_SETTINGS_ACTION)?;
        if action.is_some() {
            // The editor runs in its own tab, the launcher does not wait for it
            if let Err(e) = open_settings(app) {
                warn!("Could not open settings: {:#}", e);
            }
        }
        return Ok(Pick::NoTerminals);
    }

    match app.ui.show_choice(&names, PICKER_PLACEHOLDER)? {
        Some(name) => {
            info!("Selected terminal: {}", name);
            Ok(Pick::Selected(name))
        }
        None => {
            info!("Terminal selection dismissed");
            Ok(Pick::Dismissed)
        }
    }
}
