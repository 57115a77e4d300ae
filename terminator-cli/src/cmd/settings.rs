use anyhow::{Context, Result, anyhow};
use kitty_lib::CommandExecutor;
use log::{debug, error, info};
use std::fs;

use crate::app::App;
use crate::config::SettingsStore;
use crate::ui::Prompter;

pub fn cmd_settings<E, U, S>(app: &App<E, U, S>) -> Result<()>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    info!("Opening settings");
    open_settings(app)
}

/// Open the settings file in an editor tab. The file itself is left to the
/// editor to create; only its directory is made sure to exist.
pub fn open_settings<E, U, S>(app: &App<E, U, S>) -> Result<()>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    let path = app.config.settings_path().ok_or_else(|| {
        error!("Settings are not backed by a file");
        anyhow!("Settings are not backed by a file")
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!("Ensuring settings directory {:?} exists", parent);
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
    }

    app.kitty.open_in_editor(&path)?;
    Ok(())
}
