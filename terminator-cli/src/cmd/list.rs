use anyhow::Result;
use kitty_lib::CommandExecutor;
use log::{debug, info};

use crate::app::App;
use crate::config::{SettingsStore, TerminalProfile};
use crate::ui::Prompter;

pub fn cmd_list<E, U, S>(app: &App<E, U, S>, json: bool) -> Result<()>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    info!("Listing configured terminals");
    println!("{}", render_list(&app.config.profiles()?, json)?);
    Ok(())
}

pub fn render_list(profiles: &[TerminalProfile], json: bool) -> Result<String> {
    debug!("Rendering {} terminal(s)", profiles.len());

    if json {
        return Ok(serde_json::to_string_pretty(profiles)?);
    }

    if profiles.is_empty() {
        return Ok("No terminals configured".to_string());
    }

    let mut lines = vec!["Configured terminals:".to_string()];
    for profile in profiles {
        let mut command = vec![profile.shell_path.clone()];
        command.extend(profile.shell_args.iter().cloned());

        let parameters = match &profile.parameters {
            Some(parameters) if !parameters.is_empty() => {
                format!(" [asks: {}]", parameters.join(", "))
            }
            _ => String::new(),
        };

        lines.push(format!(
            "  {} ({}){}",
            profile.name,
            command.join(" "),
            parameters
        ));
    }

    Ok(lines.join("\n"))
}
