use anyhow::Result;
use kitty_lib::CommandExecutor;
use log::{debug, info, warn};

use crate::app::App;
use crate::config::{EnvMap, SettingsStore, TerminalProfile};
use crate::kitty::{TerminalHandle, TerminalOptions};
use crate::params::collect_parameters;
use crate::picker::{Pick, pick_terminal_name};
use crate::substitute::{substitute_str, unresolved_placeholders};
use crate::ui::Prompter;

/// How a launch attempt ended. Everything except `Launched` has already been
/// reported to the user (or was a silent cancel).
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchOutcome {
    Launched(TerminalHandle),
    NoTerminals,
    Cancelled,
    ProfileNotFound(String),
}

pub fn profile_not_found_message(name: &str) -> String {
    format!("Could not find terminal configuration for {}", name)
}

/// Launch `name` when given, otherwise let the user pick a terminal first
pub fn cmd_launch<E, U, S>(app: &App<E, U, S>, name: Option<&str>) -> Result<LaunchOutcome>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    match name {
        Some(name) => launch_by_name(app, name),
        None => launch_interactive(app),
    }
}

pub fn launch_interactive<E, U, S>(app: &App<E, U, S>) -> Result<LaunchOutcome>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    info!("Starting interactive terminal launch");

    match pick_terminal_name(app)? {
        Pick::Selected(name) => launch_by_name(app, &name),
        Pick::NoTerminals => Ok(LaunchOutcome::NoTerminals),
        Pick::Dismissed => {
            info!("User aborted selection");
            Ok(LaunchOutcome::Cancelled)
        }
    }
}

pub fn launch_by_name<E, U, S>(app: &App<E, U, S>, name: &str) -> Result<LaunchOutcome>
where
    E: CommandExecutor,
    U: Prompter,
    S: SettingsStore,
{
    info!("Launching terminal '{}'", name);

    let global_env = app.config.get_global_env()?;

    let Some(profile) = app.config.get_profile(name)? else {
        app.ui.show_error(&profile_not_found_message(name));
        return Ok(LaunchOutcome::ProfileNotFound(name.to_string()));
    };

    let parameter_names = profile.parameters.clone().unwrap_or_default();
    let parameters = collect_parameters(&app.ui, &parameter_names)?;
    let env = build_effective_env(global_env, &profile.env, parameters);
    debug!("Effective environment for '{}': {:?}", name, env);

    let options = resolve_terminal_options(profile, env);
    let handle = app.kitty.create_terminal(&options)?;
    app.kitty.reveal(&handle, false)?;

    Ok(LaunchOutcome::Launched(handle))
}

/// Merge the environment sources, later ones winning: global settings,
/// profile env, then the collected parameter values.
pub fn build_effective_env(
    global_env: EnvMap,
    profile_env: &EnvMap,
    parameters: Option<EnvMap>,
) -> EnvMap {
    let mut env = global_env;
    env.extend(profile_env.iter().map(|(k, v)| (k.clone(), v.clone())));
    if let Some(parameters) = parameters {
        env.extend(parameters);
    }
    env
}

/// Substitute the effective environment into the profile's command line
pub fn resolve_terminal_options(profile: TerminalProfile, env: EnvMap) -> TerminalOptions {
    let shell_path = substitute_str(&profile.shell_path, &env);
    let shell_args: Vec<String> = profile
        .shell_args
        .iter()
        .map(|arg| substitute_str(arg, &env))
        .collect();

    warn_unresolved(&profile.name, &shell_path, &shell_args);

    TerminalOptions {
        name: profile.name,
        icon: profile.icon,
        color: profile.color,
        work_dir: profile.work_dir,
        env,
        message: profile.message,
        shell_path,
        shell_args,
    }
}

fn warn_unresolved(name: &str, shell_path: &str, shell_args: &[String]) {
    for text in std::iter::once(shell_path).chain(shell_args.iter().map(String::as_str)) {
        match unresolved_placeholders(text) {
            Ok(left) if !left.is_empty() => {
                warn!(
                    "Terminal '{}' keeps unresolved placeholders {:?} in {:?}",
                    name, left, text
                );
            }
            Ok(_) => {}
            Err(e) => debug!("Could not scan {:?} for placeholders: {}", text, e),
        }
    }
}
