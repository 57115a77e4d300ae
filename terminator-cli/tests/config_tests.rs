use anyhow::Result;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use kitty_lib::MockExecutor;
use terminator::app::App;
use terminator::cmd::{LaunchOutcome, launch_by_name};
use terminator::config::{Config, LaunchType};
use terminator::kitty::Kitty;
use terminator::ui::MockUi;

const SETTINGS: &str = r##"
[terminator]
env = { PROJECT = "demo" }

[[terminator.terminals]]
name = "demo"
color = "#223344"
workDir = "/srv/demo"
shellPath = "/bin/bash"
shellArgs = ["-lc", "cd ${PROJECT} && exec bash"]

[kitty]
launch_type = "window"
"##;

#[test]
fn test_launch_from_settings_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_file = temp_dir.child("settings.toml");
    settings_file.write_str(SETTINGS)?;

    let config = Config::load_from_path(Some(settings_file.path().to_path_buf()))?;
    let launch_type = config.kitty_settings()?.launch_type.unwrap_or_default();
    assert_eq!(launch_type, LaunchType::Window);

    let ui = MockUi::new();
    let executor = MockExecutor::new();
    let kitty = Kitty::with_executor(&executor).with_launch_type(launch_type);
    let app = App::with_parts(config, &ui, kitty);

    let outcome = launch_by_name(&app, "demo")?;
    assert!(matches!(outcome, LaunchOutcome::Launched(_)));

    let call = &executor.get_launch_calls()[0];
    assert_eq!(call.launch_type, "window");
    assert_eq!(call.color, Some("#223344".to_string()));
    assert_eq!(call.program, vec!["/bin/bash", "-lc", "cd demo && exec bash"]);
    Ok(())
}

#[test]
fn test_settings_edits_between_launches_are_seen() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_file = temp_dir.child("settings.toml");
    settings_file.write_str("")?;

    let config = Config::load_from_path(Some(settings_file.path().to_path_buf()))?;
    let ui = MockUi::new();
    let executor = MockExecutor::new();
    let app = App::with_parts(config, &ui, Kitty::with_executor(&executor));

    let outcome = launch_by_name(&app, "demo")?;
    assert_eq!(outcome, LaunchOutcome::ProfileNotFound("demo".to_string()));

    settings_file.write_str(SETTINGS)?;
    let outcome = launch_by_name(&app, "demo")?;
    assert!(matches!(outcome, LaunchOutcome::Launched(_)));

    assert_eq!(ui.error_call_count(), 1);
    assert_eq!(executor.launch_call_count(), 1);
    Ok(())
}

#[test]
fn test_broken_settings_abort_launch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings_file = temp_dir.child("settings.toml");
    settings_file.write_str("[[terminator.terminals]]\nname = 42\n")?;

    let config = Config::load_from_path(Some(settings_file.path().to_path_buf()))?;
    let ui = MockUi::new();
    let executor = MockExecutor::new();
    let app = App::with_parts(config, &ui, Kitty::with_executor(&executor));

    assert!(launch_by_name(&app, "demo").is_err());
    assert_eq!(executor.launch_call_count(), 0);
    Ok(())
}
