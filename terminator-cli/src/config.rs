mod store;
mod types;

pub use store::{FileSettings, MemorySettings, SettingsStore, parse_settings};
pub use types::{
    EnvMap, KittySettings, LaunchType, SettingsData, TerminalProfile, TerminatorSettings,
};

use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

use crate::utils::expand_tilde;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/terminator/settings.toml";

/// Profile and environment lookups over a settings store.
///
/// Every lookup re-reads the store, so edits made between two calls are seen
/// by the second one.
#[derive(Debug, Clone)]
pub struct Config<S: SettingsStore = FileSettings> {
    store: S,
}

impl Config<FileSettings> {
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(get_config_path);
        let config_path = PathBuf::from(expand_tilde(&config_path.to_string_lossy()));
        info!("Using settings file: {:?}", config_path);

        Ok(Self::new(FileSettings::new(config_path)))
    }
}

impl<S: SettingsStore> Config<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn settings_path(&self) -> Option<PathBuf> {
        self.store.location()
    }

    /// All configured profiles, in configured order
    pub fn profiles(&self) -> Result<Vec<TerminalProfile>> {
        let data = self.store.read()?;
        Ok(data.terminator.and_then(|t| t.terminals).unwrap_or_default())
    }

    /// Names of all configured profiles, in configured order
    pub fn list_profile_names(&self) -> Result<Vec<String>> {
        let names: Vec<String> = self.profiles()?.into_iter().map(|t| t.name).collect();
        debug!("Configured terminals: {:?}", names);
        Ok(names)
    }

    /// First profile whose name matches exactly
    pub fn get_profile(&self, name: &str) -> Result<Option<TerminalProfile>> {
        Ok(self.profiles()?.into_iter().find(|t| t.name == name))
    }

    pub fn get_global_env(&self) -> Result<EnvMap> {
        let data = self.store.read()?;
        Ok(data.terminator.and_then(|t| t.env).unwrap_or_default())
    }

    pub fn kitty_settings(&self) -> Result<KittySettings> {
        Ok(self.store.read()?.kitty.unwrap_or_default())
    }
}

fn get_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    fn memory_config(content: &str) -> Config<MemorySettings> {
        Config::new(MemorySettings::from_toml(content).unwrap())
    }

    const TWO_TERMINALS: &str = r##"
[terminator]
env = { A = "1", B = "2" }

[[terminator.terminals]]
name = "dev"
workDir = "~/src"
shellPath = "/bin/sh"
shellArgs = ["-c", "echo ${A}"]

[[terminator.terminals]]
name = "logs"
icon = "📜"
color = "#202020"
message = "tailing logs"
workDir = "/var/log"
env = { Z = "last", Y = "first" }
shellPath = "/usr/bin/tail"
shellArgs = ["-f", "${FILE}"]
parameters = ["FILE"]
"##;

    #[test]
    fn test_list_profile_names_in_order() {
        let config = memory_config(TWO_TERMINALS);
        assert_eq!(config.list_profile_names().unwrap(), vec!["dev", "logs"]);
    }

    #[test]
    fn test_list_profile_names_without_setting() {
        let config = memory_config("[terminator]\n");
        assert!(config.list_profile_names().unwrap().is_empty());

        let config = memory_config("");
        assert!(config.list_profile_names().unwrap().is_empty());
    }

    #[test]
    fn test_get_profile_optional_fields() {
        let config = memory_config(TWO_TERMINALS);

        let dev = config.get_profile("dev").unwrap().unwrap();
        assert_eq!(dev.icon, None);
        assert_eq!(dev.color, None);
        assert_eq!(dev.message, None);
        assert_eq!(dev.parameters, None);
        assert!(dev.env.is_empty());

        let logs = config.get_profile("logs").unwrap().unwrap();
        assert_eq!(logs.icon.as_deref(), Some("📜"));
        assert_eq!(logs.color.as_deref(), Some("#202020"));
        assert_eq!(logs.message.as_deref(), Some("tailing logs"));
        assert_eq!(logs.parameters, Some(vec!["FILE".to_string()]));
    }

    #[test]
    fn test_profile_env_keeps_file_order() {
        let config = memory_config(TWO_TERMINALS);
        let logs = config.get_profile("logs").unwrap().unwrap();
        let keys: Vec<&str> = logs.env.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Z", "Y"]);
    }

    #[test]
    fn test_get_profile_missing() {
        let config = memory_config(TWO_TERMINALS);
        assert!(config.get_profile("nope").unwrap().is_none());
    }

    #[test]
    fn test_get_profile_first_duplicate_wins() {
        let config = memory_config(
            r#"
[[terminator.terminals]]
name = "a"
workDir = "/"
shellPath = "/bin/a"

[[terminator.terminals]]
name = "x"
workDir = "/first"
shellPath = "/bin/first"

[[terminator.terminals]]
name = "x"
workDir = "/second"
shellPath = "/bin/second"
"#,
        );

        let profile = config.get_profile("x").unwrap().unwrap();
        assert_eq!(profile.shell_path, "/bin/first");
        assert_eq!(profile.work_dir, "/first");
    }

    #[test]
    fn test_global_env() {
        let config = memory_config(TWO_TERMINALS);
        let env = config.get_global_env().unwrap();
        assert_eq!(env.get("A").map(String::as_str), Some("1"));
        assert_eq!(env.get("B").map(String::as_str), Some("2"));

        let config = memory_config("");
        assert!(config.get_global_env().unwrap().is_empty());
    }

    #[test]
    fn test_settings_changes_are_observed() {
        let store = MemorySettings::default();
        let config = Config::new(&store);
        assert!(config.list_profile_names().unwrap().is_empty());

        store.replace(parse_settings(TWO_TERMINALS).unwrap());
        assert_eq!(config.list_profile_names().unwrap().len(), 2);
    }

    #[test]
    fn test_kitty_settings() {
        let config = memory_config(
            r#"
[kitty]
socket = "unix:/tmp/kitty-sock"
launch_type = "os-window"
"#,
        );
        let kitty = config.kitty_settings().unwrap();
        assert_eq!(kitty.socket.as_deref(), Some("unix:/tmp/kitty-sock"));
        assert_eq!(kitty.launch_type, Some(LaunchType::OsWindow));

        let config = memory_config("");
        assert_eq!(config.kitty_settings().unwrap(), KittySettings::default());
    }

    #[test]
    fn test_file_settings_reread_on_every_call() {
        let temp_dir = TempDir::new().unwrap();
        let settings_file = temp_dir.child("settings.toml");
        settings_file.write_str("").unwrap();

        let config = Config::load_from_path(Some(settings_file.path().to_path_buf())).unwrap();
        assert!(config.list_profile_names().unwrap().is_empty());

        settings_file.write_str(TWO_TERMINALS).unwrap();
        assert_eq!(config.list_profile_names().unwrap(), vec!["dev", "logs"]);
    }

    #[test]
    fn test_missing_file_means_no_terminals() {
        let temp_dir = TempDir::new().unwrap();
        let settings_file = temp_dir.child("missing.toml");

        let config = Config::load_from_path(Some(settings_file.path().to_path_buf())).unwrap();
        assert!(config.list_profile_names().unwrap().is_empty());
        assert_eq!(
            config.settings_path(),
            Some(settings_file.path().to_path_buf())
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let settings_file = temp_dir.child("broken.toml");
        settings_file.write_str("[[terminator.terminals]\nname=").unwrap();

        let config = Config::load_from_path(Some(settings_file.path().to_path_buf())).unwrap();
        let err = config.list_profile_names().unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings file"));
    }

    #[test]
    fn test_profile_missing_required_field_is_an_error() {
        let result = MemorySettings::from_toml(
            r#"
[[terminator.terminals]]
name = "no-shell"
workDir = "/"
"#,
        );
        assert!(result.is_err());
    }
}
