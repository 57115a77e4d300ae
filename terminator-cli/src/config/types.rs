use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered name -> value mapping. Iteration order is the substitution order.
pub type EnvMap = IndexMap<String, String>;

/// Settings file layout. Launcher settings live under the `terminator` key,
/// host settings under `kitty`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SettingsData {
    pub terminator: Option<TerminatorSettings>,
    pub kitty: Option<KittySettings>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TerminatorSettings {
    /// Terminal profiles in the order they are offered
    pub terminals: Option<Vec<TerminalProfile>>,
    /// Global environment, overridden by profile env and parameters
    pub env: Option<EnvMap>,
}

/// A named terminal launch configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TerminalProfile {
    pub name: String,
    /// Opaque icon identifier, shown in front of the tab title
    pub icon: Option<String>,
    /// Opaque color identifier handed to kitty as the window background
    pub color: Option<String>,
    /// Printed when the terminal opens
    pub message: Option<String>,
    pub work_dir: String,
    #[serde(default)]
    pub env: EnvMap,
    pub shell_path: String,
    #[serde(default)]
    pub shell_args: Vec<String>,
    /// Names prompted for at launch time
    pub parameters: Option<Vec<String>>,
}

/// How kitty should host new terminals
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchType {
    #[default]
    Tab,
    Window,
    OsWindow,
}

impl LaunchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchType::Tab => "tab",
            LaunchType::Window => "window",
            LaunchType::OsWindow => "os-window",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct KittySettings {
    /// Remote control socket, e.g. `unix:/tmp/mykitty`
    pub socket: Option<String>,
    pub launch_type: Option<LaunchType>,
}
