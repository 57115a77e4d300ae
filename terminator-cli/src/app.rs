use anyhow::Result;
use kitty_lib::{CommandExecutor, KittyExecutor};
use log::{debug, warn};

use crate::config::{Config, FileSettings, KittySettings, SettingsStore};
use crate::kitty::Kitty;
use crate::ui::{ConsoleUi, Prompter};

pub struct App<
    E: CommandExecutor = KittyExecutor,
    U: Prompter = ConsoleUi,
    S: SettingsStore = FileSettings,
> {
    pub config: Config<S>,
    pub ui: U,
    pub kitty: Kitty<E>,
}

impl App {
    /// Console UI and a real kitty. `socket` beats the socket from settings.
    ///
    /// An unreadable settings file falls back to default kitty settings so
    /// the `settings` command can still open it for repair.
    pub fn new(config: Config, socket: Option<String>) -> Result<Self> {
        let kitty_settings = config.kitty_settings().unwrap_or_else(|e| {
            warn!("Using default kitty settings: {:#}", e);
            KittySettings::default()
        });
        let socket = socket.or(kitty_settings.socket);
        debug!("Kitty settings: socket={:?}", socket);

        let kitty = Kitty::with_executor(KittyExecutor::with_socket(socket.as_deref()))
            .with_launch_type(kitty_settings.launch_type.unwrap_or_default());

        Ok(Self::with_parts(config, ConsoleUi::new(), kitty))
    }
}

impl<E: CommandExecutor, U: Prompter, S: SettingsStore> App<E, U, S> {
    pub fn with_parts(config: Config<S>, ui: U, kitty: Kitty<E>) -> Self {
        Self { config, ui, kitty }
    }
}
