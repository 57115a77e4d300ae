use anyhow::{Context, Result};
use log::{debug, error, warn};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::SettingsData;

/// Read-only access to wherever the settings live.
pub trait SettingsStore {
    /// Read the current settings. Called on every lookup, nothing is cached.
    fn read(&self) -> Result<SettingsData>;

    /// File backing the store, if any
    fn location(&self) -> Option<PathBuf>;
}

/// Settings stored in a TOML file
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettings {
    fn read(&self) -> Result<SettingsData> {
        if !self.path.exists() {
            warn!(
                "Settings file {:?} does not exist, no terminals are configured",
                self.path
            );
            return Ok(SettingsData::default());
        }

        debug!("Reading settings from: {:?}", self.path);
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file {:?}", self.path))?;

        parse_settings(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", self.path))
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn read(&self) -> Result<SettingsData> {
        (**self).read()
    }

    fn location(&self) -> Option<PathBuf> {
        (**self).location()
    }
}

pub fn parse_settings(content: &str) -> Result<SettingsData> {
    toml::from_str(content).map_err(|e| {
        error!("Failed to parse settings TOML: {}", e);
        e.into()
    })
}

/// In-memory settings that can be swapped between reads
#[derive(Debug, Default)]
pub struct MemorySettings {
    data: RefCell<SettingsData>,
}

impl MemorySettings {
    pub fn new(data: SettingsData) -> Self {
        Self {
            data: RefCell::new(data),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(Self::new(parse_settings(content)?))
    }

    pub fn replace(&self, data: SettingsData) {
        *self.data.borrow_mut() = data;
    }
}

impl SettingsStore for MemorySettings {
    fn read(&self) -> Result<SettingsData> {
        Ok(self.data.borrow().clone())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}
