use std::collections::HashMap;

use thiserror::Error;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("settings storage unavailable: {0}")]
    Unavailable(String),
}

/// Small key/value store for user preferences that survive page reloads.
pub trait SettingsStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class put on the document root; dark is the unmarked default.
    pub fn root_marker(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some("theme-light"),
        }
    }

    /// Reads the stored preference, falling back to dark.
    pub fn load_from(store: &dyn SettingsStore) -> Self {
        store
            .load(THEME_KEY)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_default()
    }

    pub fn save_to(self, store: &mut dyn SettingsStore) -> Result<(), SettingsError> {
        store.store(THEME_KEY, self.as_str())
    }
}
