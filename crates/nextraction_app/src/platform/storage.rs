use nextraction_core::{SettingsError, SettingsStore};
use web_sys::Storage;

/// Browser `localStorage`. Falls back to reading nothing when storage is
/// disabled, e.g. in some private browsing modes.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }
}

impl SettingsStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| SettingsError::Unavailable("localStorage is disabled".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| SettingsError::Unavailable(format!("{err:?}")))
    }
}
