use web_sys::Storage;

use crate::error::{PortfolioError, Result};
use crate::theme::PreferenceStore;

/// `window.localStorage`, or nothing when the browser blocks it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| PortfolioError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PortfolioError::Storage(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PortfolioError::Storage(format!("{e:?}")))
    }
}
