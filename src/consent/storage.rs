use web_sys::{Storage, Window};

use super::gate::{ConsentChoice, ConsentStore};
use crate::error::{PageError, Result};

/// Consent flag kept in `window.localStorage`.
pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    pub fn new(window: &Window, key: &str) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
            key: key.to_string(),
        }
    }
}

impl ConsentStore for LocalStorageStore {
    fn load(&self) -> Option<ConsentChoice> {
        self.storage
            .as_ref()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .and_then(|raw| ConsentChoice::parse(&raw))
    }

    fn save(&self, choice: ConsentChoice) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| PageError::Storage("localStorage is not available".into()))?;
        storage
            .set_item(&self.key, choice.as_str())
            .map_err(|e| PageError::Storage(format!("{:?}", e)))
    }
}
