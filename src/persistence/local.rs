//! Browser backend over `window.localStorage`

use web_sys::Storage;

use super::{KeyValueStore, PersistenceError, Result};

#[derive(Debug, Clone)]
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| PersistenceError::Unavailable("no window".into()))?
            .local_storage()
            .map_err(|_| PersistenceError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| PersistenceError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|_| PersistenceError::Unavailable(format!("read of '{key}' failed")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| PersistenceError::Unavailable(format!("write of '{key}' failed")))
    }
}
