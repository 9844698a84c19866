//! Session persistence backends.

use std::collections::HashMap;

use crate::error::Result;
use crate::interface::SessionStore;

/// Process-local store; used by the terminal front end and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(feature = "wasm")]
pub use browser::BrowserSessionStore;

#[cfg(feature = "wasm")]
mod browser {
    use super::*;
    use crate::error::ErrorKind;

    /// `window.sessionStorage`
    #[derive(Debug, Clone)]
    pub struct BrowserSessionStore {
        storage: web_sys::Storage,
    }

    impl BrowserSessionStore {
        pub fn new() -> Result<Self> {
            let storage = web_sys::window()
                .ok_or_else(|| ErrorKind::StorageError("no window".to_string()))?
                .session_storage()
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")))?
                .ok_or_else(|| ErrorKind::StorageError("sessionStorage unavailable".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl SessionStore for BrowserSessionStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.storage
                .get_item(key)
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.storage
                .remove_item(key)
                .map_err(|e| ErrorKind::StorageError(format!("{e:?}")).into())
        }
    }
}
