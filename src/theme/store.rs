//! Theme preference persistence.
//!
//! Uses localStorage in the browser, an in-memory map everywhere else.
//! Storage problems never escape this module: a failed read is "no
//! preference", a failed write is logged and dropped.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use super::{Theme, STORAGE_KEY};

/// Storage layer failure (disabled storage, quota, security policy).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Origin-scoped string key/value store.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for headless runs and tests.
///
/// Clones share the same map, which stands in for a browser origin across
/// page loads.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    failing: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw value, bypassing theme validation.
    pub fn insert(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Make every subsequent access fail, like storage disabled by policy.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Unavailable(
                "storage disabled for this origin".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.get(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.insert(key, value);
        Ok(())
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// `None` when there is no window or the origin may not use storage.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                warn!("localStorage is not accessible: {:?}", e);
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

/// Reads and writes the single theme preference record.
pub struct PreferenceStore {
    storage: Option<Box<dyn KeyValueStorage>>,
}

impl PreferenceStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self {
            storage: Some(Box::new(storage)),
        }
    }

    /// A store for environments without any storage capability.
    pub fn unavailable() -> Self {
        Self { storage: None }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    /// The stored theme, or `None` when absent, invalid or unreadable.
    pub fn read(&self) -> Option<Theme> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(value)) => {
                let theme = Theme::parse(&value);
                if theme.is_none() {
                    debug!("Ignoring invalid stored theme {:?}", value);
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Unable to read theme preference: {}", e);
                None
            }
        }
    }

    /// Best-effort persist.
    pub fn write(&self, theme: Theme) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
            warn!("Unable to persist theme selection: {}", e);
        }
    }
}
