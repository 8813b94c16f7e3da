//! Flat key -> string storage the dashboard persists into.
//!
//! In the browser this is `window.localStorage`; tests and native callers use
//! [`MemoryStore`]. Access is read-then-write with no locking, which is only
//! sound because a single UI thread owns the store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

pub const USER_KEY: &str = "user";
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const PRINT_JOBS_KEY: &str = "printJobs";
pub const CUSTOMER_NAME_KEY: &str = "customerName";
pub const NAME_TIME_KEY: &str = "nameTime";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize `{key}`: {reason}")]
    Serialize { key: String, reason: String },
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str);
}

/// Reads `key` as JSON. Missing or malformed values both come back as `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set_item(key, &raw)
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn json_round_trip_through_store() {
        let store = MemoryStore::new();
        save_json(&store, "sample", &Sample { name: "Admin".into() }).unwrap();
        assert_eq!(store.get_item("sample").as_deref(), Some(r#"{"name":"Admin"}"#));
        assert_eq!(
            load_json::<Sample>(&store, "sample"),
            Some(Sample { name: "Admin".into() })
        );
    }

    #[test]
    fn malformed_json_reads_as_missing() {
        let store = MemoryStore::new();
        store.set_item("sample", "{not json").unwrap();
        assert_eq!(load_json::<Sample>(&store, "sample"), None);
        assert_eq!(load_json::<Sample>(&store, "absent"), None);
    }

    #[test]
    fn remove_item_deletes_key() {
        let store = MemoryStore::new();
        store.set_item(USER_KEY, "x").unwrap();
        store.remove_item(USER_KEY);
        assert!(store.is_empty());
    }
}
