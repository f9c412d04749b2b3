//! Key-value storage seam for the one durable client value, the display name.

use std::collections::HashMap;

use tracing::warn;

use crate::error::StoreError;

/// Key under which the display name is persisted.
pub const USER_NAME_KEY: &str = "userName";

/// String-to-string storage that survives across sessions.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Display-name preference over a `KeyValueStore`.
///
/// The name is read once at construction and written through on every
/// change. A failed write keeps the in-memory value and is logged.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
    user_name: String,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn load(store: S) -> Self {
        let user_name = store.get(USER_NAME_KEY).unwrap_or_default();
        Self { store, user_name }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_user_name(&mut self, name: &str) -> Result<(), StoreError> {
        self.user_name = name.to_string();
        self.store.set(USER_NAME_KEY, name).inspect_err(|err| {
            warn!(error = %err, "failed to persist display name");
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
