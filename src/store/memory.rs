//! In-memory store recording writes in order. Used by tests to observe
//! exactly which keys and payloads a resolution pass produced.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{Store, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    writes: Mutex<Vec<(String, String)>>,
    fail_on: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects the write for one specific key, for
    /// exercising fail-fast behavior.
    pub fn failing_on(key: &str) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_on: Some(key.to_string()),
        }
    }

    /// Every accepted write, in the order it was performed.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }

    /// The payload stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_on.as_deref() == Some(key) {
            return Err(StoreError::Backend("injected write failure".to_string()));
        }

        self.writes
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}
