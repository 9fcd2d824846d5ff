use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Key/value storage the session is persisted in (browser storage, tests, ...).
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

impl<S> SessionStorage for Arc<S>
where
    S: SessionStorage + ?Sized,
{
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory storage for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().map(|m| m.is_empty()).unwrap_or(true)
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(key);
        }
    }
}
