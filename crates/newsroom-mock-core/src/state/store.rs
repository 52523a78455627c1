//! Named-blob key-value store used by the mock handler.

use serde_json::Value;
use std::collections::HashMap;

/// Store key holding the mocked subscription state.
pub const SUBSCRIPTIONS_KEY: &str = "newsroom.mock_api_subscriptions";

/// Store key holding the app-to-universe registry.
pub const UNIVERSES_KEY: &str = "newsroom.mock_api_universe";

/// Persistence collaborator for the handler's two state blobs.
///
/// The handler loads a blob fully, mutates it, and writes it back once per
/// request. Durability and reset between test runs belong to the
/// implementor; no schema is enforced beyond what the handler stores.
pub trait StateStore {
    /// Current blob under `key`, if any was ever written.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replaces the blob under `key`.
    fn set(&mut self, key: &str, value: Value);
}

/// HashMap-backed store for single-threaded test runs.
///
/// There is no interior locking; concurrent test execution needs one store
/// instance per run rather than a shared one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every blob; call between test cases.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

impl StateStore for InMemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_get_returns_what_set_stored() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.get(SUBSCRIPTIONS_KEY), None);

        store.set(SUBSCRIPTIONS_KEY, json!({"DIGIT": {}}));
        assert_eq!(store.get(SUBSCRIPTIONS_KEY), Some(json!({"DIGIT": {}})));
    }

    #[rstest]
    fn test_set_overwrites() {
        let mut store = InMemoryStore::new();
        store.set(UNIVERSES_KEY, json!({"myapp": "DIGIT"}));
        store.set(UNIVERSES_KEY, json!({"myapp": "COMM"}));
        assert_eq!(store.get(UNIVERSES_KEY), Some(json!({"myapp": "COMM"})));
    }

    #[rstest]
    fn test_reset_clears_all_keys() {
        let mut store = InMemoryStore::new();
        store.set(SUBSCRIPTIONS_KEY, json!({}));
        store.set(UNIVERSES_KEY, json!({}));
        store.reset();
        assert_eq!(store.get(SUBSCRIPTIONS_KEY), None);
        assert_eq!(store.get(UNIVERSES_KEY), None);
    }
}
