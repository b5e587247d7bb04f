use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use super::{JournalStore, StateKey};
use crate::AppResult;

/// In-memory store used by the journal tests.
#[derive(Default)]
pub struct MemoryJournalStore {
    inner: Mutex<HashMap<(String, &'static str), Value>>,
}

impl MemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw blob directly, bypassing the journal layer. Lets tests
    /// plant legacy-shaped data for the migration paths.
    pub fn seed(&self, user_id: &str, key: StateKey, value: Value) {
        self.inner
            .lock()
            .unwrap()
            .insert((user_id.to_string(), key.as_str()), value);
    }
}

#[async_trait]
impl JournalStore for MemoryJournalStore {
    async fn read(&self, user_id: &str, key: StateKey) -> AppResult<Option<Value>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.get(&(user_id.to_string(), key.as_str())).cloned())
    }

    async fn write(&self, user_id: &str, key: StateKey, value: Value) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.insert((user_id.to_string(), key.as_str()), value);
        Ok(())
    }

    async fn write_many(&self, user_id: &str, values: Vec<(StateKey, Value)>) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        for (key, value) in values {
            inner.insert((user_id.to_string(), key.as_str()), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_read_your_writes() {
        let store = MemoryJournalStore::new();

        store
            .write("user_a", StateKey::Timezone, json!("Europe/London"))
            .await
            .unwrap();

        let read = store.read("user_a", StateKey::Timezone).await.unwrap();
        assert_eq!(read, Some(json!("Europe/London")));

        // Other users and other keys stay isolated
        assert!(store.read("user_b", StateKey::Timezone).await.unwrap().is_none());
        assert!(store.read("user_a", StateKey::Goals).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_many_lands_all_keys() {
        let store = MemoryJournalStore::new();

        store
            .write_many(
                "user_a",
                vec![
                    (StateKey::Goals, json!([{"text": "stretch"}])),
                    (StateKey::LastGoalGeneration, json!("2024-01-15")),
                ],
            )
            .await
            .unwrap();

        assert!(store.read("user_a", StateKey::Goals).await.unwrap().is_some());
        assert_eq!(
            store.read("user_a", StateKey::LastGoalGeneration).await.unwrap(),
            Some(json!("2024-01-15"))
        );
    }
}
