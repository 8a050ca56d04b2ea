//! In-process key-value storage

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use std::collections::HashMap;

use crate::domain::traits::KvStore;
use crate::application::errors::StorageError;

/// Memory-backed store standing in for the host KV service
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    kv: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.kv.read().await.len()
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let kv = self.kv.read().await;
        Ok(kv.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut kv = self.kv.write().await;
        kv.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut kv = self.kv.write().await;
        kv.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", b"v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(b"v".to_vec()));
        assert_eq!(store.len().await, 1);

        store.delete("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryKvStore::new();
        let other = store.clone();
        store.set("k", b"1").await.unwrap();
        assert_eq!(other.get("k").await.unwrap(), Some(b"1".to_vec()));
    }
}
