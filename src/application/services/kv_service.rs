use std::sync::Arc;

use crate::domain::traits::KvStore;
use crate::application::errors::StorageError;

const TEMPLATE_KEY_PREFIX: &str = "template_key-";

/// Typed access to the plugin's KV records
#[derive(Clone)]
pub struct TemplateStore {
    store: Arc<dyn KvStore>,
}

impl TemplateStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn key(user_id: &str) -> String {
        format!("{}{}", TEMPLATE_KEY_PREFIX, user_id)
    }

    /// Missing records read as an empty string.
    pub async fn get_template_data(&self, user_id: &str) -> Result<String, StorageError> {
        let raw = self.store.get(&Self::key(user_id)).await
            .map_err(|e| StorageError::Backend(format!("failed to get template data: {}", e)))?;

        match raw {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(String::new()),
        }
    }

    pub async fn set_template_data(&self, user_id: &str, data: &str) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(data)?;
        self.store.set(&Self::key(user_id), &bytes).await
            .map_err(|e| StorageError::Backend(format!("failed to set template data: {}", e)))
    }
}
