use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::BTreeMap;
use std::sync::Mutex;

use super::RecordStore;
use crate::error::StoreError;
use crate::types::{Item, KEY_ATTRIBUTE};

/// In-process table for local runs and tests.
/// Items come back from `scan` in key order.
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Item>, StoreError> {
        let items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(items.get(key).cloned())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(items.values().cloned().collect())
    }

    async fn put(&self, item: Item) -> Result<(), StoreError> {
        let key = match item.get(KEY_ATTRIBUTE) {
            Some(AttributeValue::S(key)) if !key.is_empty() => key.clone(),
            _ => return Err(StoreError::MissingKey),
        };
        let mut items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
        items.insert(key, item);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
        items.remove(key);
        Ok(())
    }
}
