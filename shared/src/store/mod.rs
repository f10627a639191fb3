pub mod dynamo;
pub mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::Item;

/// Key-value table holding one item per `email`
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the item stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<Item>, StoreError>;

    /// Every item in the table
    async fn scan(&self) -> Result<Vec<Item>, StoreError>;

    /// Insert or overwrite the item under its `email` key
    async fn put(&self, item: Item) -> Result<(), StoreError>;

    /// Remove the item under `key`. Absent keys are not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
