use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client as DynamoClient};

use super::RecordStore;
use crate::error::StoreError;
use crate::types::{Item, KEY_ATTRIBUTE};

/// `RecordStore` backed by a DynamoDB table with partition key `email`
pub struct DynamoStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    async fn get(&self, key: &str) -> Result<Option<Item>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(StoreError::backend)?;

        Ok(result.item.filter(|item| !item.is_empty()))
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut start_key: Option<Item> = None;

        // Scan returns at most 1MB per page, keep going until LastEvaluatedKey is gone
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(StoreError::backend)?;

            items.extend(page.items.unwrap_or_default());

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!("Scanned {} items from {}", items.len(), self.table_name);
        Ok(items)
    }

    async fn put(&self, item: Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(StoreError::backend)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        // DeleteItem succeeds whether or not the key exists
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(StoreError::backend)?;
        Ok(())
    }
}
