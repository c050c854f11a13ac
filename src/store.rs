//! Record sink abstraction and its DynamoDB implementation.
//!
//! Handlers never talk to DynamoDB directly. They receive an `Arc<dyn RecordSink>`,
//! which lets the HTTP layer be exercised in tests without a live table.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, error::DisplayErrorContext, types::AttributeValue};

use crate::models::record::TextRecord;

/// Shared handle to the configured record sink.
pub type SharedSink = Arc<dyn RecordSink>;

/// Errors raised while persisting a record.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The store rejected the write or could not be reached.
    #[error("Failed to write record: {0}")]
    Write(String),
}

/// Storage capability accepting one record at a time.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist a single record.
    async fn put(&self, record: &TextRecord) -> Result<(), SinkError>;
}

/// Create a DynamoDB client from the AWS default provider chain.
///
/// Region and credentials come from the environment, shared config files or an
/// instance role. When `endpoint` is set (e.g. `http://localhost:8000` for DynamoDB Local)
/// requests are sent there instead of the regional endpoint.
pub async fn create_client(endpoint: Option<&str>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(endpoint) = endpoint.filter(|e| !e.is_empty()) {
        loader = loader.endpoint_url(endpoint);
    }

    Client::new(&loader.load().await)
}

/// DynamoDB-backed record sink.
///
/// # Item Format
///
/// | Attribute   | Type |
/// |-------------|------|
/// | `timestamp` | N    |
/// | `hash`      | S    |
/// | `text`      | S    |
///
/// The table's key schema is owned by whoever provisioned it.
#[derive(Clone)]
pub struct DynamoRecordSink {
    client: Client,
    table_name: String,
}

impl DynamoRecordSink {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

/// Convert a record into a DynamoDB item.
pub fn to_item(record: &TextRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "timestamp".to_string(),
            AttributeValue::N(record.timestamp.to_string()),
        ),
        ("hash".to_string(), AttributeValue::S(record.hash.clone())),
        ("text".to_string(), AttributeValue::S(record.text.clone())),
    ])
}

#[async_trait]
impl RecordSink for DynamoRecordSink {
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(table = %self.table_name, hash = %record.hash)
    )]
    async fn put(&self, record: &TextRecord) -> Result<(), SinkError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| SinkError::Write(DisplayErrorContext(e).to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_carries_three_typed_attributes() {
        let record = TextRecord::new("hello", 1_700_000_000);
        let item = to_item(&record);

        assert_eq!(item.len(), 3);
        assert_eq!(
            item.get("timestamp"),
            Some(&AttributeValue::N("1700000000".to_string()))
        );
        assert_eq!(
            item.get("hash"),
            Some(&AttributeValue::S(
                "5d41402abc4b2a76b9719d911017c592".to_string()
            ))
        );
        assert_eq!(
            item.get("text"),
            Some(&AttributeValue::S("hello".to_string()))
        );
    }

    #[test]
    fn empty_text_is_still_marshalled() {
        let item = to_item(&TextRecord::new("", 1));

        assert_eq!(item.get("text"), Some(&AttributeValue::S(String::new())));
    }
}
