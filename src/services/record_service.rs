//! Record writer: turns a raw request body into a stored text record.
//!
//! # Process
//!
//! 1. Decode the body as a JSON object
//! 2. Validate that `text` is present and a string
//! 3. Hash the original text, truncate it, stamp the current time
//! 4. Write exactly one record to the sink
//!
//! There is no retry and no deduplication: identical texts produce separate records.

use chrono::Utc;
use serde_json::{Map, Value};

use crate::{
    error::AppError,
    models::record::{RecordRequest, TextRecord},
    store::RecordSink,
};

/// Decode and validate a `POST /record` body.
///
/// # Errors
///
/// - `AppError::MalformedBody` if the bytes are not a JSON object
/// - `AppError::InvalidRequest` if `text` is missing or not a string
pub fn parse_request(body: &[u8]) -> Result<RecordRequest, AppError> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;

    Ok(RecordRequest::try_from(object)?)
}

/// Build a record stamped with the current time and write it to `sink`.
pub async fn write_record(
    sink: &dyn RecordSink,
    request: RecordRequest,
) -> Result<TextRecord, AppError> {
    let record = TextRecord::new(&request.text, Utc::now().timestamp());

    sink.put(&record).await?;

    tracing::debug!(
        hash = %record.hash,
        timestamp = record.timestamp,
        chars = record.text.chars().count(),
        "Text record written"
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SinkError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CapturingSink {
        records: Mutex<Vec<TextRecord>>,
    }

    #[async_trait]
    impl RecordSink for CapturingSink {
        async fn put(&self, record: &TextRecord) -> Result<(), SinkError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct RejectingSink;

    #[async_trait]
    impl RecordSink for RejectingSink {
        async fn put(&self, _record: &TextRecord) -> Result<(), SinkError> {
            Err(SinkError::Write("ProvisionedThroughputExceededException".to_string()))
        }
    }

    #[test]
    fn parses_text_field() {
        let request = parse_request(br#"{"text":"hello"}"#).unwrap();

        assert_eq!(request.text, "hello");
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_request(b"{\"text\":"),
            Err(AppError::MalformedBody(_))
        ));
        assert!(matches!(parse_request(b""), Err(AppError::MalformedBody(_))));
    }

    #[test]
    fn non_object_json_is_malformed() {
        assert!(matches!(
            parse_request(br#"["hello"]"#),
            Err(AppError::MalformedBody(_))
        ));
        assert!(matches!(
            parse_request(br#""hello""#),
            Err(AppError::MalformedBody(_))
        ));
    }

    #[test]
    fn wrong_text_type_is_invalid_request() {
        assert!(matches!(
            parse_request(br#"{"text":["a"]}"#),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            parse_request(br#"{}"#),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn writes_one_record_per_call() {
        let sink = CapturingSink::default();
        let before = Utc::now().timestamp();

        let request = RecordRequest {
            text: "hello".to_string(),
        };
        write_record(&sink, request.clone()).await.unwrap();
        write_record(&sink, request).await.unwrap();

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        for record in records.iter() {
            assert_eq!(record.hash, "5d41402abc4b2a76b9719d911017c592");
            assert_eq!(record.text, "hello");
            assert!(record.timestamp >= before);
            assert!(record.timestamp <= Utc::now().timestamp());
        }
    }

    #[tokio::test]
    async fn sink_failure_is_propagated() {
        let result = write_record(
            &RejectingSink,
            RecordRequest {
                text: "hello".to_string(),
            },
        )
        .await;

        assert!(matches!(result, Err(AppError::Sink(SinkError::Write(_)))));
    }
}
