use parking_lot::Mutex;
use serde_json::Value;

use super::types::AttemptRecord;
use crate::store::keys::quiz_results_key;
use crate::store::KeyValueStore;

/// Append-only attempt log kept as a single collection under one key.
///
/// Unreadable storage reads as empty history and failed writes are logged and
/// dropped, so practice never blocks on persistence.
pub struct HistoryStore<S> {
    store: S,
    append_lock: Mutex<()>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            append_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn append(&self, record: AttemptRecord) {
        let _guard = self.append_lock.lock();
        let mut records = self.records();
        records.push(record);

        let value = match serde_json::to_value(&records) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode attempt history");
                return;
            }
        };
        if let Err(err) = self.store.set(quiz_results_key(), value) {
            tracing::warn!(error = %err, "failed to persist attempt history");
        }
    }

    /// Score of the most recently appended record for the topic.
    pub fn last_score(&self, topic_id: &str) -> Option<u8> {
        self.records()
            .into_iter()
            .rev()
            .find(|r| r.topic_id == topic_id)
            .map(|r| r.score)
    }

    /// All records in insertion order.
    pub fn records(&self) -> Vec<AttemptRecord> {
        match self.store.get(quiz_results_key()) {
            None => Vec::new(),
            Some(Value::Array(items)) => items.into_iter().filter_map(decode_record).collect(),
            Some(other) => {
                tracing::warn!(kind = value_kind(&other), "attempt history is not a list, ignoring");
                Vec::new()
            }
        }
    }

    pub fn records_for(&self, topic_id: &str) -> Vec<AttemptRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.topic_id == topic_id)
            .collect()
    }
}

fn decode_record(item: Value) -> Option<AttemptRecord> {
    match serde_json::from_value::<AttemptRecord>(item) {
        Ok(record) if record.score <= 100 => Some(record),
        Ok(record) => {
            tracing::warn!(score = record.score, topic_id = %record.topic_id, "skipping out-of-range score");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "skipping malformed attempt record");
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
