use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::DocumentId;

/// A plain mapping from field name to value.
///
/// Source, override and sanitized records are all of this type, as is the
/// materialized form of a [`Document`].
pub type Record = serde_json::Map<String, Value>;

/// A document owned by a host store.
///
/// The `data` field holds the document's fields. Bookkeeping (id, model,
/// timestamps) lives beside it and is never reachable through filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub model: String,
    pub data: Record,
    pub created_at: i64,
    pub modified_at: i64,
}

impl Document {
    /// Creates a fresh document with a new id and both timestamps set to now.
    pub fn new(model: impl Into<String>, data: Record) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: DocumentId::new(),
            model: model.into(),
            data,
            created_at: now,
            modified_at: now,
        }
    }

    /// Materializes the document as a plain record: its fields plus `"id"`.
    pub fn to_record(&self) -> Record {
        let mut record = self.data.clone();
        record.insert("id".to_string(), Value::String(self.id.to_string()));
        record
    }
}
