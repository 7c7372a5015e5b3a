//! Shared test host for permit integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use fieldgate_permit::{
    ConstructMode, Continuation, Document, DocumentHost, ModelError, ModelResult, Record,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// In-process host that records every call.
///
/// Strict construction keeps only `declared` fields. With [`TestHost::rejecting`],
/// saves of documents holding that field value fail with a validation error.
pub struct TestHost {
    model: String,
    declared: Vec<String>,
    reject: Option<(String, Value)>,
    pub saved: Mutex<Vec<Document>>,
    pub constructed: Mutex<Vec<ConstructMode>>,
    pub native_created: Mutex<Vec<Vec<Record>>>,
}

impl TestHost {
    pub fn new(model: &str, declared: &[&str]) -> Self {
        Self {
            model: model.to_string(),
            declared: declared.iter().map(|s| s.to_string()).collect(),
            reject: None,
            saved: Mutex::new(Vec::new()),
            constructed: Mutex::new(Vec::new()),
            native_created: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(mut self, field: &str, value: Value) -> Self {
        self.reject = Some((field.to_string(), value));
        self
    }

    pub fn saved_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    pub fn last_saved(&self) -> Option<Document> {
        self.saved.lock().unwrap().last().cloned()
    }

    fn check(&self, document: &Document) -> ModelResult<()> {
        if let Some((field, value)) = &self.reject {
            if document.data.get(field) == Some(value) {
                return Err(ModelError::Validation {
                    model: self.model.clone(),
                    message: format!("{field} rejected"),
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentHost for TestHost {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn construct(&self, mut record: Record, mode: ConstructMode) -> Document {
        self.constructed.lock().unwrap().push(mode);
        if mode == ConstructMode::Strict {
            record.retain(|key, _| self.declared.iter().any(|d| d == key));
        }
        Document::new(self.model.clone(), record)
    }

    async fn save(&self, document: &Document) -> ModelResult<Document> {
        tokio::task::yield_now().await;
        self.check(document)?;
        let mut stored = document.clone();
        stored.modified_at += 1;
        self.saved.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn create(&self, records: Vec<Record>) -> ModelResult<Vec<Document>> {
        self.native_created.lock().unwrap().push(records.clone());
        let mut out = Vec::with_capacity(records.len());
        for record in records {
            let document = self.construct(record, ConstructMode::Strict);
            out.push(self.save(&document).await?);
        }
        Ok(out)
    }
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// What a continuation observed: the value on success, the error text on failure.
pub type Seen<T> = Arc<Mutex<Option<Result<T, String>>>>;

/// A continuation that stores what it was called with.
pub fn capture<T: Clone + Send + 'static>() -> (Seen<T>, Continuation<T>) {
    let seen: Seen<T> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let done: Continuation<T> = Box::new(move |result: &ModelResult<T>| {
        let observed = result.as_ref().map(Clone::clone).map_err(|e| e.to_string());
        *sink.lock().unwrap() = Some(observed);
    });
    (seen, done)
}
