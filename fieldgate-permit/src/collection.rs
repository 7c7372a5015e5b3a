//! Collection-level operations: batch creation through the allow-list.

use fieldgate_model::{ConstructMode, Document, ModelResult, Record};
use futures::future::try_join_all;
use serde_json::Value;
use tracing::debug;

use crate::host::DocumentHost;
use crate::permit::{Continuation, EntryPoint, Permit, assign_unfiltered, settle};

/// One record or a batch of records to create.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateInput {
    One(Record),
    Many(Vec<Record>),
}

impl CreateInput {
    /// Reads raw JSON: an array is a batch, anything else a single record.
    ///
    /// Elements that are not objects become empty records.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Many(items.into_iter().map(into_record).collect()),
            other => Self::One(into_record(other)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn into_records(self) -> Vec<Record> {
        match self {
            Self::One(record) => vec![record],
            Self::Many(records) => records,
        }
    }
}

fn into_record(value: Value) -> Record {
    match value {
        Value::Object(record) => record,
        _ => Record::new(),
    }
}

impl From<Record> for CreateInput {
    fn from(record: Record) -> Self {
        Self::One(record)
    }
}

impl From<Vec<Record>> for CreateInput {
    fn from(records: Vec<Record>) -> Self {
        Self::Many(records)
    }
}

/// Documents produced by a create call.
///
/// Exactly one requested document yields [`Created::One`]; any other count
/// yields [`Created::Many`].
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    One(Document),
    Many(Vec<Document>),
}

impl Created {
    fn from_batch(mut documents: Vec<Document>) -> Self {
        match documents.pop() {
            Some(document) if documents.is_empty() => Self::One(document),
            Some(document) => {
                documents.push(document);
                Self::Many(documents)
            }
            None => Self::Many(documents),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(documents) => documents.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All created documents, in request order.
    pub fn into_vec(self) -> Vec<Document> {
        match self {
            Self::One(document) => vec![document],
            Self::Many(documents) => documents,
        }
    }
}

impl<H: DocumentHost> Permit<H> {
    /// Filters every record with the same `overrides`, constructs each in
    /// relaxed mode (so override-only fields survive the host's schema) and
    /// saves them all.
    ///
    /// Every save is issued before any is awaited. The batch fails as a whole
    /// if any single save fails.
    pub async fn safe_create(
        &self,
        docs: impl Into<CreateInput>,
        overrides: Option<&Record>,
        done: Option<Continuation<Created>>,
    ) -> ModelResult<Created> {
        let documents: Vec<Document> = docs
            .into()
            .into_records()
            .iter()
            .map(|source| {
                self.host
                    .construct(self.sanitize(source, overrides), ConstructMode::Relaxed)
            })
            .collect();
        debug!(
            model = %self.host.model_name(),
            count = documents.len(),
            "Creating filtered documents"
        );

        let pending = documents.iter().map(|document| self.host.save(document));
        let result = try_join_all(pending).await.map(Created::from_batch);
        settle(result, done)
    }

    /// The type's create entry point.
    ///
    /// Runs [`safe_create`](Self::safe_create) when bound with
    /// `override_methods`; otherwise hands the unfiltered records (with
    /// `overrides` assigned on top) to the host's own create.
    pub async fn create(
        &self,
        docs: impl Into<CreateInput>,
        overrides: Option<&Record>,
        done: Option<Continuation<Created>>,
    ) -> ModelResult<Created> {
        match self.entry_point() {
            EntryPoint::Safe => self.safe_create(docs, overrides, done).await,
            EntryPoint::Native => {
                let records = docs
                    .into()
                    .into_records()
                    .iter()
                    .map(|source| assign_unfiltered(source, overrides))
                    .collect();
                let result = self.host.create(records).await.map(Created::from_batch);
                settle(result, done)
            }
        }
    }
}
