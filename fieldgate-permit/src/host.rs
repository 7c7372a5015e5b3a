//! The contract a document store must satisfy to be bound by a [`Permit`](crate::Permit).

use async_trait::async_trait;
use fieldgate_model::{ConstructMode, Document, ModelResult, Record};

/// A document type together with its persistence primitives.
///
/// The allow-listing core never validates, stores or queries documents
/// itself; it only decides which fields reach these calls.
#[async_trait]
pub trait DocumentHost: Send + Sync {
    /// Name of the model this host stores.
    fn model_name(&self) -> &str;

    /// Builds a new, unsaved document from a plain record.
    ///
    /// In [`ConstructMode::Strict`] the host may drop fields its schema does
    /// not declare; [`ConstructMode::Relaxed`] must keep them all.
    fn construct(&self, record: Record, mode: ConstructMode) -> Document;

    /// Persists a document, returning the stored copy.
    async fn save(&self, document: &Document) -> ModelResult<Document>;

    /// Native batch create: strict construction, then persistence.
    async fn create(&self, records: Vec<Record>) -> ModelResult<Vec<Document>>;
}
