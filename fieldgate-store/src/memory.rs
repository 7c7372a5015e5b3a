use async_trait::async_trait;
use fieldgate_model::{
    ConstructMode, Document, DocumentId, DocumentValidator, ModelError, ModelResult, ModelSchema,
    Record,
};
use fieldgate_permit::DocumentHost;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Document store holding one model's documents in memory.
pub struct MemoryStore {
    schema: ModelSchema,
    validator: Option<Arc<dyn DocumentValidator>>,
    documents: RwLock<HashMap<DocumentId, Document>>,
}

impl MemoryStore {
    pub fn new(schema: ModelSchema) -> Self {
        Self {
            schema,
            validator: None,
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a store that runs `validator` before every save.
    pub fn with_validator(schema: ModelSchema, validator: impl DocumentValidator + 'static) -> Self {
        Self {
            validator: Some(Arc::new(validator)),
            ..Self::new(schema)
        }
    }

    pub fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    /// Returns the stored copy of a document.
    pub async fn get(&self, id: &DocumentId) -> ModelResult<Document> {
        self.documents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| ModelError::NotFound(id.to_string()))
    }

    /// All stored documents, oldest id first.
    pub async fn all(&self) -> Vec<Document> {
        let mut documents: Vec<Document> = self.documents.read().await.values().cloned().collect();
        documents.sort_by_key(|d| d.id.as_uuid());
        documents
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    fn check(&self, document: &Document) -> ModelResult<()> {
        if document.model != self.schema.model {
            return Err(ModelError::ModelMismatch {
                expected: self.schema.model.clone(),
                actual: document.model.clone(),
            });
        }
        if let Some(field) = self
            .schema
            .required_fields()
            .find(|field| !document.data.contains_key(*field))
        {
            return Err(ModelError::MissingField {
                model: self.schema.model.clone(),
                field: field.to_string(),
            });
        }
        if let Some(validator) = &self.validator {
            validator
                .validate(document)
                .map_err(|message| ModelError::Validation {
                    model: self.schema.model.clone(),
                    message,
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentHost for MemoryStore {
    fn model_name(&self) -> &str {
        &self.schema.model
    }

    fn construct(&self, record: Record, mode: ConstructMode) -> Document {
        Document::new(self.schema.model.clone(), self.schema.shape(record, mode))
    }

    async fn save(&self, document: &Document) -> ModelResult<Document> {
        if let Err(e) = self.check(document) {
            warn!(model = %self.schema.model, id = %document.id, error = %e, "Save rejected");
            return Err(e);
        }

        let mut stored = document.clone();
        let mut documents = self.documents.write().await;
        if let Some(existing) = documents.get(&stored.id) {
            stored.created_at = existing.created_at;
        }
        stored.modified_at = chrono::Utc::now()
            .timestamp_millis()
            .max(document.modified_at);
        documents.insert(stored.id, stored.clone());
        debug!(
            model = %self.schema.model,
            id = %stored.id,
            fields = stored.data.len(),
            "Document saved"
        );
        Ok(stored)
    }

    async fn create(&self, records: Vec<Record>) -> ModelResult<Vec<Document>> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let document = self.construct(record, ConstructMode::Strict);
            created.push(self.save(&document).await?);
        }
        debug!(model = %self.schema.model, count = created.len(), "Documents created");
        Ok(created)
    }
}
