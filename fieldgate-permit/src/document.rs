//! Instance-level operations on a single document.

use fieldgate_model::{Document, ModelResult, Record};
use tracing::debug;

use crate::filter::{deep_merge, omit, pick};
use crate::host::DocumentHost;
use crate::permit::{Continuation, EntryPoint, Permit, assign_unfiltered, settle};

/// A document borrowed together with the permit that guards it.
///
/// Obtained from [`Permit::document`]. Mutating operations return `&mut Self`
/// so they chain.
pub struct DocumentOps<'a, H> {
    permit: &'a Permit<H>,
    document: &'a mut Document,
}

impl<'a, H: DocumentHost> DocumentOps<'a, H> {
    pub(crate) fn new(permit: &'a Permit<H>, document: &'a mut Document) -> Self {
        Self { permit, document }
    }

    pub fn document(&self) -> &Document {
        &*self.document
    }

    /// The materialized document projected onto `fields`.
    ///
    /// The permitted set is not consulted; the caller names the fields.
    pub fn only<I, S>(&self, fields: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pick(&self.document.to_record(), fields)
    }

    /// The materialized document without `fields`.
    pub fn except<I, S>(&self, fields: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        omit(&self.document.to_record(), fields)
    }

    /// Filters `source`, applies `overrides`, and shallow-assigns the result
    /// onto the document. Fields not in the result are left alone.
    ///
    /// The `"id"` key is never written into the document's fields, even when
    /// permitted or overridden; the id lives beside the data.
    pub fn assign(&mut self, source: &Record, overrides: Option<&Record>) -> &mut Self {
        let filtered = without_id(self.permit.sanitize(source, overrides));
        self.document.data.extend(filtered);
        self
    }

    /// Like [`assign`](Self::assign), but nested objects and arrays are merged
    /// recursively instead of replaced.
    pub fn merge(&mut self, source: &Record, overrides: Option<&Record>) -> &mut Self {
        let filtered = without_id(self.permit.sanitize(source, overrides));
        deep_merge(&mut self.document.data, filtered);
        self
    }

    /// [`assign`](Self::assign) followed by a save.
    ///
    /// On success the document is replaced by the stored copy. The host's
    /// result is handed to `done` (if any) and then returned unchanged.
    pub async fn safe_update(
        &mut self,
        source: &Record,
        overrides: Option<&Record>,
        done: Option<Continuation<Document>>,
    ) -> ModelResult<Document> {
        self.assign(source, overrides);
        self.persist(done).await
    }

    /// The type's update entry point.
    ///
    /// Runs [`safe_update`](Self::safe_update) when the permit was bound with
    /// `override_methods`; otherwise assigns `source` unfiltered and saves.
    pub async fn update(
        &mut self,
        source: &Record,
        overrides: Option<&Record>,
        done: Option<Continuation<Document>>,
    ) -> ModelResult<Document> {
        match self.permit.entry_point() {
            EntryPoint::Safe => self.safe_update(source, overrides, done).await,
            EntryPoint::Native => {
                self.document
                    .data
                    .extend(without_id(assign_unfiltered(source, overrides)));
                self.persist(done).await
            }
        }
    }

    async fn persist(&mut self, done: Option<Continuation<Document>>) -> ModelResult<Document> {
        debug!(
            model = %self.document.model,
            id = %self.document.id,
            "Saving document"
        );
        let result = self.permit.host.save(&*self.document).await;
        if let Ok(saved) = &result {
            *self.document = saved.clone();
        }
        settle(result, done)
    }
}

fn without_id(mut record: Record) -> Record {
    record.remove("id");
    record
}
