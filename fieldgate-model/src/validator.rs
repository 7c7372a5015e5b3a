use crate::Document;

/// Optional trait for hosts that need custom checks before a document is
/// persisted.
///
/// Most models do NOT need this. Required-field checks come from the
/// `ModelSchema`; implement this only for rules the schema cannot express
/// (value ranges, cross-field constraints, uniqueness against the store).
pub trait DocumentValidator: Send + Sync {
    /// Validate a document before it is persisted.
    /// Return `Err(message)` to reject the write.
    fn validate(&self, document: &Document) -> Result<(), String> {
        let _ = document;
        Ok(())
    }
}
