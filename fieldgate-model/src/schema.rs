use serde::{Deserialize, Serialize};

use crate::Record;

/// Declares a model's fields for hosts that construct documents strictly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSchema {
    pub model: String,
    pub fields: Vec<SchemaField>,
}

impl ModelSchema {
    pub fn new(model: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            model: model.into(),
            fields,
        }
    }

    /// Whether `name` is a declared field.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Names of required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }

    /// Shapes a record for construction under `mode`.
    ///
    /// Strict mode drops every undeclared field; relaxed mode keeps the record
    /// as is. The reserved `"id"` key is dropped in both modes.
    pub fn shape(&self, mut record: Record, mode: ConstructMode) -> Record {
        record.remove("id");
        match mode {
            ConstructMode::Strict => {
                record.retain(|key, _| self.declares(key));
                record
            }
            ConstructMode::Relaxed => record,
        }
    }
}

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl SchemaField {
    /// An optional field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// How a host treats fields its schema does not declare when constructing
/// a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructMode {
    /// Undeclared fields are dropped.
    #[default]
    Strict,
    /// Every field is kept, including ones introduced by trusted overrides.
    Relaxed,
}
