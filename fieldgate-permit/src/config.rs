//! Permit options and their resolution into an immutable permitted set.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::error::PermitResult;

/// Options supplied once when a document type is bound.
///
/// Keys are camelCase (`permitted`, `overrideMethods`) so option documents
/// written for other document stores load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PermitOptions {
    /// Field names callers may set.
    pub permitted: Permitted,
    /// Route the type's native update/create through the safe variants.
    #[serde(deserialize_with = "lenient_bool")]
    pub override_methods: bool,
}

impl PermitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the permitted fields from a list of names.
    #[must_use]
    pub fn with_permitted<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permitted = Permitted::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the permitted fields from a space-delimited string.
    #[must_use]
    pub fn with_delimited(mut self, fields: impl Into<String>) -> Self {
        self.permitted = Permitted::Delimited(fields.into());
        self
    }

    #[must_use]
    pub fn with_override_methods(mut self, enabled: bool) -> Self {
        self.override_methods = enabled;
        self
    }

    /// Reads options from a JSON value. Never fails: anything that is not an
    /// object yields the defaults, and malformed fields degrade to their
    /// defaults.
    pub fn from_json_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::deserialize(value).unwrap_or_default()
    }

    /// Parses options from JSON text. Only a syntax error is reported.
    pub fn from_json_str(s: &str) -> PermitResult<Self> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from_json_value(&value))
    }

    /// Parses options from TOML text. Only a syntax error is reported.
    pub fn from_toml_str(s: &str) -> PermitResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Resolves into the immutable form consumed by [`Permit`](crate::Permit).
    pub fn resolve(self) -> ResolvedOptions {
        let resolved = ResolvedOptions {
            permitted: self.permitted.into_set(),
            override_methods: self.override_methods,
        };
        debug!(
            permitted = resolved.permitted.len(),
            override_methods = resolved.override_methods,
            "Permit options resolved"
        );
        resolved
    }
}

/// Resolves optional options, falling back to the defaults (nothing
/// permitted, native entry points untouched).
pub fn configure(options: Option<PermitOptions>) -> ResolvedOptions {
    options.unwrap_or_default().resolve()
}

/// The permitted fields as written in the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Permitted {
    /// A list of names, used verbatim.
    Fields(Vec<String>),
    /// A single string; split on whitespace when it contains a space.
    Delimited(String),
}

impl Default for Permitted {
    fn default() -> Self {
        Self::Fields(Vec::new())
    }
}

impl Permitted {
    /// Reads a permitted value leniently: strings and arrays are accepted,
    /// non-string array items are skipped, anything else means "nothing".
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Delimited(s.clone()),
            Value::Array(items) => Self::Fields(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
            ),
            _ => Self::default(),
        }
    }

    fn into_set(self) -> PermittedSet {
        match self {
            Self::Fields(fields) => PermittedSet::new(fields),
            Self::Delimited(s) if s.contains(' ') => PermittedSet::new(s.split_whitespace()),
            Self::Delimited(s) if s.is_empty() => PermittedSet::default(),
            Self::Delimited(s) => PermittedSet::new([s]),
        }
    }
}

impl<'de> Deserialize<'de> for Permitted {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Ordered, immutable set of permitted field names.
///
/// Duplicates are kept; picking by name makes them harmless.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermittedSet(Arc<[String]>);

impl PermittedSet {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|f| f == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Options after resolution. Cheap to clone; never changes once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub permitted: PermittedSet,
    pub override_methods: bool,
}
