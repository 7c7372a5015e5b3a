//! The filter engine: projection onto the permitted set, then overrides.
//!
//! Everything here is a pure function of its arguments.

use serde_json::Value;
use std::collections::HashSet;
use tracing::trace;

use crate::Record;
use crate::config::PermittedSet;

/// Produces a sanitized record: the pairs of `source` whose key is permitted,
/// with every pair of `overrides` assigned on top.
///
/// Override keys are not checked against `permitted`. Permitted keys missing
/// from `source` are simply absent from the result.
pub fn filter_fields(
    permitted: &PermittedSet,
    source: &Record,
    overrides: Option<&Record>,
) -> Record {
    let mut filtered = pick(source, permitted.iter());
    trace!(
        kept = filtered.len(),
        rejected = source.len() - filtered.len(),
        "Source record filtered"
    );
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            filtered.insert(key.clone(), value.clone());
        }
    }
    filtered
}

/// [`filter_fields`] over raw JSON.
///
/// A source that is not an object is treated as empty; an override that is not
/// an object is ignored.
pub fn filter_value(permitted: &PermittedSet, source: &Value, overrides: Option<&Value>) -> Record {
    let empty = Record::new();
    let source = source.as_object().unwrap_or(&empty);
    filter_fields(permitted, source, overrides.and_then(Value::as_object))
}

/// Projects `record` onto exactly the named fields that it contains.
pub fn pick<I, S>(record: &Record, fields: I) -> Record
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .filter_map(|field| {
            let field = field.as_ref();
            record.get(field).map(|value| (field.to_owned(), value.clone()))
        })
        .collect()
}

/// Returns `record` without the named fields.
pub fn omit<I, S>(record: &Record, fields: I) -> Record
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let fields: Vec<S> = fields.into_iter().collect();
    let excluded: HashSet<&str> = fields.iter().map(AsRef::as_ref).collect();
    record
        .iter()
        .filter(|(key, _)| !excluded.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Recursively merges `patch` into `target`.
///
/// Objects merge key by key and arrays merge index by index (extra patch
/// elements are appended). Any other patch value, `null` included, replaces
/// the target value.
pub fn deep_merge(target: &mut Record, patch: Record) {
    for (key, value) in patch {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

fn merge_value(target: &mut Value, patch: Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => deep_merge(target, patch),
        (Value::Array(target), Value::Array(patch)) => {
            for (idx, item) in patch.into_iter().enumerate() {
                match target.get_mut(idx) {
                    Some(existing) => merge_value(existing, item),
                    None => target.push(item),
                }
            }
        }
        (slot, patch) => *slot = patch,
    }
}
