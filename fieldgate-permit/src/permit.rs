//! Binding of resolved options to a document host.

use fieldgate_model::{Document, ModelResult, Record};
use std::sync::Arc;
use tracing::info;

use crate::config::{PermittedSet, ResolvedOptions};
use crate::document::DocumentOps;
use crate::filter::{filter_fields, omit, pick};
use crate::host::DocumentHost;

/// Completion callback for persisting operations.
///
/// Called exactly once with the host's result, before that same result is
/// returned to the caller.
pub type Continuation<T> = Box<dyn FnOnce(&ModelResult<T>) + Send>;

/// Which implementation a native entry point (`update`, `create`) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    /// Unfiltered: the host's own behavior.
    Native,
    /// Routed through the allow-list.
    Safe,
}

/// A document type with allow-listing bound to it.
///
/// Each permit owns its options, so binding several document types never
/// shares state between them.
#[derive(Debug)]
pub struct Permit<H> {
    pub(crate) host: Arc<H>,
    options: ResolvedOptions,
    entry: EntryPoint,
}

impl<H> Clone for Permit<H> {
    fn clone(&self) -> Self {
        Self {
            host: Arc::clone(&self.host),
            options: self.options.clone(),
            entry: self.entry,
        }
    }
}

impl<H: DocumentHost> Permit<H> {
    /// Binds `options` to `host`.
    ///
    /// With `override_methods` set, [`DocumentOps::update`] and
    /// [`Permit::create`] run the safe variants for every call.
    pub fn bind(host: H, options: ResolvedOptions) -> Self {
        Self::bind_shared(Arc::new(host), options)
    }

    /// [`bind`](Self::bind) for a host that is already shared, e.g. one store
    /// bound under several option sets.
    pub fn bind_shared(host: Arc<H>, options: ResolvedOptions) -> Self {
        let entry = if options.override_methods {
            EntryPoint::Safe
        } else {
            EntryPoint::Native
        };
        info!(
            model = %host.model_name(),
            permitted = options.permitted.len(),
            entry = ?entry,
            "Permit bound"
        );
        Self {
            host,
            options,
            entry,
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn permitted(&self) -> &PermittedSet {
        &self.options.permitted
    }

    /// Routing of the native `update` and `create` entry points.
    pub fn entry_point(&self) -> EntryPoint {
        self.entry
    }

    /// Filters `source` through this permit's allow-list and applies
    /// `overrides`.
    pub fn sanitize(&self, source: &Record, overrides: Option<&Record>) -> Record {
        filter_fields(&self.options.permitted, source, overrides)
    }

    /// Instance operations on `document`.
    pub fn document<'a>(&'a self, document: &'a mut Document) -> DocumentOps<'a, H> {
        DocumentOps::new(self, document)
    }

    /// Projects any record onto the named fields.
    pub fn only<I, S>(record: &Record, fields: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pick(record, fields)
    }

    /// Any record without the named fields.
    pub fn except<I, S>(record: &Record, fields: I) -> Record
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        omit(record, fields)
    }
}

/// Shallow assignment without any filtering; the native behavior.
pub(crate) fn assign_unfiltered(source: &Record, overrides: Option<&Record>) -> Record {
    let mut record = source.clone();
    if let Some(overrides) = overrides {
        record.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    record
}

pub(crate) fn settle<T>(result: ModelResult<T>, done: Option<Continuation<T>>) -> ModelResult<T> {
    if let Some(done) = done {
        done(&result);
    }
    result
}
