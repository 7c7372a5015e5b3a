//! Attribute allow-listing for fieldgate documents.
//!
//! Untrusted input is projected onto a fixed set of permitted field names,
//! then a trusted override record is laid on top. Server-controlled fields
//! can therefore never be set by callers, yet can always be force-set by the
//! server itself.
//!
//! # Architecture
//!
//! - **Config**: [`configure`] turns [`PermitOptions`] into immutable
//!   [`ResolvedOptions`] (permitted set + routing flag)
//! - **Filter**: [`filter_fields`] is the pure projection + override step
//! - **Binding**: [`Permit`] pairs resolved options with a [`DocumentHost`]
//!   and exposes instance operations through [`DocumentOps`] and collection
//!   operations (`only`, `except`, `safe_create`) on itself
//!
//! Persistence is the host's business. Every persisting operation returns the
//! host's result unchanged, and optionally hands it to a [`Continuation`]
//! first.
//!
//! # Example
//!
//! ```
//! use fieldgate_permit::{PermitOptions, configure, filter_value};
//! use serde_json::json;
//!
//! let options = configure(Some(PermitOptions::from_json_value(&json!({
//!     "permitted": "name email"
//! }))));
//!
//! let clean = filter_value(
//!     &options.permitted,
//!     &json!({"name": "Ann", "email": "a@x.com", "role": "admin"}),
//!     Some(&json!({"role": "user"})),
//! );
//! assert_eq!(clean.get("role"), Some(&json!("user")));
//! assert_eq!(clean.len(), 3);
//! ```

mod collection;
mod config;
mod document;
mod error;
mod filter;
mod host;
mod permit;

pub use collection::{CreateInput, Created};
pub use config::{PermitOptions, Permitted, PermittedSet, ResolvedOptions, configure};
pub use document::DocumentOps;
pub use error::{PermitError, PermitResult};
pub use filter::{deep_merge, filter_fields, filter_value, omit, pick};
pub use host::DocumentHost;
pub use permit::{Continuation, EntryPoint, Permit};

pub use fieldgate_model::{ConstructMode, Document, ModelError, ModelResult, Record};
