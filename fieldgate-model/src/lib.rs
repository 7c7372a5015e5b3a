//! Document model for fieldgate.
//!
//! Defines the types shared between the allow-listing core and the document
//! stores (hosts) it is bound to:
//! - [`Record`]: a plain field-name to JSON-value mapping
//! - [`Document`]: a persisted record with id, model name and timestamps
//! - [`ModelSchema`]: declares a model's fields, used by hosts in strict mode
//! - [`ConstructMode`]: whether a host keeps undeclared fields on construction
//! - [`DocumentValidator`]: optional host-side validation hook
//!
//! Nothing in this crate filters input. It is the contract that
//! `fieldgate-permit` and host implementations agree on.

mod document;
mod error;
mod ids;
mod schema;
mod validator;

pub use document::{Document, Record};
pub use error::{ModelError, ModelResult};
pub use ids::DocumentId;
pub use schema::{ConstructMode, ModelSchema, SchemaField};
pub use validator::DocumentValidator;
