//! In-memory document store for fieldgate.
//!
//! Implements [`DocumentHost`](fieldgate_permit::DocumentHost) so a
//! [`Permit`](fieldgate_permit::Permit) can be bound to it directly. Intended
//! for tests, prototypes and as a reference for hosts backed by a real
//! database.
//!
//! # Behavior
//!
//! - Strict construction keeps only the fields the [`ModelSchema`] declares;
//!   relaxed construction keeps everything
//! - Saves reject documents of another model, documents missing required
//!   fields, and anything the optional [`DocumentValidator`] refuses
//! - Native `create` is strict construction plus save, failing on the first
//!   rejected record
//!
//! [`ModelSchema`]: fieldgate_model::ModelSchema
//! [`DocumentValidator`]: fieldgate_model::DocumentValidator

mod memory;

pub use memory::MemoryStore;
