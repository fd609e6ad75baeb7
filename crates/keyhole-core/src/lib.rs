//! Core types and traits for the keyhole link shortener.
//!
//! This crate provides the vocabulary shared by the shortener and
//! redirector services: short identifiers and their base-62 encoding,
//! the stored record, the key-value store contract, and the error
//! taxonomy.

pub mod encoding;
pub mod error;
pub mod short_id;
pub mod store;

pub use error::{CoreError, StorageError};
pub use short_id::ShortId;
pub use store::{LinkRecord, LinkStore, ReadLinkStore};
