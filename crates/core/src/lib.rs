//! Domain types, vocabularies, and validation for the folio backend.
//!
//! This crate is persistence- and transport-agnostic: it defines the shared
//! ID/timestamp types, the [`error::CoreError`] taxonomy, the document-request
//! vocabularies (status, priority tier, field type) with their write-boundary
//! validators, and the pure request-builder view model.

pub mod builder;
pub mod cv;
pub mod document_request;
pub mod error;
pub mod types;
