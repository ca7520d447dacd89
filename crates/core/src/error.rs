use crate::types::DbId;

/// Domain error taxonomy shared by all layers.
///
/// The API layer maps each kind to an HTTP outcome deterministically:
/// `NotFound` to an empty 404, `Validation` to 400, `Conflict` and
/// `Internal` to 500. Nothing above the store re-inspects exception
/// types to decide what happened.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
