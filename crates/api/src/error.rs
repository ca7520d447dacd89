use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use folio_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the wire contract the frontend
/// relies on: 404s carry an empty body, every other failure carries an
/// `{"error": "..."}` JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `folio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

static EXPOSE_ERROR_DETAIL: OnceLock<bool> = OnceLock::new();

/// Record whether 500 responses may carry the underlying error text.
///
/// First call wins; integration tests build many routers in one process,
/// so later calls are ignored.
pub(crate) fn set_expose_error_detail(expose: bool) {
    let _ = EXPOSE_ERROR_DETAIL.set(expose);
}

fn expose_error_detail() -> bool {
    *EXPOSE_ERROR_DETAIL.get_or_init(|| true)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => database_response(err),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
        }
    }
}

/// Map a [`CoreError`] onto the HTTP contract.
///
/// - `NotFound` -> 404 with an empty body.
/// - `Validation` -> 400 with the message.
/// - `Conflict` -> 500 with the message.
/// - `Internal` -> 500, message gated by `EXPOSE_ERROR_DETAIL`.
fn core_response(err: CoreError) -> Response {
    match err {
        CoreError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
        CoreError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
        }
        CoreError::Conflict(msg) => {
            tracing::error!(error = %msg, "Conflicting write");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            )
                .into_response()
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal error");
            internal_response(&msg)
        }
    }
}

/// Map a sqlx error onto the HTTP contract.
///
/// - `RowNotFound` -> 404 with an empty body.
/// - Everything else -> 500, message gated by `EXPOSE_ERROR_DETAIL`.
fn database_response(err: sqlx::Error) -> Response {
    match err {
        sqlx::Error::RowNotFound => StatusCode::NOT_FOUND.into_response(),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_response(&other.to_string())
        }
    }
}

fn internal_response(detail: &str) -> Response {
    let message = if expose_error_detail() {
        detail
    } else {
        "An internal error occurred"
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
