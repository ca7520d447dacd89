//! Route definitions for the CV profile header.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cv_info;
use crate::state::AppState;

/// Routes mounted at `/cv-info`.
///
/// The frontend maintains a single profile, so the collection GET returns
/// the first stored row rather than a list.
///
/// ```text
/// GET    /        -> get_first
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cv_info::get_first).post(cv_info::create))
        .route("/{id}", put(cv_info::update).delete(cv_info::delete))
}
