//! Route definitions for skills.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// Skills are only ever rendered as a grouped list, so there is no
/// single-item GET.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list).post(skills::create))
        .route("/{id}", put(skills::update).delete(skills::delete))
}
