//! Route definitions for the `/events` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET  /            -> list
/// POST /            -> create
/// GET  /{id}        -> get_by_id
/// POST /{id}/join   -> join
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route("/{id}", get(event::get_by_id))
        .route("/{id}/join", post(event::join))
}
