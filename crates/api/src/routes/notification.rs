//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require authentication. There is no creation route:
//! notifications are created by external triggers through the repository.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /               -> list
/// GET    /unread-count   -> unread_count
/// POST   /{id}/read      -> mark_read
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list))
        .route("/unread-count", get(notification::unread_count))
        .route("/{id}/read", post(notification::mark_read))
        .route("/{id}", delete(notification::delete))
}
