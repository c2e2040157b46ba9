//! Route definitions for the `/buddies` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::buddy;
use crate::state::AppState;

/// Routes mounted at `/buddies`.
///
/// ```text
/// POST /requests               -> send
/// GET  /requests/sent          -> list_sent
/// GET  /requests/received      -> list_received
/// POST /requests/{id}/respond  -> respond
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requests", post(buddy::send))
        .route("/requests/sent", get(buddy::list_sent))
        .route("/requests/received", get(buddy::list_received))
        .route("/requests/{id}/respond", post(buddy::respond))
}
