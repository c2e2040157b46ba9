pub mod auth;
pub mod buddy;
pub mod event;
pub mod health;
pub mod notification;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/logout                         logout (requires session)
/// /auth/flash                          take-and-clear flash (requires session)
/// /auth/me                             identity snapshot (requires session)
///
/// /events                              list, create
/// /events/{id}                         detail with participant count
/// /events/{id}/join                    join (POST)
///
/// /notifications                       list own
/// /notifications/unread-count          unread count
/// /notifications/{id}/read             mark read (POST)
/// /notifications/{id}                  delete (DELETE)
///
/// /buddies/requests                    send (POST)
/// /buddies/requests/sent               list sent
/// /buddies/requests/received           list received
/// /buddies/requests/{id}/respond       accept / reject (POST)
/// ```
///
/// Register, login, and the root health check are the only unauthenticated
/// routes; everything else passes through the session gate.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/events", event::router())
        .nest("/notifications", notification::router())
        .nest("/buddies", buddy::router())
}
