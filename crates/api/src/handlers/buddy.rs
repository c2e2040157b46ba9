//! Handlers for the `/buddies` resource.
//!
//! Buddy requests are one-shot: `pending` may transition to `accepted` or
//! `rejected` exactly once, and only the receiver may perform the
//! transition.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campusbuddy_core::error::CoreError;
use campusbuddy_core::types::DbId;
use campusbuddy_db::models::buddy_request::{status, BuddyRequest};
use campusbuddy_db::repositories::{BuddyRequestRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /buddies/requests`.
#[derive(Debug, Deserialize)]
pub struct SendRequest {
    pub receiver_id: DbId,
}

/// Decision on a pending request.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    fn as_status(self) -> &'static str {
        match self {
            Decision::Accept => status::ACCEPTED,
            Decision::Reject => status::REJECTED,
        }
    }
}

/// Request body for `POST /buddies/requests/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub decision: Decision,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/buddies/requests
///
/// Send a buddy request. Self-requests are rejected outright; a duplicate
/// pending request for the ordered pair is a benign 409, whether caught by
/// the pre-check or by `uq_buddy_requests_pending` under a race.
pub async fn send(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<SendRequest>,
) -> AppResult<(StatusCode, Json<BuddyRequest>)> {
    let sender_id = user.identity.id;

    if input.receiver_id == sender_id {
        return Err(AppError::Core(CoreError::SelfRequest));
    }

    UserRepo::find_by_id(&state.pool, input.receiver_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.receiver_id,
        }))?;

    if BuddyRequestRepo::pending_exists(&state.pool, sender_id, input.receiver_id).await? {
        return Err(AppError::Core(CoreError::DuplicatePending));
    }

    let request = BuddyRequestRepo::create(&state.pool, sender_id, input.receiver_id).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// POST /api/v1/buddies/requests/{id}/respond
///
/// Accept or reject a pending request. Only the receiver may respond, and
/// the transition is terminal: responding to a resolved request is a 409
/// and changes nothing.
pub async fn respond(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RespondRequest>,
) -> AppResult<Json<BuddyRequest>> {
    let request = BuddyRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BuddyRequest",
            id,
        }))?;

    if request.receiver_id != user.identity.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the receiver may respond to a buddy request".into(),
        )));
    }

    if !request.is_pending() {
        return Err(AppError::Core(CoreError::AlreadyResolved));
    }

    // The status = 'pending' guard in the UPDATE makes the transition
    // one-shot even if two responses race past the check above.
    let resolved =
        BuddyRequestRepo::resolve(&state.pool, id, input.decision.as_status()).await?;
    if !resolved {
        return Err(AppError::Core(CoreError::AlreadyResolved));
    }

    let request = BuddyRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BuddyRequest",
            id,
        }))?;
    Ok(Json(request))
}

/// GET /api/v1/buddies/requests/sent
///
/// Requests the authenticated user has sent, most recent first.
pub async fn list_sent(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BuddyRequest>>>> {
    let requests = BuddyRequestRepo::list_sent(&state.pool, user.identity.id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/buddies/requests/received
///
/// Requests the authenticated user has received, most recent first.
pub async fn list_received(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<BuddyRequest>>>> {
    let requests = BuddyRequestRepo::list_received(&state.pool, user.identity.id).await?;
    Ok(Json(DataResponse { data: requests }))
}
