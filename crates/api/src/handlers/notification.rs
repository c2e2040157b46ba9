//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`CurrentUser`]. Every mutation
//! performs the ownership check here, once per operation: a notification may
//! only be transitioned by its owner.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campusbuddy_core::error::CoreError;
use campusbuddy_core::types::DbId;
use campusbuddy_db::models::notification::Notification;
use campusbuddy_db::repositories::NotificationRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /notifications/unread-count`.
#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub unread: i64,
}

/// Fetch a notification and verify the requester owns it.
///
/// Absent id -> `NotFound`; wrong owner -> `Forbidden`. This is the single
/// ownership gate for every notification mutation.
async fn find_owned(
    state: &AppState,
    id: DbId,
    requester: DbId,
) -> AppResult<Notification> {
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;

    if notification.user_id != requester {
        return Err(AppError::Core(CoreError::Forbidden(
            "Notification belongs to another user".into(),
        )));
    }
    Ok(notification)
}

/// GET /api/v1/notifications
///
/// List the authenticated user's notifications, newest first.
pub async fn list(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, user.identity.id).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a notification as read. Idempotent: marking an already-read
/// notification succeeds and changes nothing (the flag is monotonic).
/// Returns 204 No Content.
pub async fn mark_read(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, id, user.identity.id).await?;
    let updated = NotificationRepo::mark_read(&state.pool, id).await?;
    if !updated {
        // Deleted concurrently between the ownership check and here.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/notifications/{id}
///
/// Remove a notification permanently. A second delete finds nothing and
/// returns 404, which callers should treat as "already gone".
pub async fn delete(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_owned(&state, id, user.identity.id).await?;
    let removed = NotificationRepo::delete(&state.pool, id).await?;
    if !removed {
        // Deleted concurrently between the ownership check and here.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<UnreadCount>> {
    let unread = NotificationRepo::unread_count(&state.pool, user.identity.id).await?;
    Ok(Json(UnreadCount { unread }))
}
