//! Handlers for the `/events` resource.
//!
//! All endpoints require authentication. Joining is idempotent from the
//! user's point of view: the second attempt is a benign 409, whether it is
//! caught by the pre-check or by the unique pair constraint under a
//! double-submit race.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use campusbuddy_core::error::CoreError;
use campusbuddy_core::types::DbId;
use campusbuddy_db::models::event::{CreateEvent, Event, EventParticipant};
use campusbuddy_db::repositories::{EventRepo, ParticipationRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for `GET /events/{id}`: the event plus participant count.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub participant_count: i64,
}

/// POST /api/v1/events
///
/// Create an event; the authenticated requester becomes the creator.
pub async fn create(
    user: CurrentUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Event title must not be empty".into(),
        )));
    }
    let event = EventRepo::create(&state.pool, user.identity.id, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/v1/events
///
/// List all events, most recently created first.
pub async fn list(
    _user: CurrentUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Event>>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EventDetail>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    let participant_count = ParticipationRepo::count_for_event(&state.pool, id).await?;
    Ok(Json(EventDetail {
        event,
        participant_count,
    }))
}

/// POST /api/v1/events/{id}/join
///
/// Join an event. Absent event -> 404; already joined -> 409. The unique
/// (event, user) constraint guarantees a single participation row even when
/// two joins race past the pre-check.
pub async fn join(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<EventParticipant>)> {
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    if ParticipationRepo::exists(&state.pool, id, user.identity.id).await? {
        return Err(AppError::Core(CoreError::AlreadyJoined));
    }

    // Lost race on uq_event_participants_event_user surfaces as the same
    // ALREADY_JOINED conflict via the sqlx error classifier.
    let participation = ParticipationRepo::join(&state.pool, id, user.identity.id).await?;
    Ok((StatusCode::CREATED, Json(participation)))
}
