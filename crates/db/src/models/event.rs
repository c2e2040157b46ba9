//! Event and participation entity models.

use campusbuddy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub event_date: chrono::NaiveDate,
    pub event_time: chrono::NaiveTime,
    pub location: String,
    pub creator_id: DbId,
    pub created_at: Timestamp,
}

/// A row from the `event_participants` table.
///
/// The (event_id, user_id) pair is unique; a participation is never updated
/// once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventParticipant {
    pub event_id: DbId,
    pub user_id: DbId,
    pub joined_at: Timestamp,
}

/// DTO for creating a new event. The creator is the authenticated requester.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub event_date: chrono::NaiveDate,
    pub event_time: chrono::NaiveTime,
    pub location: String,
}
