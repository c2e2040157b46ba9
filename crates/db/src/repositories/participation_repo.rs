//! Repository for the `event_participants` table.
//!
//! The unique (event_id, user_id) constraint is the actual duplicate-join
//! guard; [`ParticipationRepo::exists`] is only a pre-check so the common
//! case avoids a failed insert.

use campusbuddy_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::EventParticipant;

/// Provides operations for event participation.
pub struct ParticipationRepo;

impl ParticipationRepo {
    /// Insert a participation row for the given pair.
    ///
    /// A concurrent duplicate surfaces as a 23505 unique violation on
    /// `uq_event_participants_event_user`; callers map it to the same
    /// already-joined outcome as a positive [`Self::exists`] pre-check.
    pub async fn join(
        pool: &PgPool,
        event_id: DbId,
        user_id: DbId,
    ) -> Result<EventParticipant, sqlx::Error> {
        sqlx::query_as::<_, EventParticipant>(
            "INSERT INTO event_participants (event_id, user_id)
             VALUES ($1, $2)
             RETURNING event_id, user_id, joined_at",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Whether the given user has already joined the given event.
    pub async fn exists(pool: &PgPool, event_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT 1::bigint FROM event_participants WHERE event_id = $1 AND user_id = $2",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(found.is_some())
    }

    /// Number of participants for an event.
    pub async fn count_for_event(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> =
            sqlx::query_scalar("SELECT COUNT(*) FROM event_participants WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(pool)
                .await?;
        Ok(count.unwrap_or(0))
    }

    /// List participations for a user, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EventParticipant>, sqlx::Error> {
        sqlx::query_as::<_, EventParticipant>(
            "SELECT event_id, user_id, joined_at FROM event_participants
             WHERE user_id = $1
             ORDER BY joined_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
