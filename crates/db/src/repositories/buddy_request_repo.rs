//! Repository for the `buddy_requests` table.
//!
//! The partial unique index `uq_buddy_requests_pending` guarantees at most
//! one pending request per ordered (sender, receiver) pair even under
//! concurrent sends; [`BuddyRequestRepo::pending_exists`] is a pre-check
//! only.

use campusbuddy_core::types::DbId;
use sqlx::PgPool;

use crate::models::buddy_request::BuddyRequest;

/// Column list for `buddy_requests` queries.
const COLUMNS: &str = "id, sender_id, receiver_id, status, created_at, responded_at";

/// Provides operations for buddy requests.
pub struct BuddyRequestRepo;

impl BuddyRequestRepo {
    /// Insert a new pending request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        receiver_id: DbId,
    ) -> Result<BuddyRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO buddy_requests (sender_id, receiver_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BuddyRequest>(&query)
            .bind(sender_id)
            .bind(receiver_id)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BuddyRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buddy_requests WHERE id = $1");
        sqlx::query_as::<_, BuddyRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a pending request exists for the ordered pair.
    pub async fn pending_exists(
        pool: &PgPool,
        sender_id: DbId,
        receiver_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let found: Option<i64> = sqlx::query_scalar(
            "SELECT 1::bigint FROM buddy_requests
             WHERE sender_id = $1 AND receiver_id = $2 AND status = 'pending'",
        )
        .bind(sender_id)
        .bind(receiver_id)
        .fetch_optional(pool)
        .await?;
        Ok(found.is_some())
    }

    /// Resolve a pending request to the given terminal status.
    ///
    /// The `status = 'pending'` guard makes the transition one-shot: a
    /// request that was resolved in the meantime is left untouched and
    /// `false` is returned.
    pub async fn resolve(pool: &PgPool, id: DbId, status: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE buddy_requests
             SET status = $2, responded_at = NOW()
             WHERE id = $1 AND status = 'pending'",
        )
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List requests sent by a user, most recent first.
    pub async fn list_sent(pool: &PgPool, user_id: DbId) -> Result<Vec<BuddyRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM buddy_requests
             WHERE sender_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, BuddyRequest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List requests received by a user, most recent first.
    pub async fn list_received(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BuddyRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM buddy_requests
             WHERE receiver_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, BuddyRequest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
