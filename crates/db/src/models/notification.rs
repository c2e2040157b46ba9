//! Notification entity model.

use campusbuddy_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
///
/// The owner (`user_id`) is immutable and the read flag is monotonic: it
/// flips false -> true once and never reverts until the row is deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}
