//! Buddy request entity model.

use campusbuddy_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Status a buddy request can be in. `accepted` and `rejected` are terminal.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";
}

/// A row from the `buddy_requests` table.
///
/// Only the receiver may resolve a request, and only while it is pending.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BuddyRequest {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub responded_at: Option<Timestamp>,
}

impl BuddyRequest {
    /// Whether this request is still awaiting a response.
    pub fn is_pending(&self) -> bool {
        self.status == status::PENDING
    }
}
