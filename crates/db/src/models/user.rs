//! User entity model and DTOs.

use campusbuddy_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub interests: Option<String>,
    pub hobbies: Option<String>,
    pub academic_info: Option<String>,
    pub availability: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub display_name: String,
    pub interests: Option<String>,
    pub hobbies: Option<String>,
    pub academic_info: Option<String>,
    pub availability: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.display_name,
            interests: user.interests,
            hobbies: user.hobbies,
            academic_info: user.academic_info,
            availability: user.availability,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The password is hashed before this point.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub interests: Option<String>,
    pub hobbies: Option<String>,
    pub academic_info: Option<String>,
    pub availability: Option<String>,
}
