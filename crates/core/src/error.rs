use crate::types::DbId;

/// Domain error taxonomy.
///
/// Business-rule rejections ([`CoreError::AlreadyJoined`],
/// [`CoreError::DuplicatePending`], [`CoreError::AlreadyResolved`],
/// [`CoreError::SelfRequest`], [`CoreError::EmailInUse`]) are benign,
/// user-visible outcomes. Only [`CoreError::Internal`] represents a genuine
/// server fault.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Email address is already registered")]
    EmailInUse,

    #[error("Already joined this event")]
    AlreadyJoined,

    #[error("A pending buddy request to this user already exists")]
    DuplicatePending,

    #[error("Buddy request has already been resolved")]
    AlreadyResolved,

    #[error("Cannot send a buddy request to yourself")]
    SelfRequest,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
