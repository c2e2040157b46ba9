use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use campusbuddy_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain outcomes and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level outcome from `campusbuddy_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                // Benign business-rule rejections: surfaced, never logged.
                CoreError::EmailInUse => {
                    (StatusCode::CONFLICT, "EMAIL_IN_USE", core.to_string())
                }
                CoreError::AlreadyJoined => {
                    (StatusCode::CONFLICT, "ALREADY_JOINED", core.to_string())
                }
                CoreError::DuplicatePending => {
                    (StatusCode::CONFLICT, "DUPLICATE_PENDING", core.to_string())
                }
                CoreError::AlreadyResolved => {
                    (StatusCode::CONFLICT, "ALREADY_RESOLVED", core.to_string())
                }
                CoreError::SelfRequest => {
                    (StatusCode::BAD_REQUEST, "SELF_REQUEST", core.to_string())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// Unique-constraint violations (PostgreSQL 23505) are part of the normal
/// control flow here: the store is the serialization point for double-submit
/// races, so a violated `uq_` constraint maps to the same benign outcome as
/// the handler's pre-check would have produced. Everything else is a genuine
/// store fault and maps to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            match db_err.constraint() {
                Some("uq_users_email") => (
                    StatusCode::CONFLICT,
                    "EMAIL_IN_USE",
                    CoreError::EmailInUse.to_string(),
                ),
                Some("uq_event_participants_event_user") => (
                    StatusCode::CONFLICT,
                    "ALREADY_JOINED",
                    CoreError::AlreadyJoined.to_string(),
                ),
                Some("uq_buddy_requests_pending") => (
                    StatusCode::CONFLICT,
                    "DUPLICATE_PENDING",
                    CoreError::DuplicatePending.to_string(),
                ),
                other => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!(
                        "Duplicate value violates unique constraint: {}",
                        other.unwrap_or("unknown")
                    ),
                ),
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_UNAVAILABLE",
                "The data store did not respond".to_string(),
            )
        }
    }
}
