//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use campusbuddy_core::error::CoreError;

use crate::error::AppError;
use crate::session::Identity;
use crate::state::AppState;

/// Cookie carrying the session token for browser clients.
const SESSION_COOKIE: &str = "session_token";

/// Authenticated user resolved from an opaque session token.
///
/// The token is read from the `session_token` cookie, or from an
/// `Authorization: Bearer` header for non-browser clients. Use this as an
/// extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::debug!(user_id = user.identity.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Identity snapshot bound to the session at login.
    pub identity: Identity,
    /// The raw session token, kept so logout can destroy the session.
    pub token: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("No session token provided".into()))
        })?;

        // The only suspension point: one session-store lookup, no database
        // round-trip.
        let identity = state.sessions.lookup(&token).await.ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Session is expired or invalid".into(),
            ))
        })?;

        Ok(CurrentUser { identity, token })
    }
}

/// Pull the session token out of the request: cookie first, then Bearer.
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(token) = session_cookie(parts) {
        return Some(token);
    }

    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Find the `session_token` cookie value, if any.
fn session_cookie(parts: &Parts) -> Option<String> {
    let header = parts.headers.get("cookie")?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
