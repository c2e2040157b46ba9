//! Handlers for the `/auth` resource (register, login, logout, flash, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use campusbuddy_core::error::CoreError;
use campusbuddy_db::models::user::CreateUser;
use campusbuddy_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::session::{FlashMap, Identity};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
    pub interests: Option<String>,
    pub hobbies: Option<String>,
    pub academic_info: Option<String>,
    pub availability: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
///
/// The token is also usable as a `session_token` cookie value; the server
/// does not care how the client carries it back.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Session lifetime in seconds from creation. Fixed, not sliding.
    pub expires_in: i64,
    pub user: Identity,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and log it in. A duplicate email is a benign 409, both
/// on the pre-check and on the `uq_users_email` race path.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password, state.config.password_min_length)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::EmailInUse));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash,
            display_name: input.display_name,
            interests: input.interests,
            hobbies: input.hobbies,
            academic_info: input.academic_info,
            availability: input.availability,
        },
    )
    .await?;

    let identity = Identity {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
    };
    let token = state.sessions.create(identity.clone()).await;
    state
        .sessions
        .set_flash(&token, "success", "Your account has been created")
        .await;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            expires_in: state.config.session_ttl_secs,
            user: identity,
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password and open a session. Unknown email and
/// wrong password produce the same 401 so the response does not reveal which
/// accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let identity = Identity {
        id: user.id,
        email: user.email,
        display_name: user.display_name,
    };
    let token = state.sessions.create(identity.clone()).await;
    state
        .sessions
        .set_flash(
            &token,
            "success",
            &format!("Welcome back, {}", identity.display_name),
        )
        .await;

    Ok(Json(AuthResponse {
        token,
        expires_in: state.config.session_ttl_secs,
        user: identity,
    }))
}

/// POST /api/v1/auth/logout
///
/// Destroy the current session. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, user: CurrentUser) -> AppResult<StatusCode> {
    state.sessions.destroy(&user.token).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/flash
///
/// Take-and-clear the session's flash slot. Each queued message is observed
/// by exactly one call.
pub async fn take_flash(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<DataResponse<FlashMap>>> {
    let flash = state.sessions.take_flash(&user.token).await;
    Ok(Json(DataResponse { data: flash }))
}

/// GET /api/v1/auth/me
///
/// Return the identity snapshot bound to the session.
pub async fn me(user: CurrentUser) -> Json<Identity> {
    Json(user.identity)
}
