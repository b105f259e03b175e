//! Handlers for registration and login.
//!
//! Credentials are plaintext and no token or session is issued; a
//! successful login simply returns the user.

use askhub_core::error::CoreError;
use askhub_core::qa::{validate_credentials, INVALID_CREDENTIALS_MESSAGE};
use askhub_db::models::user::{CreateUser, UserResponse};
use askhub_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /register
///
/// Create a user. A taken username surfaces as 409 from the unique constraint.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_credentials(&input.username, &input.password)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /login
///
/// Return the user matching both username and password, or 401.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_credentials(&input.username, &input.password)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let user = UserRepo::find_by_credentials(&state.pool, &input.username, &input.password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %input.username, "Login failed");
            AppError::Core(CoreError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.into(),
            ))
        })?;

    Ok(Json(user.into()))
}
