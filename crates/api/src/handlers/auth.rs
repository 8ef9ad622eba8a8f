//! Handlers for registration, login, and token refresh. All are public.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use recipebox_db::models::user::UserResponse;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /register` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /refresh`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create a user account. Returns the new user without any secrets.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .credentials()
        .register(&state.pool, &input.username, &input.password)
        .await?;

    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// POST /login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<impl IntoResponse> {
    let tokens = state
        .credentials()
        .authenticate(&state.pool, &input.username, &input.password)
        .await?;

    Ok(Json(DataResponse { data: tokens }))
}

/// POST /refresh
///
/// Exchange a refresh token for a new token pair. The old refresh token stops working.
pub async fn refresh(
    State(state): State<AppState>,
    AppJson(input): AppJson<RefreshRequest>,
) -> AppResult<impl IntoResponse> {
    let tokens = state
        .credentials()
        .refresh(&state.pool, &input.refresh_token)
        .await?;

    Ok(Json(DataResponse { data: tokens }))
}
