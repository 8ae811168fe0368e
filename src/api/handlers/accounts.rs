//! Handlers for user registration and login.

use axum::{Json, extract::State};

use crate::api::dto::account::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::api::extract::JsonBody;
use crate::state::AppState;

/// Acknowledges a registration.
///
/// # Endpoint
///
/// `POST /api/user/users/add`
pub async fn register_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Json<RegisterResponse> {
    tracing::debug!(email = ?payload.email, "Registration received");

    let user = state.account_service.register(payload.into());
    tracing::info!(user_id = %user.user_id, "User registered");

    Json(user.into())
}

/// Logs a user in. Any credentials succeed; the configured admin account
/// gets the `ADMIN` role.
///
/// # Endpoint
///
/// `POST /api/user/auth/login`
///
/// # Request Body
///
/// ```json
/// {
///   "email": "admin@cinevision.com",
///   "password": "admin123"
/// }
/// ```
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Json<LoginResponse> {
    tracing::debug!(email = ?payload.email, "Login received");

    let session = state.account_service.login(payload.into());
    tracing::info!(
        user_id = %session.user_id,
        role = session.primary_role().as_str(),
        "User logged in"
    );

    Json(session.into())
}
