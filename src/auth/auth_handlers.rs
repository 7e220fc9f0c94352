use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    state::AppState,
};

use super::auth_dto::{AuthResponse, LoginRequest, LoginResponse, LogoutRequest, RegisterRequest};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Validation error or duplicate login key"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state
        .auth_service
        .register(&payload.login_key, &payload.password, &payload.name)
        .await
        .map_err(|e| {
            if let AppError::Database(ref db_err) = e {
                if db_err.to_string().contains("duplicate key") {
                    return AppError::Conflict("Login key already registered".to_string());
                }
            }
            e
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Registration successful".to_string(),
        }),
    ))
}

/// Login with login_key and password
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = state
        .auth_service
        .login(&payload.login_key, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        nickname: user.name,
    }))
}

/// Logout
#[utoipa::path(
    post,
    path = "/api/logout",
    request_body = LogoutRequest,
    responses(
        (status = 200, description = "Logged out successfully", body = AuthResponse),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> Result<Json<AuthResponse>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.auth_service.logout(&payload.login_key).await?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Logged out".to_string(),
    }))
}
