//! Registration and login endpoints

use axum::{extract::State, Json};

use agro_core::credentials::{hash_password, verify_password};
use agro_core::{Advisor, UserRole};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserDto};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Register a new advisor account
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = req.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Validation(format!("invalid email: {email:?}")));
    }
    if req.password.len() < 8 {
        return Err(ApiError::Validation(
            "password must be at least 8 characters".to_string(),
        ));
    }
    let role = match req.role.as_deref() {
        None => UserRole::Advisor,
        Some(raw) => UserRole::parse(raw)
            .ok_or_else(|| ApiError::Validation(format!("invalid role: {raw}")))?,
    };

    let password_hash =
        hash_password(&req.password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = state
        .users
        .create(&email, &password_hash, req.full_name.as_deref(), role)?;

    tracing::info!(email = %email, role = role.as_str(), "advisor registered");

    let token = state.tokens.issue(&user)?;
    Ok(Json(AuthResponse {
        token,
        user: user_to_dto(&user),
    }))
}

/// Authenticate and obtain a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email = req.email.trim().to_lowercase();
    let user = state
        .users
        .find_by_email(&email)?
        .ok_or_else(|| ApiError::Unauthorized("invalid email or password".to_string()))?;

    let valid = verify_password(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !valid || !user.is_active {
        return Err(ApiError::Unauthorized(
            "invalid email or password".to_string(),
        ));
    }

    let token = state.tokens.issue(&user)?;
    Ok(Json(AuthResponse {
        token,
        user: user_to_dto(&user),
    }))
}

fn user_to_dto(user: &Advisor) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email.clone(),
        full_name: user.full_name.clone(),
        role: user.role.as_str().to_string(),
        is_active: user.is_active,
    }
}
