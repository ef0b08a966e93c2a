//! Bearer-token authentication
//!
//! HS256 tokens signed with the configured secret; the advisor role
//! travels in the claims so privileged routes can be gated without a
//! store round trip. Password hashing itself lives in
//! `agro_core::credentials`.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use agro_core::{Advisor, UserRole};

use crate::error::{ApiError, ApiResult};

/// Payload carried in the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account email
    pub sub: String,
    /// Account id
    pub uid: i64,
    /// ADVISOR or ADMIN
    pub role: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expiration (unix seconds)
    pub exp: u64,
}

/// Token issuer and validator
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    expiry_seconds: u64,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, expiry_seconds: u64) -> Self {
        Self {
            secret: secret.into(),
            expiry_seconds,
        }
    }

    /// Issue a token for an authenticated advisor.
    pub fn issue(&self, user: &Advisor) -> ApiResult<String> {
        let now = unix_now();
        let claims = Claims {
            sub: user.email.clone(),
            uid: user.id,
            role: user.role.as_str().to_string(),
            iat: now,
            exp: now + self.expiry_seconds,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::Internal(format!("failed to sign token: {e}")))
    }

    /// Validate a token and return its claims. Expired or tampered
    /// tokens are unauthorized.
    pub fn verify(&self, token: &str) -> ApiResult<Claims> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| ApiError::Unauthorized(format!("invalid token: {e}")))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Extract the bearer token from the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Gate for privileged routes: a valid token with the ADMIN role.
pub fn require_admin(headers: &HeaderMap, tokens: &TokenIssuer) -> ApiResult<Claims> {
    let token = bearer_token(headers).ok_or_else(|| {
        ApiError::Unauthorized("Authorization: Bearer <token> required".to_string())
    })?;
    let claims = tokens.verify(token)?;
    if UserRole::parse(&claims.role) != Some(UserRole::Admin) {
        return Err(ApiError::Forbidden(
            "admin role required for this operation".to_string(),
        ));
    }
    Ok(claims)
}
