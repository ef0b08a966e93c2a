//! Admin endpoints
//!
//! Destructive operations, gated on a bearer token carrying the ADMIN
//! role.

use axum::{extract::State, http::HeaderMap, Json};

use agro_db::seed_demo_data;

use crate::auth::require_admin;
use crate::dto::{ResetResponse, TablesResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Drop and recreate the schema, then reseed demo data
pub async fn reset_database(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<ResetResponse>> {
    let claims = require_admin(&headers, &state.tokens)?;
    tracing::warn!(by = %claims.sub, "admin reset requested");

    state.db.reset()?;
    let seeded = seed_demo_data(&state.db)?;

    Ok(Json(ResetResponse {
        status: "reset".to_string(),
        seeded,
    }))
}

/// Underlying table names
pub async fn list_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<TablesResponse>> {
    require_admin(&headers, &state.tokens)?;
    Ok(Json(TablesResponse {
        tables: state.db.table_names()?,
    }))
}
