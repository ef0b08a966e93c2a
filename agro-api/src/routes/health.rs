//! Health endpoint

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Process and store connectivity probe
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let database = state.db.health_check().is_ok();

    Ok(Json(HealthResponse {
        status: if database { "healthy" } else { "degraded" }.to_string(),
        version: state.version.clone(),
        database,
    }))
}
