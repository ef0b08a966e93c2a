//! Subsidy rate endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use agro_core::SubsidyRate;

use crate::dto::RateDto;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_rates(State(state): State<AppState>) -> ApiResult<Json<Vec<RateDto>>> {
    let rates = state.rates.list()?;
    Ok(Json(rates.iter().map(rate_to_dto).collect()))
}

pub async fn upsert_rate(
    State(state): State<AppState>,
    Json(req): Json<RateDto>,
) -> ApiResult<Json<RateDto>> {
    state.rates.upsert(&rate_from_dto(&req))?;
    Ok(Json(req))
}

pub async fn delete_rate(
    State(state): State<AppState>,
    Path(rate_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    state.rates.delete(&rate_id)?;
    Ok(Json(serde_json::json!({ "deleted": rate_id })))
}

fn rate_to_dto(rate: &SubsidyRate) -> RateDto {
    RateDto {
        id: rate.id.clone(),
        name: rate.name.clone(),
        rate: rate.rate,
        unit: rate.unit.clone(),
        category: rate.category.clone(),
        year: rate.year,
        short_name: rate.short_name.clone(),
        points: rate.points,
        compatible_with: rate.compatible_with.clone(),
        description: rate.description.clone(),
    }
}

fn rate_from_dto(dto: &RateDto) -> SubsidyRate {
    SubsidyRate {
        id: dto.id.clone(),
        name: dto.name.clone(),
        rate: dto.rate,
        unit: dto.unit.clone(),
        category: dto.category.clone(),
        year: dto.year,
        short_name: dto.short_name.clone(),
        points: dto.points,
        compatible_with: dto.compatible_with.clone(),
        description: dto.description.clone(),
    }
}
