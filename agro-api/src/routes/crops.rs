//! Crop dictionary endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use agro_core::CropDefinition;

use crate::dto::CropDto;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_crops(State(state): State<AppState>) -> ApiResult<Json<Vec<CropDto>>> {
    let crops = state.crops.list()?;
    Ok(Json(
        crops
            .iter()
            .map(|c| CropDto {
                id: c.id.clone(),
                name: c.name.clone(),
                crop_type: c.crop_type.clone(),
                is_legume: c.is_legume,
                is_catch_crop: c.is_catch_crop,
            })
            .collect(),
    ))
}

pub async fn upsert_crop(
    State(state): State<AppState>,
    Json(req): Json<CropDto>,
) -> ApiResult<Json<CropDto>> {
    state.crops.upsert(&CropDefinition {
        id: req.id.clone(),
        name: req.name.clone(),
        crop_type: req.crop_type.clone(),
        is_legume: req.is_legume,
        is_catch_crop: req.is_catch_crop,
    })?;
    Ok(Json(req))
}

pub async fn delete_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    state.crops.delete(&crop_id)?;
    Ok(Json(serde_json::json!({ "deleted": crop_id })))
}
