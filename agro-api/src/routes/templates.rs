//! CSV import-template endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use agro_core::CsvTemplate;

use crate::dto::TemplateDto;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_templates(State(state): State<AppState>) -> ApiResult<Json<Vec<TemplateDto>>> {
    let templates = state.templates.list()?;
    Ok(Json(
        templates
            .into_iter()
            .map(|t| TemplateDto {
                id: t.id,
                name: t.name,
                template_type: t.template_type,
                year: t.year,
                separator: t.separator,
                mappings: t.mappings,
            })
            .collect(),
    ))
}

pub async fn upsert_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateDto>,
) -> ApiResult<Json<TemplateDto>> {
    state.templates.upsert(&CsvTemplate {
        id: req.id.clone(),
        name: req.name.clone(),
        template_type: req.template_type.clone(),
        year: req.year,
        separator: req.separator.clone(),
        mappings: req.mappings.clone(),
    })?;
    Ok(Json(req))
}

pub async fn delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    state.templates.delete(&template_id)?;
    Ok(Json(serde_json::json!({ "deleted": template_id })))
}
