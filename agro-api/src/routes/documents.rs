//! Document sub-collection endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::dto::DocumentDto;
use crate::error::ApiResult;
use crate::routes::clients::document_from_dto;
use crate::state::AppState;

/// Attach a document to a client
pub async fn add_document(
    State(state): State<AppState>,
    Path(producer_id): Path<String>,
    Json(req): Json<DocumentDto>,
) -> ApiResult<Json<DocumentDto>> {
    state.documents.add(&producer_id, &document_from_dto(&req))?;
    Ok(Json(req))
}

/// Detach a document; unknown ids are a no-op success
pub async fn delete_document(
    State(state): State<AppState>,
    Path((producer_id, doc_id)): Path<(String, String)>,
) -> ApiResult<Json<serde_json::Value>> {
    state.documents.remove(&producer_id, &doc_id)?;
    Ok(Json(serde_json::json!({ "deleted": doc_id })))
}
