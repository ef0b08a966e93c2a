//! Client collection endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use agro_core::{validate_producer_id, Document, FarmerClient};

use crate::dto::{ClientDto, DocumentDto, PaymentDto};
use crate::error::ApiResult;
use crate::state::AppState;

/// List all clients with their documents
pub async fn list_clients(State(state): State<AppState>) -> ApiResult<Json<Vec<ClientDto>>> {
    let clients = state.clients.list()?;
    Ok(Json(clients.iter().map(client_to_dto).collect()))
}

/// Create-or-update a client by producer id. Echoes the submitted
/// representation back.
pub async fn upsert_client(
    State(state): State<AppState>,
    Json(req): Json<ClientDto>,
) -> ApiResult<Json<ClientDto>> {
    validate_producer_id(&req.producer_id)?;
    state.clients.upsert(&client_from_dto(&req))?;
    Ok(Json(req))
}

/// Delete a client; documents, parcels, history and payments cascade.
/// Deleting an unknown producer id is a no-op success.
pub async fn delete_client(
    State(state): State<AppState>,
    Path(producer_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    state.clients.delete(&producer_id)?;
    Ok(Json(serde_json::json!({ "deleted": producer_id })))
}

/// Recorded payments for one client. An unknown client yields an empty
/// list, same as any other emptied child collection.
pub async fn list_payments(
    State(state): State<AppState>,
    Path(producer_id): Path<String>,
) -> ApiResult<Json<Vec<PaymentDto>>> {
    let payments = state.payments.list_for_client(&producer_id)?;
    Ok(Json(
        payments
            .into_iter()
            .map(|p| PaymentDto {
                id: p.id,
                year: p.year,
                amount: p.amount,
                status: p.status,
                calculation: p.calculation,
                created_at: p.created_at,
            })
            .collect(),
    ))
}

pub(crate) fn client_to_dto(client: &FarmerClient) -> ClientDto {
    ClientDto {
        producer_id: client.producer_id.clone(),
        advisor_id: client.advisor_id,
        first_name: client.first_name.clone(),
        last_name: client.last_name.clone(),
        farm_name: client.farm_name.clone(),
        total_area: client.total_area,
        status: client.status.clone(),
        last_contact: client.last_contact.clone(),
        documents: client.documents.iter().map(document_to_dto).collect(),
    }
}

pub(crate) fn client_from_dto(dto: &ClientDto) -> FarmerClient {
    FarmerClient {
        producer_id: dto.producer_id.clone(),
        advisor_id: dto.advisor_id,
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        farm_name: dto.farm_name.clone(),
        total_area: dto.total_area,
        status: dto.status.clone(),
        last_contact: dto.last_contact.clone(),
        documents: dto.documents.iter().map(document_from_dto).collect(),
    }
}

pub(crate) fn document_to_dto(doc: &Document) -> DocumentDto {
    DocumentDto {
        id: doc.id.clone(),
        name: doc.name.clone(),
        doc_type: doc.doc_type.clone(),
        category: doc.category.clone(),
        campaign_year: doc.campaign_year.clone(),
        size: doc.size.clone(),
        upload_date: doc.upload_date.clone(),
        content: doc.content.clone(),
    }
}

pub(crate) fn document_from_dto(dto: &DocumentDto) -> Document {
    Document {
        id: dto.id.clone(),
        name: dto.name.clone(),
        doc_type: dto.doc_type.clone(),
        category: dto.category.clone(),
        campaign_year: dto.campaign_year.clone(),
        size: dto.size.clone(),
        upload_date: dto.upload_date.clone(),
        content: dto.content.clone(),
    }
}
