//! Parcel sub-collection endpoints
//!
//! The POST here is the replace-on-write operation: the submitted list
//! becomes the farmer's entire parcel set in one transaction.

use axum::{
    extract::{Path, State},
    Json,
};

use agro_core::{validate_producer_id, HistoryEntry, Parcel};

use crate::dto::{HistoryEntryDto, ParcelDto};
use crate::error::ApiResult;
use crate::state::AppState;

/// All parcels and history for a client. An unknown producer id yields
/// an empty list: after a cascade delete the child query is
/// legitimately empty, not an error.
pub async fn get_client_fields(
    State(state): State<AppState>,
    Path(producer_id): Path<String>,
) -> ApiResult<Json<Vec<ParcelDto>>> {
    let parcels = state.parcels.list_for_client(&producer_id)?;
    Ok(Json(parcels.iter().map(parcel_to_dto).collect()))
}

/// Replace the client's entire parcel set. Unknown producer id is a
/// 404 with no writes. The response echoes the submitted representation
/// verbatim; store-assigned history row ids are not reflected.
pub async fn replace_client_fields(
    State(state): State<AppState>,
    Path(producer_id): Path<String>,
    Json(req): Json<Vec<ParcelDto>>,
) -> ApiResult<Json<Vec<ParcelDto>>> {
    validate_producer_id(&producer_id)?;
    let parcels: Vec<Parcel> = req.iter().map(parcel_from_dto).collect();
    state.parcels.replace_for_client(&producer_id, &parcels)?;
    Ok(Json(req))
}

fn parcel_to_dto(parcel: &Parcel) -> ParcelDto {
    ParcelDto {
        id: parcel.id.clone(),
        name: parcel.name.clone(),
        registration_number: parcel.registration_number.clone(),
        area: parcel.area,
        eligible_area: parcel.eligible_area,
        crop: parcel.crop.clone(),
        voivodeship: parcel.voivodeship.clone(),
        district: parcel.district.clone(),
        commune: parcel.commune.clone(),
        precinct_name: parcel.precinct_name.clone(),
        precinct_number: parcel.precinct_number.clone(),
        map_sheet: parcel.map_sheet.clone(),
        history: parcel.history.iter().map(history_to_dto).collect(),
    }
}

fn parcel_from_dto(dto: &ParcelDto) -> Parcel {
    Parcel {
        id: dto.id.clone(),
        name: dto.name.clone(),
        registration_number: dto.registration_number.clone(),
        area: dto.area,
        eligible_area: dto.eligible_area,
        crop: dto.crop.clone(),
        voivodeship: dto.voivodeship.clone(),
        district: dto.district.clone(),
        commune: dto.commune.clone(),
        precinct_name: dto.precinct_name.clone(),
        precinct_number: dto.precinct_number.clone(),
        map_sheet: dto.map_sheet.clone(),
        history: dto.history.iter().map(history_from_dto).collect(),
    }
}

fn history_to_dto(entry: &HistoryEntry) -> HistoryEntryDto {
    HistoryEntryDto {
        year: entry.year,
        crop: entry.crop.clone(),
        applied_eco_schemes: entry.applied_eco_schemes.clone(),
        liming_date: entry.liming_date.clone(),
        soil_ph: entry.soil_ph,
        extended: entry.extended.clone(),
    }
}

fn history_from_dto(dto: &HistoryEntryDto) -> HistoryEntry {
    HistoryEntry {
        year: dto.year,
        crop: dto.crop.clone(),
        applied_eco_schemes: dto.applied_eco_schemes.clone(),
        liming_date: dto.liming_date.clone(),
        soil_ph: dto.soil_ph,
        extended: dto.extended.clone(),
    }
}
