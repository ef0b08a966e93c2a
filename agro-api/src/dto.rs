//! Data Transfer Objects for API requests and responses
//!
//! Wire shapes are camelCase to match the presentation layer. History
//! entries flatten the extension bag into the entry object, so a bag
//! field like `eligibleArea` appears next to `year` and `crop` on the
//! wire while living in a single packed column in storage.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agro_core::ExtendedData;

// ============ Auth DTOs ============

/// Register advisor request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
    /// ADVISOR (default) or ADMIN
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User projection (never includes the password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
}

/// Login/register response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

// ============ Client DTOs ============

/// Farmer client, documents embedded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub producer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(default)]
    pub total_area: f64,
    #[serde(default = "default_client_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<String>,
    #[serde(default)]
    pub documents: Vec<DocumentDto>,
}

fn default_client_status() -> String {
    "ACTIVE".to_string()
}

/// Uploaded document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// ============ Parcel DTOs ============

/// Land parcel with nested history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelDto {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    pub area: f64,
    pub eligible_area: f64,
    pub crop: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voivodeship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commune: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precinct_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precinct_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_sheet: Option<String>,
    #[serde(default)]
    pub history: Vec<HistoryEntryDto>,
}

/// One parcel-year history entry. The flattened [`ExtendedData`] keys
/// sit beside the fixed fields on the wire; absent keys are omitted
/// entirely, never emitted as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryDto {
    pub year: i32,
    pub crop: String,
    #[serde(default)]
    pub applied_eco_schemes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liming_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_ph: Option<f64>,
    #[serde(flatten)]
    pub extended: ExtendedData,
}

// ============ Dictionary DTOs ============

/// Subsidy rate entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDto {
    pub id: String,
    pub name: String,
    pub rate: f64,
    pub unit: String,
    pub category: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compatible_with: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Crop dictionary entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub crop_type: String,
    #[serde(default)]
    pub is_legume: bool,
    #[serde(default)]
    pub is_catch_crop: bool,
}

/// CSV import mapping template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    #[serde(default = "default_campaign_year")]
    pub year: i32,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub mappings: BTreeMap<String, String>,
}

fn default_campaign_year() -> i32 {
    2026
}

fn default_separator() -> String {
    ";".to_string()
}

// ============ Payment DTOs ============

/// Recorded payment projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i64,
    pub year: i32,
    pub amount: f64,
    pub status: String,
    pub calculation: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

// ============ Health / Admin DTOs ============

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
}

/// Admin table listing
#[derive(Debug, Serialize)]
pub struct TablesResponse {
    pub tables: Vec<String>,
}

/// Admin reset outcome
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub status: String,
    pub seeded: bool,
}
