//! Record types for the advisor backend

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::history::HistoryEntry;

/// Advisor account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Advisor,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Advisor => "ADVISOR",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADVISOR" => Some(UserRole::Advisor),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Advisor user account
#[derive(Debug, Clone)]
pub struct Advisor {
    pub id: i64,
    pub email: String,
    /// PHC-format argon2id hash, never the raw password
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

/// Farmer client record.
///
/// The producer id (9-character EP number) is the primary key and is
/// immutable once created. `status` is an open string enum: `ACTIVE`,
/// `PENDING` and `COMPLETED` are the known values but the store keeps
/// whatever the caller submitted.
#[derive(Debug, Clone)]
pub struct FarmerClient {
    pub producer_id: String,
    pub advisor_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub farm_name: Option<String>,
    /// Advisor-entered aggregate; never recomputed from parcel data
    pub total_area: f64,
    pub status: String,
    pub last_contact: Option<String>,
    pub documents: Vec<Document>,
}

/// Uploaded artifact attached to a farmer client
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub doc_type: String,
    pub category: String,
    pub campaign_year: Option<String>,
    pub size: Option<String>,
    pub upload_date: Option<String>,
    /// Extracted text content, when OCR/import produced any
    pub content: Option<String>,
}

/// Land parcel (Field) with its full yearly history.
///
/// The id is chosen by the caller, not the server.
#[derive(Debug, Clone)]
pub struct Parcel {
    pub id: String,
    pub name: String,
    pub registration_number: Option<String>,
    pub area: f64,
    /// Area qualifying for subsidy; <= area by domain convention,
    /// not enforced
    pub eligible_area: f64,
    pub crop: String,
    pub voivodeship: Option<String>,
    pub district: Option<String>,
    pub commune: Option<String>,
    pub precinct_name: Option<String>,
    pub precinct_number: Option<String>,
    pub map_sheet: Option<String>,
    pub history: Vec<HistoryEntry>,
}

/// Named payment or eco-scheme rate entry for a campaign year.
///
/// `category` is an open string enum: `DOPLATA` (direct payment),
/// `EKOSCHEMAT` (eco-scheme), `DOBROSTAN` (animal welfare).
#[derive(Debug, Clone)]
pub struct SubsidyRate {
    pub id: String,
    pub name: String,
    pub rate: f64,
    pub unit: String,
    pub category: String,
    pub year: i32,
    pub short_name: Option<String>,
    pub points: Option<f64>,
    /// Scheme codes this rate combines with; stored comma-joined
    pub compatible_with: Vec<String>,
    pub description: Option<String>,
}

/// Crop dictionary entry
#[derive(Debug, Clone)]
pub struct CropDefinition {
    pub id: String,
    pub name: String,
    pub crop_type: String,
    pub is_legume: bool,
    pub is_catch_crop: bool,
}

/// Column-mapping configuration for bulk CSV import.
///
/// `mappings` maps internal field keys (e.g. `area`) to source column
/// headers (e.g. `Powierzchnia Ha`).
#[derive(Debug, Clone)]
pub struct CsvTemplate {
    pub id: String,
    pub name: String,
    pub template_type: String,
    pub year: i32,
    pub separator: String,
    pub mappings: BTreeMap<String, String>,
}

/// Recorded subsidy amount for a farmer and campaign year
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: i64,
    pub year: i32,
    pub amount: f64,
    /// `PLANNED`, `APPROVED` or `PAID`
    pub status: String,
    /// Snapshot of the calculation inputs at the time of recording
    pub calculation: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
