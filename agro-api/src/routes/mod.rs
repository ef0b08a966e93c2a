//! API route handlers

pub mod admin;
pub mod auth;
pub mod clients;
pub mod crops;
pub mod documents;
pub mod health;
pub mod parcels;
pub mod rates;
pub mod templates;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Authentication
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Client collection
        .route(
            "/api/clients",
            get(clients::list_clients).post(clients::upsert_client),
        )
        .route("/api/clients/:producer_id", delete(clients::delete_client))
        // Document sub-collection
        .route(
            "/api/clients/:producer_id/documents",
            post(documents::add_document),
        )
        .route(
            "/api/clients/:producer_id/documents/:doc_id",
            delete(documents::delete_document),
        )
        // Parcel sub-collection
        .route(
            "/api/clients/:producer_id/fields",
            get(parcels::get_client_fields).post(parcels::replace_client_fields),
        )
        // Payment sub-collection
        .route(
            "/api/clients/:producer_id/payments",
            get(clients::list_payments),
        )
        // Rates
        .route("/api/rates", get(rates::list_rates).post(rates::upsert_rate))
        .route("/api/rates/:rate_id", delete(rates::delete_rate))
        // Crop dictionary
        .route("/api/crops", get(crops::list_crops).post(crops::upsert_crop))
        .route("/api/crops/:crop_id", delete(crops::delete_crop))
        // CSV templates
        .route(
            "/api/templates",
            get(templates::list_templates).post(templates::upsert_template),
        )
        .route(
            "/api/templates/:template_id",
            delete(templates::delete_template),
        )
        // Admin
        .route("/api/admin/reset", post(admin::reset_database))
        .route("/api/admin/tables", get(admin::list_tables))
        // State
        .with_state(state)
}
