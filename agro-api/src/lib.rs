//! AgroOptima API Server
//!
//! REST surface over the advisor record store.
//!
//! ## Endpoints
//!
//! ### Health
//! - `GET /health` - Process and store connectivity
//!
//! ### Authentication
//! - `POST /api/auth/register` - Create an advisor account
//! - `POST /api/auth/login` - Authenticate, returns a bearer token
//!
//! ### Clients
//! - `GET /api/clients` - List all clients with documents
//! - `POST /api/clients` - Create-or-update by producer id
//! - `DELETE /api/clients/:producer_id` - Delete with cascade
//! - `POST /api/clients/:producer_id/documents` - Attach a document
//! - `DELETE /api/clients/:producer_id/documents/:doc_id` - Detach
//! - `GET /api/clients/:producer_id/fields` - Parcels with history
//! - `POST /api/clients/:producer_id/fields` - Replace the parcel set
//! - `GET /api/clients/:producer_id/payments` - Recorded payments
//!
//! ### Dictionaries
//! - `GET|POST /api/rates`, `DELETE /api/rates/:rate_id`
//! - `GET|POST /api/crops`, `DELETE /api/crops/:crop_id`
//! - `GET|POST /api/templates`, `DELETE /api/templates/:template_id`
//!
//! ### Admin (bearer token with ADMIN role required)
//! - `POST /api/admin/reset` - Drop, recreate and reseed the schema
//! - `GET /api/admin/tables` - Underlying table names

pub mod auth;
pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use server::{create_server, run_server, start_background_server};
pub use state::{ApiConfig, AppState};

/// Crate version reported by the health endpoint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
