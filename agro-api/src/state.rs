//! Application state for the API server

use std::sync::Arc;

use agro_db::{
    ClientService, CropService, Database, DocumentService, ParcelService, PaymentService,
    RateService, TemplateService, UserService,
};

use crate::auth::TokenIssuer;

/// API server state: one shared store handle, one service per record
/// family, and the token issuer. Constructed once at startup and cloned
/// into handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub clients: ClientService,
    pub parcels: ParcelService,
    pub documents: DocumentService,
    pub rates: RateService,
    pub crops: CropService,
    pub templates: TemplateService,
    pub payments: PaymentService,
    pub users: UserService,
    pub tokens: TokenIssuer,
    pub version: String,
}

impl AppState {
    pub fn new(db: Arc<Database>, tokens: TokenIssuer) -> Self {
        Self {
            clients: ClientService::new(db.clone()),
            parcels: ParcelService::new(db.clone()),
            documents: DocumentService::new(db.clone()),
            rates: RateService::new(db.clone()),
            crops: CropService::new(db.clone()),
            templates: TemplateService::new(db.clone()),
            payments: PaymentService::new(db.clone()),
            users: UserService::new(db.clone()),
            db,
            tokens,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub jwt_secret: String,
    pub token_expiry_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
            // Development fallback; override for any real deployment.
            jwt_secret: "agrooptima-dev-secret-0123456789abcdef".to_string(),
            token_expiry_seconds: 8 * 60 * 60,
        }
    }
}
