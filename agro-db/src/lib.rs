//! AgroOptima Database Layer
//!
//! SQLite-backed record store for the advisor backend. One embedded
//! database file (or an in-memory database for tests), accessed through
//! a single shared [`Database`] handle with per-operation connection
//! scoping and real transactions.
//!
//! Layout mirrors the service split of the API surface:
//! - [`schema`]: DDL for the full table set
//! - [`services`]: one service per record family (clients, parcels,
//!   documents, rates, crops, templates, payments, users)
//! - [`seed`]: one-shot demo-data bootstrap, gated on an empty user
//!   table

pub mod db;
pub mod error;
pub mod schema;
pub mod seed;
pub mod services;

pub use db::Database;
pub use error::{DbError, DbResult};
pub use seed::seed_demo_data;
pub use services::{
    ClientService, CropService, DocumentService, ParcelService, PaymentService, RateService,
    TemplateService, UserService,
};
