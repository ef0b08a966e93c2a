//! Record services
//!
//! One service per record family. Every service shares the same
//! [`Database`](crate::Database) handle and performs its work inside a
//! single lock scope; multi-row mutations run in one transaction.

pub mod client_service;
pub mod crop_service;
pub mod document_service;
pub mod parcel_service;
pub mod payment_service;
pub mod rate_service;
pub mod template_service;
pub mod user_service;

pub use client_service::ClientService;
pub use crop_service::CropService;
pub use document_service::DocumentService;
pub use parcel_service::ParcelService;
pub use payment_service::PaymentService;
pub use rate_service::RateService;
pub use template_service::TemplateService;
pub use user_service::UserService;
