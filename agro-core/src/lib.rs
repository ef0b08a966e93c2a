//! AgroOptima Core Types
//!
//! Domain model shared by the storage and API layers:
//! advisor clients, land parcels with multi-year crop history, subsidy
//! rates, the crop dictionary, CSV import templates and payments.
//!
//! The one piece of real modeling here is the parcel-history extension
//! bag ([`ExtendedData`]): campaign-year and program-specific attributes
//! vary from season to season, so only a small stable subset of history
//! fields is promoted to real columns and everything else travels as a
//! sparse, self-describing JSON value. See the [`history`] module.

pub mod credentials;
pub mod history;
pub mod types;
pub mod validation;

pub use history::{CropPart, ExtendedData, HistoryEntry};
pub use types::*;
pub use validation::{validate_producer_id, ProducerIdError};
