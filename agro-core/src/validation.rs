//! Payload validation rules
//!
//! Checks that run before any store access; a failed rule must leave the
//! store untouched.

use thiserror::Error;

/// Required length of a producer identifier (EP number)
pub const PRODUCER_ID_LEN: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("producer id must be exactly {PRODUCER_ID_LEN} characters, got {0:?}")]
pub struct ProducerIdError(pub String);

/// Validates a farmer client producer identifier.
///
/// The EP number is a fixed-length 9-character identifier assigned by
/// the paying agency; it is used verbatim as the primary key.
pub fn validate_producer_id(producer_id: &str) -> Result<(), ProducerIdError> {
    if producer_id.chars().count() != PRODUCER_ID_LEN || producer_id.chars().any(char::is_whitespace)
    {
        return Err(ProducerIdError(producer_id.to_string()));
    }
    Ok(())
}
