//! Payload definitions backing the feedback routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod feedback;

#[derive(Debug, Error)]
/// Errors that can occur when processing submitted feedback.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid customer id")]
    InvalidCustomerId,

    #[error("invalid product id")]
    InvalidProductId,

    #[error("invalid rating")]
    InvalidRating,
}
