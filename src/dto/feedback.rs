//! DTOs exposed by the feedback API endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::feedback::Feedback;

/// One page of feedback records plus the number of records matching the
/// request before pagination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPage {
    pub total_records: usize,
    /// Page number after normalization.
    pub page: i32,
    /// Page size after normalization.
    pub page_size: i32,
    pub data: Vec<Feedback>,
}

/// Body of error and not-found responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
