//! HTTP request handlers

pub mod auth;
pub mod dashboard;
pub mod engagement;
pub mod posts;

use serde::Serialize;
use utoipa::ToSchema;

/// Success body for mutation endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Error body shared by every failure response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
