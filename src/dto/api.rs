//! DTOs exposed by the JSON API endpoints.

use serde::Serialize;

/// Envelope returned by paginated API list endpoints.
#[derive(Debug, Serialize)]
pub struct ApiListResponse<T> {
    pub items: Vec<T>,
    /// Total number of rows matching the filter, across all pages.
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Error body returned by API endpoints alongside a non-2xx status.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
