//! Data models for the mock data catalog

pub mod api_endpoint;
pub mod book;
pub mod category;
pub mod user;

// Re-export commonly used types
pub use api_endpoint::ApiEndpoint;
pub use book::Book;
pub use category::Category;
pub use user::{Role, User};

/// Query parameter for the multi-field free-text search endpoints
#[derive(Debug, serde::Deserialize, utoipa::IntoParams, utoipa::ToSchema)]
#[into_params(parameter_in = Query)]
pub struct FreeTextQuery {
    /// Text matched case-insensitively against every searchable field
    pub q: String,
}

pub(crate) fn default_true() -> bool {
    true
}
