//! API endpoint registry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Registered API endpoint
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    pub id: i64,
    /// Display name
    pub name: String,
    pub description: Option<String>,
    /// HTTP method (free text, e.g. GET, POST)
    pub method: String,
    /// Request path, e.g. /books/{id}
    pub path: String,
    pub requires_auth: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create or replace API endpoint request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveApiEndpoint {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub method: String,
    #[validate(length(min = 1))]
    pub path: String,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default = "super::default_true")]
    pub is_active: bool,
}

/// Query parameters for API endpoint name search
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ApiEndpointSearchQuery {
    /// Substring of the endpoint name (case-insensitive)
    pub name: Option<String>,
}
