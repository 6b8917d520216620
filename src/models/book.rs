//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::category::Category;

/// Book record.
///
/// The category link is stored as a nullable foreign key and resolved into
/// `category` by the books service before the record leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub description: Option<String>,
    #[serde(skip)]
    pub category_id: Option<i64>,
    /// Resolved category, `null` when unlinked
    #[sqlx(skip)]
    pub category: Option<Category>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reference to a category by id, as sent by clients (`"category": {"id": 3}`)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryRef {
    pub id: Option<i64>,
}

/// Create or replace book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveBook {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub author: String,
    #[validate(length(max = 20))]
    pub isbn: Option<String>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub published: bool,
}

impl SaveBook {
    /// Category id requested by the client, if any
    pub fn category_id(&self) -> Option<i64> {
        self.category.as_ref().and_then(|c| c.id)
    }
}

/// Query parameters for title/author search
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookSearchQuery {
    /// Substring of the title (takes precedence over `author`)
    pub title: Option<String>,
    /// Substring of the author
    pub author: Option<String>,
}
