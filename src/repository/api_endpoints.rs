//! API endpoints repository

use chrono::Utc;

use super::{
    filter::Filter,
    store::{Entity, Store},
};
use crate::{
    error::AppResult,
    models::api_endpoint::{ApiEndpoint, SaveApiEndpoint},
};

impl Entity for ApiEndpoint {
    const TABLE: &'static str = "api_endpoints";
    const NAME: &'static str = "API endpoint";

    fn text(&self, column: &str) -> Option<&str> {
        match column {
            "name" => Some(self.name.as_str()),
            "description" => self.description.as_deref(),
            "method" => Some(self.method.as_str()),
            "path" => Some(self.path.as_str()),
            _ => None,
        }
    }
}

pub type ApiEndpointsRepository = Store<ApiEndpoint>;

impl Store<ApiEndpoint> {
    /// Insert a new endpoint
    pub async fn create(&self, data: &SaveApiEndpoint) -> AppResult<ApiEndpoint> {
        let query = sqlx::query_as::<_, ApiEndpoint>(
            r#"
            INSERT INTO api_endpoints (name, description, method, path, requires_auth, is_active, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.method)
        .bind(&data.path)
        .bind(data.requires_auth)
        .bind(data.is_active)
        .bind(Utc::now());
        self.fetch_inserted(query).await
    }

    /// Replace every mutable field of an endpoint
    pub async fn update(&self, id: i64, data: &SaveApiEndpoint) -> AppResult<ApiEndpoint> {
        let query = sqlx::query_as::<_, ApiEndpoint>(
            r#"
            UPDATE api_endpoints
            SET name = ?, description = ?, method = ?, path = ?,
                requires_auth = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.method)
        .bind(&data.path)
        .bind(data.requires_auth)
        .bind(data.is_active)
        .bind(Utc::now())
        .bind(id);
        self.fetch_updated(id, query).await
    }

    /// Active endpoints
    pub async fn find_active(&self) -> AppResult<Vec<ApiEndpoint>> {
        self.find_where(&Filter::flag("is_active", true)).await
    }

    /// Endpoints whose method equals `method`, ignoring case
    pub async fn find_by_method(&self, method: &str) -> AppResult<Vec<ApiEndpoint>> {
        self.find_where(&Filter::equals_ignore_case("method", method))
            .await
    }

    pub async fn find_by_requires_auth(&self, requires_auth: bool) -> AppResult<Vec<ApiEndpoint>> {
        self.find_where(&Filter::flag("requires_auth", requires_auth))
            .await
    }

    pub async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<ApiEndpoint>> {
        self.find_where(&Filter::contains_ignore_case("name", name))
            .await
    }
}
