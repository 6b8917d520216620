//! Categories repository

use chrono::Utc;

use super::{
    filter::Filter,
    store::{Entity, Store},
};
use crate::{
    error::AppResult,
    models::category::{Category, SaveCategory},
};

/// Columns matched by the free-text category search
const SEARCH_COLUMNS: &[&str] = &["name", "description"];

impl Entity for Category {
    const TABLE: &'static str = "categories";
    const NAME: &'static str = "Category";

    fn text(&self, column: &str) -> Option<&str> {
        match column {
            "name" => Some(self.name.as_str()),
            "description" => self.description.as_deref(),
            _ => None,
        }
    }
}

pub type CategoriesRepository = Store<Category>;

impl Store<Category> {
    /// Insert a new category
    pub async fn create(&self, data: &SaveCategory) -> AppResult<Category> {
        let query = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, is_active, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.is_active)
        .bind(Utc::now());
        self.fetch_inserted(query).await
    }

    /// Replace every mutable field of a category
    pub async fn update(&self, id: i64, data: &SaveCategory) -> AppResult<Category> {
        let query = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = ?, description = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.is_active)
        .bind(Utc::now())
        .bind(id);
        self.fetch_updated(id, query).await
    }

    pub async fn find_by_is_active(&self, is_active: bool) -> AppResult<Vec<Category>> {
        self.find_where(&Filter::flag("is_active", is_active)).await
    }

    /// Lookup by name, ignoring case. Names are not unique; the oldest match wins.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        self.find_first_where(&Filter::equals_ignore_case("name", name))
            .await
    }

    pub async fn find_by_name_containing(&self, name: &str) -> AppResult<Vec<Category>> {
        self.find_where(&Filter::contains_ignore_case("name", name))
            .await
    }

    /// Free-text search over name and description
    pub async fn search(&self, query: &str) -> AppResult<Vec<Category>> {
        self.find_where(&Filter::any_contains_ignore_case(SEARCH_COLUMNS, query))
            .await
    }
}
