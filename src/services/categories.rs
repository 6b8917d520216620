//! Categories service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::category::{Category, SaveCategory},
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
}

impl CategoriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> AppResult<Category> {
        self.repository
            .categories
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", name)))
    }

    pub async fn create(&self, data: &SaveCategory) -> AppResult<Category> {
        data.validate()?;
        let category = self.repository.categories.create(data).await?;
        tracing::info!(id = category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn update(&self, id: i64, data: &SaveCategory) -> AppResult<Category> {
        data.validate()?;
        self.repository.categories.update(id, data).await
    }

    /// Delete a category. Linked books keep existing with no category.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.categories.delete_by_id(id).await?;
        tracing::info!(id, "category deleted");
        Ok(())
    }

    pub async fn list_active(&self) -> AppResult<Vec<Category>> {
        self.repository.categories.find_by_is_active(true).await
    }

    /// Name substring search; every category when `name` is absent or empty
    pub async fn search_by_name(&self, name: Option<&str>) -> AppResult<Vec<Category>> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.repository.categories.find_by_name_containing(name).await,
            None => self.list().await,
        }
    }

    /// Free-text search over name and description
    pub async fn search(&self, query: &str) -> AppResult<Vec<Category>> {
        self.repository.categories.search(query).await
    }
}
