//! API endpoint registry service

use validator::Validate;

use crate::{
    error::AppResult,
    models::api_endpoint::{ApiEndpoint, SaveApiEndpoint},
    repository::Repository,
};

#[derive(Clone)]
pub struct ApiEndpointsService {
    repository: Repository,
}

impl ApiEndpointsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ApiEndpoint>> {
        self.repository.api_endpoints.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<ApiEndpoint> {
        self.repository.api_endpoints.get_by_id(id).await
    }

    pub async fn create(&self, data: &SaveApiEndpoint) -> AppResult<ApiEndpoint> {
        data.validate()?;
        let endpoint = self.repository.api_endpoints.create(data).await?;
        tracing::info!(id = endpoint.id, method = %endpoint.method, path = %endpoint.path, "API endpoint created");
        Ok(endpoint)
    }

    pub async fn update(&self, id: i64, data: &SaveApiEndpoint) -> AppResult<ApiEndpoint> {
        data.validate()?;
        self.repository.api_endpoints.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.api_endpoints.delete_by_id(id).await?;
        tracing::info!(id, "API endpoint deleted");
        Ok(())
    }

    pub async fn list_active(&self) -> AppResult<Vec<ApiEndpoint>> {
        self.repository.api_endpoints.find_active().await
    }

    pub async fn list_by_method(&self, method: &str) -> AppResult<Vec<ApiEndpoint>> {
        self.repository.api_endpoints.find_by_method(method).await
    }

    pub async fn list_by_requires_auth(&self, requires_auth: bool) -> AppResult<Vec<ApiEndpoint>> {
        self.repository
            .api_endpoints
            .find_by_requires_auth(requires_auth)
            .await
    }

    /// Name substring search; every endpoint when `name` is absent or empty
    pub async fn search_by_name(&self, name: Option<&str>) -> AppResult<Vec<ApiEndpoint>> {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => self.repository.api_endpoints.find_by_name_containing(name).await,
            None => self.list().await,
        }
    }
}
