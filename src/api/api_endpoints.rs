//! API endpoint registry endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::api_endpoint::{ApiEndpoint, ApiEndpointSearchQuery, SaveApiEndpoint},
};

/// List all API endpoints
#[utoipa::path(
    get,
    path = "/apis",
    tag = "apis",
    responses(
        (status = 200, description = "API endpoint list", body = Vec<ApiEndpoint>)
    )
)]
pub async fn list_api_endpoints(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ApiEndpoint>>> {
    let endpoints = state.services.api_endpoints.list().await?;
    Ok(Json(endpoints))
}

/// Get API endpoint by ID
#[utoipa::path(
    get,
    path = "/apis/{id}",
    tag = "apis",
    params(("id" = i64, Path, description = "API endpoint ID")),
    responses(
        (status = 200, description = "API endpoint details", body = ApiEndpoint),
        (status = 404, description = "API endpoint not found")
    )
)]
pub async fn get_api_endpoint(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiEndpoint>> {
    let endpoint = state.services.api_endpoints.get_by_id(id).await?;
    Ok(Json(endpoint))
}

/// Create an API endpoint
#[utoipa::path(
    post,
    path = "/apis",
    tag = "apis",
    request_body = SaveApiEndpoint,
    responses(
        (status = 200, description = "API endpoint created", body = ApiEndpoint),
        (status = 400, description = "Invalid field values", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_api_endpoint(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveApiEndpoint>,
) -> AppResult<Json<ApiEndpoint>> {
    let endpoint = state.services.api_endpoints.create(&data).await?;
    Ok(Json(endpoint))
}

/// Replace an API endpoint
#[utoipa::path(
    put,
    path = "/apis/{id}",
    tag = "apis",
    params(("id" = i64, Path, description = "API endpoint ID")),
    request_body = SaveApiEndpoint,
    responses(
        (status = 200, description = "API endpoint updated", body = ApiEndpoint),
        (status = 404, description = "API endpoint not found")
    )
)]
pub async fn update_api_endpoint(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<SaveApiEndpoint>,
) -> AppResult<Json<ApiEndpoint>> {
    let endpoint = state.services.api_endpoints.update(id, &data).await?;
    Ok(Json(endpoint))
}

/// Delete an API endpoint
#[utoipa::path(
    delete,
    path = "/apis/{id}",
    tag = "apis",
    params(("id" = i64, Path, description = "API endpoint ID")),
    responses(
        (status = 200, description = "API endpoint deleted"),
        (status = 404, description = "API endpoint not found")
    )
)]
pub async fn delete_api_endpoint(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.api_endpoints.delete(id).await?;
    Ok(StatusCode::OK)
}

/// List active API endpoints
#[utoipa::path(
    get,
    path = "/apis/active",
    tag = "apis",
    responses(
        (status = 200, description = "Active API endpoints", body = Vec<ApiEndpoint>)
    )
)]
pub async fn list_active_api_endpoints(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ApiEndpoint>>> {
    let endpoints = state.services.api_endpoints.list_active().await?;
    Ok(Json(endpoints))
}

/// List API endpoints by HTTP method (case-insensitive)
#[utoipa::path(
    get,
    path = "/apis/method/{method}",
    tag = "apis",
    params(("method" = String, Path, description = "HTTP method, e.g. GET")),
    responses(
        (status = 200, description = "Matching API endpoints", body = Vec<ApiEndpoint>)
    )
)]
pub async fn list_api_endpoints_by_method(
    State(state): State<crate::AppState>,
    Path(method): Path<String>,
) -> AppResult<Json<Vec<ApiEndpoint>>> {
    let endpoints = state.services.api_endpoints.list_by_method(&method).await?;
    Ok(Json(endpoints))
}

/// List API endpoints by authentication requirement
#[utoipa::path(
    get,
    path = "/apis/requires-auth/{requires_auth}",
    tag = "apis",
    params(("requires_auth" = bool, Path, description = "Whether the endpoint requires authentication")),
    responses(
        (status = 200, description = "Matching API endpoints", body = Vec<ApiEndpoint>)
    )
)]
pub async fn list_api_endpoints_by_requires_auth(
    State(state): State<crate::AppState>,
    Path(requires_auth): Path<bool>,
) -> AppResult<Json<Vec<ApiEndpoint>>> {
    let endpoints = state
        .services
        .api_endpoints
        .list_by_requires_auth(requires_auth)
        .await?;
    Ok(Json(endpoints))
}

/// Search API endpoints by name
#[utoipa::path(
    get,
    path = "/apis/search",
    tag = "apis",
    params(ApiEndpointSearchQuery),
    responses(
        (status = 200, description = "Matching API endpoints, or all when no name is given", body = Vec<ApiEndpoint>)
    )
)]
pub async fn search_api_endpoints(
    State(state): State<crate::AppState>,
    Query(query): Query<ApiEndpointSearchQuery>,
) -> AppResult<Json<Vec<ApiEndpoint>>> {
    let endpoints = state
        .services
        .api_endpoints
        .search_by_name(query.name.as_deref())
        .await?;
    Ok(Json(endpoints))
}
