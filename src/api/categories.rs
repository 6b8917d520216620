//! Category endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        category::{Category, CategorySearchQuery, SaveCategory},
        FreeTextQuery,
    },
};

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category list", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list().await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.get_by_id(id).await?;
    Ok(Json(category))
}

/// Get category by exact name (case-insensitive)
#[utoipa::path(
    get,
    path = "/categories/name/{name}",
    tag = "categories",
    params(("name" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category_by_name(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.get_by_name(&name).await?;
    Ok(Json(category))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = SaveCategory,
    responses(
        (status = 200, description = "Category created", body = Category),
        (status = 400, description = "Invalid field values", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveCategory>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.create(&data).await?;
    Ok(Json(category))
}

/// Replace a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    request_body = SaveCategory,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<SaveCategory>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.update(id, &data).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::OK)
}

/// List active categories
#[utoipa::path(
    get,
    path = "/categories/active",
    tag = "categories",
    responses(
        (status = 200, description = "Active categories", body = Vec<Category>)
    )
)]
pub async fn list_active_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list_active().await?;
    Ok(Json(categories))
}

/// Search categories by name
#[utoipa::path(
    get,
    path = "/categories/search",
    tag = "categories",
    params(CategorySearchQuery),
    responses(
        (status = 200, description = "Matching categories, or all when no name is given", body = Vec<Category>)
    )
)]
pub async fn search_categories(
    State(state): State<crate::AppState>,
    Query(query): Query<CategorySearchQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state
        .services
        .categories
        .search_by_name(query.name.as_deref())
        .await?;
    Ok(Json(categories))
}

/// Free-text search over category name and description
#[utoipa::path(
    get,
    path = "/categories/search/query",
    tag = "categories",
    params(FreeTextQuery),
    responses(
        (status = 200, description = "Matching categories", body = Vec<Category>),
        (status = 400, description = "Missing q parameter")
    )
)]
pub async fn search_categories_by_query(
    State(state): State<crate::AppState>,
    Query(query): Query<FreeTextQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.search(&query.q).await?;
    Ok(Json(categories))
}
