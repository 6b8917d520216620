//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{api_endpoints, books, categories, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock Data API",
        version = "0.1.0",
        description = "CRUD REST backend for a mock data catalog",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "REST API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // API endpoints
        api_endpoints::list_api_endpoints,
        api_endpoints::get_api_endpoint,
        api_endpoints::create_api_endpoint,
        api_endpoints::update_api_endpoint,
        api_endpoints::delete_api_endpoint,
        api_endpoints::list_active_api_endpoints,
        api_endpoints::list_api_endpoints_by_method,
        api_endpoints::list_api_endpoints_by_requires_auth,
        api_endpoints::search_api_endpoints,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::get_category_by_name,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        categories::list_active_categories,
        categories::search_categories,
        categories::search_categories_by_query,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_published_books,
        books::list_books_by_category,
        books::search_books,
        books::search_books_by_query,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            // API endpoints
            crate::models::api_endpoint::ApiEndpoint,
            crate::models::api_endpoint::SaveApiEndpoint,
            // Categories
            crate::models::category::Category,
            crate::models::category::SaveCategory,
            // Books
            crate::models::book::Book,
            crate::models::book::SaveBook,
            crate::models::book::CategoryRef,
            // Users
            crate::models::user::User,
            crate::models::user::Role,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Health
            health::HealthResponse,
            health::DatabaseStatus,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "apis", description = "Mock API endpoint registry"),
        (name = "categories", description = "Book categories"),
        (name = "books", description = "Book catalog"),
        (name = "users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
