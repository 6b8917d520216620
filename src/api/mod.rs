//! API handlers for the mock data REST endpoints

pub mod api_endpoints;
pub mod books;
pub mod categories;
pub mod health;
pub mod openapi;
pub mod users;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // API endpoint registry
        .route(
            "/apis",
            get(api_endpoints::list_api_endpoints).post(api_endpoints::create_api_endpoint),
        )
        .route("/apis/active", get(api_endpoints::list_active_api_endpoints))
        .route("/apis/search", get(api_endpoints::search_api_endpoints))
        .route("/apis/method/:method", get(api_endpoints::list_api_endpoints_by_method))
        .route(
            "/apis/requires-auth/:requires_auth",
            get(api_endpoints::list_api_endpoints_by_requires_auth),
        )
        .route(
            "/apis/:id",
            get(api_endpoints::get_api_endpoint)
                .put(api_endpoints::update_api_endpoint)
                .delete(api_endpoints::delete_api_endpoint),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/active", get(categories::list_active_categories))
        .route("/categories/search", get(categories::search_categories))
        .route("/categories/search/query", get(categories::search_categories_by_query))
        .route("/categories/name/:name", get(categories::get_category_by_name))
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/published", get(books::list_published_books))
        .route("/books/search", get(books::search_books))
        .route("/books/search/query", get(books::search_books_by_query))
        .route("/books/category/:category_id", get(books::list_books_by_category))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
