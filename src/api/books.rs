//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookSearchQuery, SaveBook},
        FreeTextQuery,
    },
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
///
/// `category.id` is resolved against existing categories; an unknown id leaves
/// the book without a category.
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = SaveBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Invalid field values", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(data): Json<SaveBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(&data).await?;
    Ok(Json(book))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = SaveBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<SaveBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::OK)
}

/// List published books
#[utoipa::path(
    get,
    path = "/books/published",
    tag = "books",
    responses(
        (status = 200, description = "Published books", body = Vec<Book>)
    )
)]
pub async fn list_published_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_published().await?;
    Ok(Json(books))
}

/// List the books of a category
#[utoipa::path(
    get,
    path = "/books/category/{category_id}",
    tag = "books",
    params(("category_id" = i64, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Books in the category", body = Vec<Book>)
    )
)]
pub async fn list_books_by_category(
    State(state): State<crate::AppState>,
    Path(category_id): Path<i64>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list_by_category(category_id).await?;
    Ok(Json(books))
}

/// Search books by title or author
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Matching books, or all when neither parameter is given", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookSearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .books
        .search(query.title.as_deref(), query.author.as_deref())
        .await?;
    Ok(Json(books))
}

/// Free-text search over title, author and description
#[utoipa::path(
    get,
    path = "/books/search/query",
    tag = "books",
    params(FreeTextQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 400, description = "Missing q parameter")
    )
)]
pub async fn search_books_by_query(
    State(state): State<crate::AppState>,
    Query(query): Query<FreeTextQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.search_text(&query.q).await?;
    Ok(Json(books))
}
