//! Books repository

use chrono::Utc;

use super::{
    filter::Filter,
    store::{Entity, Store},
};
use crate::{
    error::AppResult,
    models::book::{Book, SaveBook},
};

/// Columns matched by the free-text book search
const SEARCH_COLUMNS: &[&str] = &["title", "author", "description"];

impl Entity for Book {
    const TABLE: &'static str = "books";
    const NAME: &'static str = "Book";

    fn text(&self, column: &str) -> Option<&str> {
        match column {
            "title" => Some(self.title.as_str()),
            "author" => Some(self.author.as_str()),
            "isbn" => self.isbn.as_deref(),
            "description" => self.description.as_deref(),
            _ => None,
        }
    }
}

pub type BooksRepository = Store<Book>;

impl Store<Book> {
    /// Insert a new book linked to `category_id`
    pub async fn create(&self, data: &SaveBook, category_id: Option<i64>) -> AppResult<Book> {
        let query = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, isbn, description, category_id, published, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.isbn)
        .bind(&data.description)
        .bind(category_id)
        .bind(data.published)
        .bind(Utc::now());
        self.fetch_inserted(query).await
    }

    /// Replace every mutable field of a book
    pub async fn update(&self, id: i64, data: &SaveBook, category_id: Option<i64>) -> AppResult<Book> {
        let query = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = ?, author = ?, isbn = ?, description = ?,
                category_id = ?, published = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.isbn)
        .bind(&data.description)
        .bind(category_id)
        .bind(data.published)
        .bind(Utc::now())
        .bind(id);
        self.fetch_updated(id, query).await
    }

    pub async fn find_by_title_containing(&self, title: &str) -> AppResult<Vec<Book>> {
        self.find_where(&Filter::contains_ignore_case("title", title))
            .await
    }

    pub async fn find_by_author_containing(&self, author: &str) -> AppResult<Vec<Book>> {
        self.find_where(&Filter::contains_ignore_case("author", author))
            .await
    }

    pub async fn find_by_category_id(&self, category_id: i64) -> AppResult<Vec<Book>> {
        self.find_where(&Filter::references("category_id", category_id))
            .await
    }

    pub async fn find_by_published(&self, published: bool) -> AppResult<Vec<Book>> {
        self.find_where(&Filter::flag("published", published)).await
    }

    /// Free-text search over title, author and description
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        self.find_where(&Filter::any_contains_ignore_case(SEARCH_COLUMNS, query))
            .await
    }
}
