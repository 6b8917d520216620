//! Books service

use std::collections::HashMap;

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        book::{Book, SaveBook},
        category::Category,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.books.find_all().await?;
        self.attach_categories(books).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        let book = self.repository.books.get_by_id(id).await?;
        self.attach_category(book).await
    }

    /// Create a book. A category id that does not resolve leaves the book unlinked.
    pub async fn create(&self, data: &SaveBook) -> AppResult<Book> {
        data.validate()?;

        let category = match data.category_id() {
            Some(category_id) => self.find_category(category_id).await?,
            None => None,
        };

        let mut book = self
            .repository
            .books
            .create(data, category.as_ref().map(|c| c.id))
            .await?;
        book.category = category;

        tracing::info!(id = book.id, title = %book.title, category_id = ?book.category_id, "book created");
        Ok(book)
    }

    /// Replace a book. A category id that does not resolve keeps the stored link.
    pub async fn update(&self, id: i64, data: &SaveBook) -> AppResult<Book> {
        data.validate()?;

        let existing = self.repository.books.get_by_id(id).await?;

        let category_id = match data.category_id() {
            Some(category_id) => match self.find_category(category_id).await? {
                Some(category) => Some(category.id),
                None => existing.category_id,
            },
            None => None,
        };

        let book = self.repository.books.update(id, data, category_id).await?;
        self.attach_category(book).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete_by_id(id).await?;
        tracing::info!(id, "book deleted");
        Ok(())
    }

    /// Title substring search if `title` is given, else author substring search
    /// if `author` is given, else every book
    pub async fn search(&self, title: Option<&str>, author: Option<&str>) -> AppResult<Vec<Book>> {
        let books = match (title.filter(|t| !t.is_empty()), author.filter(|a| !a.is_empty())) {
            (Some(title), _) => self.repository.books.find_by_title_containing(title).await?,
            (None, Some(author)) => self.repository.books.find_by_author_containing(author).await?,
            (None, None) => self.repository.books.find_all().await?,
        };
        self.attach_categories(books).await
    }

    /// Free-text search over title, author and description
    pub async fn search_text(&self, query: &str) -> AppResult<Vec<Book>> {
        let books = self.repository.books.search(query).await?;
        self.attach_categories(books).await
    }

    pub async fn list_published(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.books.find_by_published(true).await?;
        self.attach_categories(books).await
    }

    pub async fn list_by_category(&self, category_id: i64) -> AppResult<Vec<Book>> {
        let books = self.repository.books.find_by_category_id(category_id).await?;
        self.attach_categories(books).await
    }

    async fn find_category(&self, category_id: i64) -> AppResult<Option<Category>> {
        let category = self.repository.categories.find_by_id(category_id).await?;
        if category.is_none() {
            tracing::debug!(category_id, "category reference does not resolve");
        }
        Ok(category)
    }

    async fn attach_category(&self, mut book: Book) -> AppResult<Book> {
        if let Some(category_id) = book.category_id {
            book.category = self.repository.categories.find_by_id(category_id).await?;
        }
        Ok(book)
    }

    /// Resolve the category links of a batch of books with a single query
    async fn attach_categories(&self, mut books: Vec<Book>) -> AppResult<Vec<Book>> {
        let mut ids: Vec<i64> = books.iter().filter_map(|b| b.category_id).collect();
        ids.sort_unstable();
        ids.dedup();

        let categories: HashMap<i64, Category> = self
            .repository
            .categories
            .find_all_by_ids(&ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        for book in &mut books {
            book.category = book.category_id.and_then(|id| categories.get(&id).cloned());
        }
        Ok(books)
    }
}
