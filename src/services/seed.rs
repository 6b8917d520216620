//! Startup sample data

use super::Services;
use crate::{
    error::AppResult,
    models::{
        book::{CategoryRef, SaveBook},
        category::SaveCategory,
        user::{CreateUser, Role},
    },
};

impl Services {
    /// Populate empty tables with sample rows.
    ///
    /// Each table is only seeded while it has no rows, so running this on every
    /// startup is safe.
    pub async fn seed(&self) -> AppResult<()> {
        self.seed_users().await?;
        self.seed_categories().await?;
        self.seed_books().await?;
        Ok(())
    }

    async fn seed_users(&self) -> AppResult<()> {
        if self.repository.users.count().await? > 0 {
            return Ok(());
        }

        let users = [
            ("admin", "admin@example.com", "admin123", Role::Admin),
            ("user", "user@example.com", "user123", Role::User),
        ];
        for (username, email, password, role) in users {
            self.users
                .create(&CreateUser {
                    username: username.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                    role,
                })
                .await?;
        }

        tracing::info!(count = users.len(), "seeded users");
        Ok(())
    }

    async fn seed_categories(&self) -> AppResult<()> {
        if self.repository.categories.count().await? > 0 {
            return Ok(());
        }

        let categories = [
            ("Fiction", "Fictional literature and novels"),
            ("Non-Fiction", "Non-fictional books and educational content"),
            ("Science", "Scientific books and research"),
        ];
        for (name, description) in categories {
            self.categories
                .create(&SaveCategory {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    is_active: true,
                })
                .await?;
        }

        tracing::info!(count = categories.len(), "seeded categories");
        Ok(())
    }

    async fn seed_books(&self) -> AppResult<()> {
        if self.repository.books.count().await? > 0 {
            return Ok(());
        }

        let books = [
            (
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "A story of the fabulously wealthy Jay Gatsby and his love for the beautiful Daisy Buchanan.",
                "Fiction",
            ),
            (
                "To Kill a Mockingbird",
                "Harper Lee",
                "The story of young Scout Finch and her father Atticus in a racially divided Alabama town.",
                "Fiction",
            ),
            (
                "Sapiens",
                "Yuval Noah Harari",
                "A brief history of humankind from ancient humans to the present day.",
                "Non-Fiction",
            ),
        ];

        let mut seeded = 0;
        for (title, author, description, category_name) in books {
            // Books are only seeded under categories that still exist
            let Some(category) = self.repository.categories.find_by_name(category_name).await? else {
                tracing::warn!(category = category_name, title, "seed category missing, skipping book");
                continue;
            };

            self.books
                .create(&SaveBook {
                    title: title.to_string(),
                    author: author.to_string(),
                    isbn: None,
                    description: Some(description.to_string()),
                    category: Some(CategoryRef { id: Some(category.id) }),
                    published: true,
                })
                .await?;
            seeded += 1;
        }

        tracing::info!(count = seeded, "seeded books");
        Ok(())
    }
}
