//! Repository layer for database operations

pub mod api_endpoints;
pub mod books;
pub mod categories;
pub mod filter;
pub mod store;
pub mod users;

use std::str::FromStr;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};

use crate::config::DatabaseConfig;

pub use filter::Filter;
pub use store::{Entity, Store};

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open a connection pool for the configured database
pub async fn connect(config: &DatabaseConfig) -> Result<Pool<Sqlite>, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await
}

/// Main repository struct holding one store per entity table
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub api_endpoints: api_endpoints::ApiEndpointsRepository,
    pub categories: categories::CategoriesRepository,
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            api_endpoints: Store::new(pool.clone()),
            categories: Store::new(pool.clone()),
            books: Store::new(pool.clone()),
            users: Store::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip a trivial query to check database connectivity
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
