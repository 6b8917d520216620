//! Generic entity store shared by every entity table

use std::marker::PhantomData;

use sqlx::{
    query::QueryAs,
    sqlite::{SqliteArguments, SqliteRow},
    FromRow, Pool, Sqlite,
};

use super::filter::{Bind, Filter};
use crate::error::{AppError, AppResult};

/// A persisted entity kind backed by one table with an `id` primary key
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Table name
    const TABLE: &'static str;
    /// Human-readable name used in not-found messages
    const NAME: &'static str;

    /// Value of a text column, `None` when NULL or not a text column of this entity
    fn text(&self, column: &str) -> Option<&str>;
}

/// CRUD access to one entity table.
///
/// Rows always come back in insertion order. Entity-specific writes and named
/// filters live in `impl Store<E>` blocks next to each entity's repository module.
///
/// Every statement is stepped to completion (`fetch_all`), including single-row
/// reads and `RETURNING` writes. A statement left mid-step keeps its transaction
/// open on the pooled connection, and later requests on other connections would
/// not see the write.
pub struct Store<E> {
    pub(super) pool: Pool<Sqlite>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for Store<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

type EntityQuery<'q, E> = QueryAs<'q, Sqlite, E, SqliteArguments<'q>>;

impl<E: Entity> Store<E> {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// List every row
    pub async fn find_all(&self) -> AppResult<Vec<E>> {
        let query = format!("SELECT * FROM {} ORDER BY id", E::TABLE);
        let rows = sqlx::query_as::<_, E>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get one row by id
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        let query = format!("SELECT * FROM {} WHERE id = ?", E::TABLE);
        self.fetch_first(sqlx::query_as::<_, E>(&query).bind(id))
            .await
    }

    /// Get one row by id, or `NotFound`
    pub async fn get_by_id(&self, id: i64) -> AppResult<E> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }

    /// Get the rows whose id is in `ids`; unknown ids are skipped
    pub async fn find_all_by_ids(&self, ids: &[i64]) -> AppResult<Vec<E>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT * FROM {} WHERE id IN ({}) ORDER BY id",
            E::TABLE,
            placeholders
        );

        let mut builder = sqlx::query_as::<_, E>(&query);
        for id in ids {
            builder = builder.bind(*id);
        }
        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Check whether a row with this id exists
    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let query = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", E::TABLE);
        let exists: Vec<bool> = sqlx::query_scalar(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(exists.into_iter().next().unwrap_or(false))
    }

    /// Count rows
    pub async fn count(&self) -> AppResult<i64> {
        let query = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let count: Vec<i64> = sqlx::query_scalar(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(count.into_iter().next().unwrap_or(0))
    }

    /// Delete a row by id, `NotFound` if it does not exist
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let query = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(not_found::<E>(id));
        }
        Ok(())
    }

    /// List the rows matching a filter.
    ///
    /// Flag and foreign-key filters run in SQL. Text filters scan the table in
    /// id order and compare in Rust, where case folding covers all of Unicode.
    pub async fn find_where(&self, filter: &Filter) -> AppResult<Vec<E>> {
        let mut rows = match filter.to_sql() {
            Some((predicate, binds)) => {
                let query = format!(
                    "SELECT * FROM {} WHERE {} ORDER BY id",
                    E::TABLE,
                    predicate
                );
                bind_all(sqlx::query_as::<_, E>(&query), binds)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => self.find_all().await?,
        };
        rows.retain(|row| filter.matches(row));
        Ok(rows)
    }

    /// First row (lowest id) matching a filter
    pub async fn find_first_where(&self, filter: &Filter) -> AppResult<Option<E>> {
        Ok(self.find_where(filter).await?.into_iter().next())
    }

    /// First row of a query run to completion
    pub(super) async fn fetch_first<'q>(&self, query: EntityQuery<'q, E>) -> AppResult<Option<E>> {
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().next())
    }

    /// Row returned by an `INSERT ... RETURNING *`
    pub(super) async fn fetch_inserted<'q>(&self, query: EntityQuery<'q, E>) -> AppResult<E> {
        self.fetch_first(query)
            .await?
            .ok_or_else(|| AppError::Internal(format!("{} insert returned no row", E::NAME)))
    }

    /// Row returned by an `UPDATE ... WHERE id = ? RETURNING *`, `NotFound` if none
    pub(super) async fn fetch_updated<'q>(&self, id: i64, query: EntityQuery<'q, E>) -> AppResult<E> {
        self.fetch_first(query)
            .await?
            .ok_or_else(|| not_found::<E>(id))
    }
}

fn bind_all<'q, E>(mut builder: EntityQuery<'q, E>, binds: Vec<Bind>) -> EntityQuery<'q, E> {
    for bind in binds {
        builder = match bind {
            Bind::Bool(value) => builder.bind(value),
            Bind::Int(value) => builder.bind(value),
        };
    }
    builder
}

/// Not-found error naming the entity kind and id
pub fn not_found<E: Entity>(id: i64) -> AppError {
    AppError::NotFound(format!("{} {} not found", E::NAME, id))
}
