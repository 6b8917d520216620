//! Users repository

use chrono::Utc;

use super::store::{Entity, Store};
use crate::{
    error::AppResult,
    models::user::{Role, User},
};

impl Entity for User {
    const TABLE: &'static str = "users";
    const NAME: &'static str = "User";

    fn text(&self, column: &str) -> Option<&str> {
        match column {
            "username" => Some(self.username.as_str()),
            "email" => Some(self.email.as_str()),
            "role" => Some(self.role.as_str()),
            _ => None,
        }
    }
}

pub type UsersRepository = Store<User>;

impl Store<User> {
    /// Insert a new user. `password_hash` must already be hashed.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        let query = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password, role, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(Utc::now());
        self.fetch_inserted(query).await
    }

    /// Replace username and email; `None` keeps the stored password hash or role
    pub async fn update(
        &self,
        id: i64,
        username: &str,
        email: &str,
        password_hash: Option<&str>,
        role: Option<Role>,
    ) -> AppResult<User> {
        let query = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = ?, email = ?,
                password = COALESCE(?, password),
                role = COALESCE(?, role),
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(Utc::now())
        .bind(id);
        self.fetch_updated(id, query).await
    }
}
