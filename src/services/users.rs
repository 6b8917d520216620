//! User management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User},
    repository::{store::not_found, Repository},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create a new user with a hashed password
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        data.validate()?;

        let password_hash = hash_password(&data.password)?;
        let user = self
            .repository
            .users
            .create(&data.username, &data.email, &password_hash, data.role)
            .await?;

        tracing::info!(id = user.id, username = %user.username, role = %user.role, "user created");
        Ok(user)
    }

    /// Replace a user; the password is re-hashed only when a new one is supplied
    pub async fn update(&self, id: i64, data: &UpdateUser) -> AppResult<User> {
        data.validate()?;

        // Skip hashing for unknown users
        if !self.repository.users.exists_by_id(id).await? {
            return Err(not_found::<User>(id));
        }

        let password_hash = data.password.as_deref().map(hash_password).transpose()?;
        self.repository
            .users
            .update(id, &data.username, &data.email, password_hash.as_deref(), data.role)
            .await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.users.delete_by_id(id).await?;
        tracing::info!(id, "user deleted");
        Ok(())
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Check a password against a stored Argon2 hash
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
