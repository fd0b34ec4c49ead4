//! User service for business logic.
//!
//! This module provides the `UserService` for registering and looking up users while
//! working with domain models rather than DTOs.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `params` - Validated registration data
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username or email already in use
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = match user_repo.create(params).await {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AppError::BadRequest(
                    "Username or email is already registered".to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(user_id = user.id, username = %user.username, "Registered user");

        Ok(user)
    }

    /// Retrieves a user by username.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that username
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.find_by_username(username).await?)
    }
}
