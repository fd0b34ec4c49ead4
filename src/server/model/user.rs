//! User domain models and parameters.
//!
//! Users carry no credentials. Identity is asserted by the upstream gateway and
//! checked against this table by the auth guard.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::error::AppError,
};

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for registering a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub name: String,
}

impl CreateUserParams {
    /// Validates the request body and trims surrounding whitespace.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - All fields present
    /// - `Err(AppError::BadRequest)` - A field is blank or the email has no `@`
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let username = dto.username.trim().to_string();
        let email = dto.email.trim().to_string();
        let name = dto.name.trim().to_string();

        if username.is_empty() {
            return Err(AppError::BadRequest("username is required".to_string()));
        }
        if name.is_empty() {
            return Err(AppError::BadRequest("name is required".to_string()));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest(
                "email must be a valid address".to_string(),
            ));
        }

        Ok(Self {
            username,
            email,
            name,
        })
    }
}
