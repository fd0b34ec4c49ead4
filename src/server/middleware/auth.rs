//! Identity and ownership checks.
//!
//! Authentication happens upstream: a gateway verifies the caller's token and forwards the
//! user ID in the `X-User-Id` header. The guard only checks that the header is present and
//! names an existing user, then applies any resource permissions.

use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Header carrying the authenticated user's ID.
pub const USER_ID_HEADER: &str = "x-user-id";

pub enum Permission {
    /// Caller must be the user with this ID.
    Owner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the calling user and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Caller exists and holds all permissions
    /// - `Err(AuthError::MissingIdentity | InvalidIdentity)` - Header absent or malformed
    /// - `Err(AuthError::UserNotInDatabase)` - Header names an unknown user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        authorize(&user, permissions)?;

        Ok(user)
    }

    fn user_id(&self) -> Result<i32, AuthError> {
        let Some(value) = self.headers.get(USER_ID_HEADER) else {
            return Err(AuthError::MissingIdentity);
        };

        let value = value
            .to_str()
            .map_err(|_| AuthError::InvalidIdentity(format!("{:?}", value)))?;

        value
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidIdentity(value.to_string()))
    }
}

/// Checks permissions for an already resolved user.
pub fn authorize(user: &User, permissions: &[Permission]) -> Result<(), AuthError> {
    for permission in permissions {
        match permission {
            Permission::Owner(owner_id) => {
                if user.id != *owner_id {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!("Resource belongs to user {}", owner_id),
                    ));
                }
            }
        }
    }

    Ok(())
}
