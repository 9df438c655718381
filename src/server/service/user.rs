//! User service layer.
//!
//! Read access to user accounts for the authentication endpoints. Account creation and
//! credential handling belong to the authentication collaborator.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{data::user::UserRepository, error::Error, service::retry::RetryContext},
};

/// Service for user account lookups.
///
/// Operations use automatic retry logic for transient failures.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves user information.
    ///
    /// Uses automatic retry logic to handle transient database failures.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let ctx = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get user ID {}", user_id), || {
            let db = db.clone();

            Box::pin(async move {
                let user_repo = UserRepository::new(&db);

                Ok(user_repo.get_by_id(user_id).await?.map(|user| UserDto {
                    id: user.id,
                    login: user.login,
                    email: user.email,
                    name: user.name,
                    is_admin: user.is_admin,
                }))
            })
        })
        .await
    }
}
