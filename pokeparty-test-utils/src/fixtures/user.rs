use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user whose email and display name are derived from the login
    pub async fn insert_user(&self, login: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                login: ActiveValue::Set(login.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", login)),
                name: ActiveValue::Set(login.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                is_admin: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
