use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QuerySelect};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Fetch a user while taking an exclusive row lock held until the surrounding
    /// transaction ends
    ///
    /// Used to serialize roster mutations for a single user. Backends without row
    /// locking (SQLite) ignore the lock clause and serialize at the transaction level.
    pub async fn lock_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }
}
