use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, QueryFilter};

use crate::data::tracked::TrackedEntity;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an active user by id. Deactivated users are treated as missing.
    pub async fn find_active_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_active()
            .filter(entity::user::Column::Id.eq(user_id))
            .one(self.db)
            .await
    }
}
