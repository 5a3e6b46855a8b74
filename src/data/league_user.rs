use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, IntoCondition},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::data::tracked::TrackedEntity;

pub struct LeagueUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active memberships of a user, ordered by league.
    pub async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::league_user::Model>, DbErr> {
        entity::prelude::LeagueUser::find_active()
            .filter(entity::league_user::Column::UserId.eq(user_id))
            .order_by_asc(entity::league_user::Column::LeagueId)
            .all(self.db)
            .await
    }

    /// Soft-deletes every active membership matching `condition`.
    ///
    /// Used when the league or user a membership points at is deleted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of memberships deactivated
    pub async fn deactivate_where<F: IntoCondition>(&self, condition: F) -> Result<u64, DbErr> {
        let result = entity::prelude::LeagueUser::update_many()
            .col_expr(entity::league_user::Column::IsActive, Expr::value(false))
            .col_expr(entity::league_user::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(condition.into_condition())
            .filter(entity::league_user::Column::IsActive.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
