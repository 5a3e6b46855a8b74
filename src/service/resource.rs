use std::marker::PhantomData;

use sea_orm::{ActiveModelTrait, DatabaseConnection, IdenStatic, ModelTrait};

use crate::{
    data::{
        resource::{merge_changes, Record, ResourceRepository},
        tracked::TrackedEntity,
    },
    error::{internal::InternalError, AppError},
    middleware::auth::SessionContext,
    model::query::{Filter, Page, Pagination, Sort, View},
    resource::{relations_for, Resource},
    util::validate::join_names,
};

/// Business rules shared by every resource.
pub struct ResourceService<'a, R: Resource> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// Lists one page of active rows.
    ///
    /// # Returns
    /// - `Ok(Page)` - Requested page with relations for `view`
    /// - `Err(AppError::Validation)` - `page` or `page_size` is 0, or the page starts past
    ///   the largest offset the database accepts
    pub async fn find_page(
        &self,
        filter: &Filter<R::Entity>,
        sort: &Sort<R::Entity>,
        pagination: Pagination,
        view: View,
    ) -> Result<Page<Record<R>>, AppError> {
        if pagination.page < 1 {
            return Err(AppError::Validation("page must be at least 1".to_string()));
        }
        if pagination.page_size < 1 {
            return Err(AppError::Validation(
                "pageSize must be at least 1".to_string(),
            ));
        }
        // LIMIT and OFFSET are bound as signed 64-bit integers.
        let max = i64::MAX as u64;
        let offset = (pagination.page - 1).checked_mul(pagination.page_size);
        if pagination.page_size > max || offset.is_none_or(|o| o > max) {
            return Err(AppError::Validation(
                "page and pageSize are out of range".to_string(),
            ));
        }

        ResourceRepository::<R>::new(self.db)
            .find_page(filter, sort, relations_for::<R>(view), pagination)
            .await
    }

    pub async fn find_all(
        &self,
        filter: &Filter<R::Entity>,
        sort: &Sort<R::Entity>,
        view: View,
    ) -> Result<Vec<Record<R>>, AppError> {
        ResourceRepository::<R>::new(self.db)
            .find_all(filter, sort, relations_for::<R>(view))
            .await
    }

    pub async fn find_one(
        &self,
        id: i32,
        filter: &Filter<R::Entity>,
        view: View,
    ) -> Result<Record<R>, AppError> {
        ResourceRepository::<R>::new(self.db)
            .find_one(id, filter, relations_for::<R>(view))
            .await
    }

    /// Creates a row from a client input.
    ///
    /// # Arguments
    /// - `input` - Parsed create body
    /// - `scope` - League id from the path of a league-nested route; overrides the body
    /// - `actor` - Caller, handed to the resource's `after_create` hook
    ///
    /// # Returns
    /// - `Ok(Record)` - Created row, without relations
    /// - `Err(AppError::Validation)` - Invalid input or missing league
    /// - `Err(AppError::Conflict)` - An active row already uses the same natural key
    pub async fn create(
        &self,
        input: R::Create,
        scope: Option<i32>,
        actor: Option<&SessionContext>,
    ) -> Result<Record<R>, AppError> {
        R::validate_create(&input)?;

        let mut active = R::create_model(input);

        if let Some(column) = R::SCOPE {
            if let Some(league_id) = scope {
                active.set(column, league_id.into());
            } else if active.get(column).into_value().is_none() {
                return Err(AppError::Validation(format!(
                    "leagueId is required to create a {}",
                    R::NAME
                )));
            }
        }

        R::check_integrity(self.db, &active).await?;
        self.check_unique(&active, None).await?;

        let repo = ResourceRepository::<R>::new(self.db);
        let model = repo.create(active).await?;

        R::after_create(self.db, &model, actor).await?;

        tracing::info!("Created {} {}", R::NAME, model_id::<R>(&model));

        Ok(Record {
            model,
            relations: Default::default(),
        })
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Record)` - Updated row with relations for `view`
    /// - `Err(AppError::NotFound)` - No active row with `id` matching `filter`
    /// - `Err(AppError::Validation)` - Invalid input
    /// - `Err(AppError::Conflict)` - Update would duplicate another row's natural key
    pub async fn update(
        &self,
        id: i32,
        input: R::Update,
        filter: &Filter<R::Entity>,
        view: View,
    ) -> Result<Record<R>, AppError> {
        R::validate_update(&input)?;

        let repo = ResourceRepository::<R>::new(self.db);
        let stored = repo.find_one(id, filter, &[]).await?;

        let changes = R::update_model(input);
        let merged = merge_changes::<R>(stored.model, &changes);

        R::check_integrity(self.db, &merged).await?;
        self.check_unique(&merged, Some(id)).await?;

        repo.update(id, changes).await?;

        repo.find_one(id, filter, relations_for::<R>(view)).await
    }

    /// Soft-deletes a row once nothing active depends on it.
    ///
    /// # Returns
    /// - `Ok(())` - Row deactivated
    /// - `Err(AppError::NotFound)` - No active row with `id` matching `filter`
    /// - `Err(AppError::Conflict)` - Active dependents exist; the message names every
    ///   blocking category
    pub async fn delete(&self, id: i32, filter: &Filter<R::Entity>) -> Result<(), AppError> {
        let repo = ResourceRepository::<R>::new(self.db);
        let stored = repo.find_one(id, filter, &[]).await?;

        let blocking = R::blocking_dependents(self.db, &stored.model).await?;
        if !blocking.is_empty() {
            return Err(AppError::Conflict(format!(
                "Cannot delete {}: it still has {}",
                R::NAME,
                join_names(&blocking)
            )));
        }

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "No {} found with id {}",
                R::NAME,
                id
            )));
        }

        R::after_delete(self.db, &stored.model).await?;

        tracing::info!("Deleted {} {}", R::NAME, id);

        Ok(())
    }

    /// Rejects `active` when another active row shares one of its natural keys.
    async fn check_unique(
        &self,
        active: &R::ActiveModel,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = ResourceRepository::<R>::new(self.db);

        for key in R::UNIQUE {
            let mut filter = Filter::<R::Entity>::new();
            for &column in key.columns {
                let value = active.get(column).into_value().ok_or_else(|| {
                    InternalError::MissingColumnValue {
                        resource: R::NAME,
                        column: column.as_str(),
                    }
                })?;
                filter.push(column, value);
            }

            if repo.exists(&filter, exclude_id).await? {
                return Err(AppError::Conflict(format!(
                    "Another {} already uses this {}",
                    R::NAME,
                    key.label
                )));
            }
        }

        Ok(())
    }
}

fn model_id<R: Resource>(model: &R::Model) -> i32 {
    match model.get(<R::Entity as TrackedEntity>::ID) {
        sea_orm::Value::Int(Some(id)) => id,
        _ => 0,
    }
}
