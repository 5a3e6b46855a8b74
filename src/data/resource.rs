use std::{collections::BTreeMap, marker::PhantomData};

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, IntoCondition},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    Iterable, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    data::tracked::TrackedEntity,
    error::AppError,
    model::query::{Filter, Page, Pagination, Sort},
    resource::Resource,
};

/// A row together with the relations loaded for it, keyed by relation name.
pub struct Record<R: Resource> {
    pub model: R::Model,
    pub relations: BTreeMap<&'static str, serde_json::Value>,
}

/// Soft-delete aware data access for any [`Resource`].
///
/// Every read only sees active rows. Deletes flip `is_active` instead of removing the row.
pub struct ResourceRepository<'a, R: Resource> {
    db: &'a DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R: Resource> ResourceRepository<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _resource: PhantomData,
        }
    }

    /// All active rows matching `filter`, without pagination.
    pub async fn find_all(
        &self,
        filter: &Filter<R::Entity>,
        sort: &Sort<R::Entity>,
        relations: &[&'static str],
    ) -> Result<Vec<Record<R>>, AppError> {
        let select = sort.apply(filter.apply(R::Entity::find_active()));
        let models = select.all(self.db).await?;

        self.with_relations(models, relations).await
    }

    /// One page of active rows matching `filter`.
    ///
    /// # Arguments
    /// - `pagination` - 1-based page and page size, both already validated to be at least 1
    ///
    /// # Returns
    /// - `Ok(Page)` - Rows of the requested page and the total count of matching rows
    /// - `Err(AppError)` - Database error or relation loading failure
    pub async fn find_page(
        &self,
        filter: &Filter<R::Entity>,
        sort: &Sort<R::Entity>,
        relations: &[&'static str],
        pagination: Pagination,
    ) -> Result<Page<Record<R>>, AppError> {
        let select = sort.apply(filter.apply(R::Entity::find_active()));
        let paginator = select.paginate(self.db, pagination.page_size);

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(pagination.page - 1).await?;

        Ok(Page {
            data: self.with_relations(models, relations).await?,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
        })
    }

    /// The active row with `id` that also matches `filter`.
    ///
    /// # Returns
    /// - `Ok(Record)` - Row and requested relations
    /// - `Err(AppError::NotFound)` - No such active row
    pub async fn find_one(
        &self,
        id: i32,
        filter: &Filter<R::Entity>,
        relations: &[&'static str],
    ) -> Result<Record<R>, AppError> {
        let model = self.find_model(id, filter).await?;
        let relations = self.load_relations(&model, relations).await?;

        Ok(Record { model, relations })
    }

    async fn find_model(&self, id: i32, filter: &Filter<R::Entity>) -> Result<R::Model, AppError> {
        filter
            .apply(R::Entity::find_active())
            .filter(<R::Entity as TrackedEntity>::ID.eq(id))
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No {} found with id {}", R::NAME, id)))
    }

    /// Whether an active row other than `exclude_id` matches `filter`.
    pub async fn exists(
        &self,
        filter: &Filter<R::Entity>,
        exclude_id: Option<i32>,
    ) -> Result<bool, AppError> {
        let mut select = filter.apply(R::Entity::find_active());
        if let Some(id) = exclude_id {
            select = select.filter(<R::Entity as TrackedEntity>::ID.ne(id));
        }

        Ok(select.count(self.db).await? > 0)
    }

    /// Inserts a new active row stamped with the current time.
    pub async fn create(&self, mut active: R::ActiveModel) -> Result<R::Model, AppError> {
        let now = Utc::now();
        active.set(<R::Entity as TrackedEntity>::IS_ACTIVE, true.into());
        active.set(<R::Entity as TrackedEntity>::CREATED_AT, now.into());
        active.set(<R::Entity as TrackedEntity>::UPDATED_AT, now.into());

        Ok(active.insert(self.db).await?)
    }

    /// Applies the columns `Set` in `changes` to the stored row and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Model)` - Row after the update
    /// - `Err(AppError::NotFound)` - No active row with `id`
    pub async fn update(&self, id: i32, changes: R::ActiveModel) -> Result<R::Model, AppError> {
        let stored = self.find_model(id, &Filter::new()).await?;

        let mut active = merge_changes::<R>(stored, &changes);
        active.set(<R::Entity as TrackedEntity>::UPDATED_AT, Utc::now().into());

        Ok(active.update(self.db).await?)
    }

    /// Soft-deletes the row with `id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Row was active and is now deactivated
    /// - `Ok(false)` - No active row with `id`
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = R::Entity::update_many()
            .col_expr(<R::Entity as TrackedEntity>::IS_ACTIVE, Expr::value(false))
            .col_expr(<R::Entity as TrackedEntity>::UPDATED_AT, Expr::value(Utc::now()))
            .filter(<R::Entity as TrackedEntity>::ID.eq(id))
            .filter(<R::Entity as TrackedEntity>::IS_ACTIVE.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_relations(
        &self,
        models: Vec<R::Model>,
        relations: &[&'static str],
    ) -> Result<Vec<Record<R>>, AppError> {
        let mut records = Vec::with_capacity(models.len());
        for model in models {
            let relations = self.load_relations(&model, relations).await?;
            records.push(Record { model, relations });
        }

        Ok(records)
    }

    async fn load_relations(
        &self,
        model: &R::Model,
        relations: &[&'static str],
    ) -> Result<BTreeMap<&'static str, serde_json::Value>, AppError> {
        let mut loaded = BTreeMap::new();
        for &name in relations {
            loaded.insert(name, R::load_relation(self.db, model, name).await?);
        }

        Ok(loaded)
    }
}

/// Copies every column `Set` in `changes` onto `stored`, leaving the others untouched.
pub fn merge_changes<R: Resource>(stored: R::Model, changes: &R::ActiveModel) -> R::ActiveModel {
    let mut active: R::ActiveModel = stored.into_active_model();
    for column in <R::Entity as EntityTrait>::Column::iter() {
        if let ActiveValue::Set(value) = changes.get(column) {
            active.set(column, value);
        }
    }

    active
}

/// Whether any active row of `R` satisfies `condition`.
pub async fn has_active<R: Resource>(
    db: &DatabaseConnection,
    condition: impl IntoCondition,
) -> Result<bool, AppError> {
    let count = R::Entity::find_active()
        .filter(condition)
        .count(db)
        .await?;

    Ok(count > 0)
}

/// Active rows of `R` satisfying `condition`, projected with `R`'s basic DTO, ordered by id.
pub async fn related_many<R: Resource>(
    db: &DatabaseConnection,
    condition: impl IntoCondition,
) -> Result<serde_json::Value, AppError> {
    let models = R::Entity::find_active()
        .filter(condition)
        .order_by_asc(<R::Entity as TrackedEntity>::ID)
        .all(db)
        .await?;

    let dtos: Vec<R::Dto> = models.iter().map(|model| R::to_dto(model)).collect();

    Ok(serde_json::to_value(dtos)?)
}

/// The active row of `R` with `id` projected with `R`'s basic DTO, or `null` when `id` is
/// absent or the row is inactive.
pub async fn related_one<R: Resource>(
    db: &DatabaseConnection,
    id: Option<i32>,
) -> Result<serde_json::Value, AppError> {
    let Some(id) = id else {
        return Ok(serde_json::Value::Null);
    };

    let model = R::Entity::find_active()
        .filter(<R::Entity as TrackedEntity>::ID.eq(id))
        .one(db)
        .await?;

    match model {
        Some(model) => Ok(serde_json::to_value(R::to_dto(&model))?),
        None => Ok(serde_json::Value::Null),
    }
}
