use sea_orm::{ColumnTrait, EntityTrait, IdenStatic, Order, QueryFilter, QueryOrder, Select};
use serde::Serialize;

use crate::data::tracked::TrackedEntity;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Which shape a response takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    /// The resource's own fields.
    #[default]
    Basic,
    /// Basic fields plus every declared relation.
    Full,
}

/// Equality conditions on columns of `E`, combined with AND.
pub struct Filter<E: EntityTrait> {
    conditions: Vec<(E::Column, sea_orm::Value)>,
}

impl<E: EntityTrait> Filter<E> {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn eq(mut self, column: E::Column, value: impl Into<sea_orm::Value>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: E::Column, value: impl Into<sea_orm::Value>) {
        self.conditions.push((column, value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn apply(&self, mut select: Select<E>) -> Select<E> {
        for (column, value) in &self.conditions {
            select = select.filter(column.eq(value.clone()));
        }
        select
    }
}

impl<E: EntityTrait> Default for Filter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> Clone for Filter<E> {
    fn clone(&self) -> Self {
        Self {
            conditions: self.conditions.clone(),
        }
    }
}

/// Ordering of a listing. The id is always appended as tiebreaker.
pub struct Sort<E: EntityTrait> {
    pub column: E::Column,
    pub order: Order,
}

impl<E: TrackedEntity> Sort<E> {
    pub fn new(column: E::Column, order: Order) -> Self {
        Self { column, order }
    }

    pub fn apply(&self, select: Select<E>) -> Select<E> {
        let select = select.order_by(self.column, self.order.clone());

        if self.column.as_str() == E::ID.as_str() {
            select
        } else {
            select.order_by_asc(E::ID)
        }
    }
}

impl<E: TrackedEntity> Default for Sort<E> {
    fn default() -> Self {
        Self::new(E::ID, Order::Asc)
    }
}

/// 1-based page selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results.
///
/// `total` counts every matching row, not just the ones on this page.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        Ok(Page {
            data: self.data.into_iter().map(f).collect::<Result<Vec<_>, E>>()?,
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        })
    }
}

/// Parsed query string of a list request.
pub struct ListQuery<E: TrackedEntity> {
    pub filter: Filter<E>,
    pub sort: Sort<E>,
    pub pagination: Pagination,
    pub view: View,
}

impl<E: TrackedEntity> Default for ListQuery<E> {
    fn default() -> Self {
        Self {
            filter: Filter::new(),
            sort: Sort::default(),
            pagination: Pagination::default(),
            view: View::Basic,
        }
    }
}
