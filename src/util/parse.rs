//! Parsing of path parameters, query strings and request bodies.
//!
//! Every failure is a client error (`AppError::Validation`) carrying a message that names the
//! offending parameter.

use std::collections::HashMap;

use sea_orm::Order;
use serde::de::DeserializeOwned;

use crate::{
    data::tracked::TrackedEntity,
    error::AppError,
    model::query::{ListQuery, Pagination, Sort, View, DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    resource::{Column, FieldKind, Resource},
};

const PAGE: &str = "page";
const PAGE_SIZE: &str = "pageSize";
const SORT_BY: &str = "sortBy";
const SORT_ORDER: &str = "sortOrder";
const FULL: &str = "full";

/// Parses an id path parameter.
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::Validation)` - Value is not a 32-bit integer
pub fn parse_id(param: &str, value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::Validation(format!("Invalid {}: '{}' is not a valid id", param, value)))
}

pub fn parse_u64(name: &str, value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|_| AppError::Validation(format!("Invalid {}: '{}' is not a number", name, value)))
}

/// Accepts `true` and `false`, case-insensitive.
pub fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(AppError::Validation(format!(
            "Invalid {}: '{}' must be true or false",
            name, value
        ))),
    }
}

/// Reads the `full` flag. Absent means basic view.
pub fn parse_view(query: &HashMap<String, String>) -> Result<View, AppError> {
    match query.get(FULL) {
        Some(value) if parse_bool(FULL, value)? => Ok(View::Full),
        _ => Ok(View::Basic),
    }
}

/// Parses a JSON request body into `T`.
///
/// The body must be a JSON object; arrays would otherwise fill struct fields by position.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))?;
    if !value.is_object() {
        return Err(AppError::Validation(
            "Invalid request body: expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e)))
}

/// Parses the query string of a list request for resource `R`.
///
/// `page` and `pageSize` default to 1 and 20 and are range-checked by the service. Keys
/// matching a filterable field of `R` become typed equality filters; unknown keys are ignored.
pub fn parse_list_query<R: Resource>(
    query: &HashMap<String, String>,
) -> Result<ListQuery<R::Entity>, AppError> {
    let mut list = ListQuery::<R::Entity>::default();

    list.pagination = Pagination {
        page: query
            .get(PAGE)
            .map(|v| parse_u64(PAGE, v))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE),
        page_size: query
            .get(PAGE_SIZE)
            .map(|v| parse_u64(PAGE_SIZE, v))
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_SIZE),
    };

    let order = match query.get(SORT_ORDER) {
        None => Order::Asc,
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "asc" => Order::Asc,
            "desc" => Order::Desc,
            _ => {
                return Err(AppError::Validation(format!(
                    "Invalid {}: '{}' must be asc or desc",
                    SORT_ORDER, value
                )))
            }
        },
    };

    let column = match query.get(SORT_BY) {
        None => <R::Entity as TrackedEntity>::ID,
        Some(field) => sort_column::<R>(field).ok_or_else(|| {
            AppError::Validation(format!("Cannot sort {} by '{}'", R::NAME, field))
        })?,
    };
    list.sort = Sort::new(column, order);

    list.view = parse_view(query)?;

    for field in R::FILTERS {
        let Some(raw) = query.get(field.name) else {
            continue;
        };

        match field.kind {
            FieldKind::Int => {
                let value = raw.parse::<i32>().map_err(|_| {
                    AppError::Validation(format!(
                        "Invalid {}: '{}' is not an integer",
                        field.name, raw
                    ))
                })?;
                list.filter.push(field.column, value);
            }
            FieldKind::Bool => list.filter.push(field.column, parse_bool(field.name, raw)?),
            FieldKind::Text => list.filter.push(field.column, raw.clone()),
        }
    }

    Ok(list)
}

fn sort_column<R: Resource>(field: &str) -> Option<Column<R>> {
    match field {
        "id" => Some(<R::Entity as TrackedEntity>::ID),
        "createdAt" => Some(<R::Entity as TrackedEntity>::CREATED_AT),
        "updatedAt" => Some(<R::Entity as TrackedEntity>::UPDATED_AT),
        _ => R::FILTERS
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.column),
    }
}
