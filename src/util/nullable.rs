//! Deserialization of nullable fields in partial updates.
//!
//! Used as `#[serde(default, deserialize_with = "crate::util::nullable::deserialize")]` on an
//! `Option<Option<T>>` field:
//!
//! - field absent → `None` (leave unchanged)
//! - field `null` → `Some(None)` (clear)
//! - field value → `Some(Some(value))`

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
