//! League and Pokémon reference data REST backend.
//!
//! Every table is exposed through the same generic stack:
//!
//! - **Controller** (`controller/`) - HTTP handlers, query parsing, authorization and projection
//! - **Service** (`service/`) - Business rules: pagination, uniqueness, referential guards
//! - **Data** (`data/`) - Soft-delete aware SeaORM queries
//! - **Resource** (`resource/`) - Per-table configuration plugged into the layers above
//! - **Model** (`model/`) - DTOs, input shapes and query types
//! - **Middleware** (`middleware/`) - Session access and the permission chain
//! - **Error** (`error/`) - Application errors and their HTTP mapping
//!
//! A request flows router → session layer → controller → permission chain → service →
//! repository, and back through the controller which projects the result into JSON.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod resource;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
