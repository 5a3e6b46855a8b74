//! Database access.
//!
//! `ResourceRepository` covers the CRUD surface of every table; the dedicated repositories
//! answer the lookups the permission chain needs to build a session context.

pub mod league_user;
pub mod resource;
pub mod tracked;
pub mod user;
