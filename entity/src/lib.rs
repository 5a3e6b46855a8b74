//! SeaORM entity definitions.
//!
//! One module per table. Every table carries the same bookkeeping columns: an
//! auto-increment `id`, an `is_active` soft-delete flag and `created_at` /
//! `updated_at` timestamps.

pub mod prelude;

pub mod league;
pub mod league_match;
pub mod league_user;
pub mod pokemon;
pub mod pokemon_move;
pub mod pokemon_type;
pub mod season;
pub mod team;
pub mod type_effectiveness;
pub mod user;
