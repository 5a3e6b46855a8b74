//! Wire shapes: response DTOs, create/update inputs and list query types.
//!
//! All JSON uses camelCase keys. Create inputs reject unknown fields, update inputs accept
//! partial bodies and distinguish an absent nullable field from an explicit `null`.

pub mod api;
pub mod league;
pub mod league_match;
pub mod league_user;
pub mod pokemon;
pub mod pokemon_move;
pub mod pokemon_type;
pub mod query;
pub mod season;
pub mod team;
pub mod type_effectiveness;
pub mod user;
