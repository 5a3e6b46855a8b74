//! Factories for seeding test rows.
//!
//! Every table has a module with a builder (`XFactory::new(db, ..).field(..).build()`) and a
//! `create_*` shortcut that inserts a row with defaults. Required parents are passed in
//! explicitly; `helpers` bundles the common hierarchies.
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db).admin(true).build().await?;
//! let (league, season) = factory::helpers::create_league_with_season(&db).await?;
//! let team = factory::team::create_team(&db, &season, user.id).await?;
//! ```

pub mod helpers;
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

pub use league::create_league;
pub use league_match::create_match;
pub use league_user::{create_member, create_moderator};
pub use pokemon::create_pokemon;
pub use pokemon_move::create_move;
pub use pokemon_type::create_type;
pub use season::create_season;
pub use team::create_team;
pub use type_effectiveness::create_type_effectiveness;
pub use user::create_user;
