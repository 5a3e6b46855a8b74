pub use super::league::Entity as League;
pub use super::league_match::Entity as LeagueMatch;
pub use super::league_user::Entity as LeagueUser;
pub use super::pokemon::Entity as Pokemon;
pub use super::pokemon_move::Entity as PokemonMove;
pub use super::pokemon_type::Entity as PokemonType;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::type_effectiveness::Entity as TypeEffectiveness;
pub use super::user::Entity as User;
