use crate::{
    data::league_user::LeagueUserRepository,
    error::AppError,
    middleware::auth::SessionContext,
    model::{
        league::CreateLeagueDto,
        league_match::CreateMatchDto,
        pokemon::{CreatePokemonDto, UpdatePokemonDto},
        pokemon_type::{CreatePokemonTypeDto, UpdatePokemonTypeDto},
        query::{Filter, Pagination, Sort, View},
        season::{CreateSeasonDto, UpdateSeasonDto},
        team::CreateTeamDto,
    },
    resource::{
        LeagueResource, MatchResource, PokemonResource, PokemonTypeResource, SeasonResource,
        TeamResource, UserResource,
    },
    service::resource::ResourceService,
};
use test_utils::{builder::TestBuilder, factory};


fn pokemon_input(dex_id: i32, name: &str, primary_type_id: i32) -> CreatePokemonDto {
    CreatePokemonDto {
        dex_id,
        name: name.to_string(),
        hp: 45,
        attack: 49,
        defense: 49,
        special_attack: 65,
        special_defense: 65,
        speed: 45,
        primary_type_id,
        secondary_type_id: None,
    }
}
