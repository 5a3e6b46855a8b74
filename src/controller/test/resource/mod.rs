use super::*;
use crate::resource::{
    LeagueResource, MoveResource, PokemonResource, PokemonTypeResource, TeamResource,
};

mod create;
mod list;
mod nested;
mod read;
mod update;

fn pokemon_body(primary_type_id: i32) -> Value {
    json!({
        "dexId": 25,
        "name": "Pikachu",
        "hp": 35,
        "attack": 55,
        "defense": 40,
        "specialAttack": 50,
        "specialDefense": 50,
        "speed": 90,
        "primaryTypeId": primary_type_id,
    })
}
