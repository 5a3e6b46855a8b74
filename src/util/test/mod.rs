use std::collections::HashMap;

use crate::{
    error::AppError,
    model::{league::UpdateLeagueDto, pokemon::CreatePokemonDto, query::View},
    resource::{MoveResource, UserResource},
    util::{parse, validate},
};


fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
