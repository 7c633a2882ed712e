use rocket::State;

use crate::{
    json::{JsonResult, JsonStatus},
    pokeapi::PokeApiClient,
};

/// Endpoint for looking up species data by name or numeric id.
#[get("/species/<identifier>")]
pub async fn get_species<'a>(identifier: String, api: &State<PokeApiClient>) -> JsonResult<'a> {
    info!("Request to /api/species/{}", identifier);

    let species = api
        .fetch_species(&identifier)
        .await
        .map_err(JsonStatus::from_anyhow)?;

    match species {
        Some(species) => Ok(JsonStatus::data_owned(species)),
        None => Err(JsonStatus::not_found(format!(
            "Species '{}' not found",
            identifier
        ))),
    }
}
