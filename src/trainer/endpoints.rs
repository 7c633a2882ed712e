use rocket::State;
use tokio::sync::RwLock;

use crate::{
    json::{JsonResult, JsonStatus},
    pokeapi::PokeApiClient,
    pokemon::Pokemon,
    trainer::Roster,
};

/// Endpoint for listing every trainer and the Pokemon registered to them.
#[get("/trainers")]
pub async fn get_trainers<'a>(roster: &State<RwLock<Roster>>) -> JsonResult<'a> {
    info!("Request to /api/trainers");

    Ok(JsonStatus::data_owned(roster.read().await.clone()))
}

/// Endpoint for catching a Pokemon: fetches species data, rolls individual
/// values, derives stats for the requested level and registers the result
/// under the trainer's name, replacing any Pokemon it held before.
#[post("/trainer_pokemons/<trainer_name>/<species>?<level>")]
pub async fn catch_pokemon<'a>(
    trainer_name: String,
    species: String,
    level: Option<u32>,
    api: &State<PokeApiClient>,
    roster: &State<RwLock<Roster>>,
) -> JsonResult<'a> {
    info!(
        "Request to /api/trainer_pokemons/{}/{}",
        trainer_name, species
    );

    if trainer_name.len() > 30 {
        return Err(JsonStatus::error("Name is too long"));
    }

    if trainer_name.is_empty() {
        return Err(JsonStatus::error("Name cannot be empty"));
    }

    let level = level.unwrap_or(5);
    if level < 1 {
        return Err(JsonStatus::error("Level must be at least 1"));
    }

    let species = match api
        .fetch_species(&species)
        .await
        .map_err(JsonStatus::from_anyhow)?
    {
        Some(species) => species,
        None => {
            return Err(JsonStatus::not_found(format!(
                "Species '{}' not found",
                species
            )));
        }
    };

    // thread rng must not live across an await, so scope it
    let pokemon = {
        let mut rng = rand::thread_rng();
        Pokemon::from_species(&species, level, &mut rng)
    };

    // replaces whatever the trainer held before; the association is exclusive
    let _previous = roster.write().await.assign(trainer_name, pokemon.clone());

    Ok(JsonStatus::data_owned(pokemon))
}

/// Endpoint for getting the Pokemon registered under a trainer's name.
#[get("/trainer_pokemons/<trainer_name>")]
pub async fn get_trainer_pokemon<'a>(
    trainer_name: String,
    roster: &State<RwLock<Roster>>,
) -> JsonResult<'a> {
    info!("Request to /api/trainer_pokemons/{}", trainer_name);

    match roster.read().await.get(&trainer_name) {
        Some(pokemon) => Ok(JsonStatus::data_owned(pokemon.clone())),
        None => Err(JsonStatus::not_found(format!(
            "Trainer '{}' has no pokemon",
            trainer_name
        ))),
    }
}

/// Endpoint for releasing a trainer's Pokemon.
#[delete("/trainer_pokemons/<trainer_name>")]
pub async fn release_pokemon<'a>(
    trainer_name: String,
    roster: &State<RwLock<Roster>>,
) -> JsonResult<'a> {
    info!("Request to /api/trainer_pokemons/{}", trainer_name);

    match roster.write().await.release(&trainer_name) {
        Some(_) => Ok(JsonStatus::ok::<String>(None)),
        None => Err(JsonStatus::not_found(format!(
            "Trainer '{}' has no pokemon",
            trainer_name
        ))),
    }
}

/// Endpoint for changing a Pokemon's level; every stat value is re-derived,
/// individual values stay as rolled at catch time.
#[post("/trainer_pokemons/<trainer_name>/level/<level>")]
pub async fn set_pokemon_level<'a>(
    trainer_name: String,
    level: u32,
    roster: &State<RwLock<Roster>>,
) -> JsonResult<'a> {
    info!(
        "Request to /api/trainer_pokemons/{}/level/{}",
        trainer_name, level
    );

    if level < 1 {
        return Err(JsonStatus::error("Level must be at least 1"));
    }

    let mut roster = roster.write().await;
    match roster.get_mut(&trainer_name) {
        Some(pokemon) => {
            pokemon.set_level(level);
            Ok(JsonStatus::data_owned(pokemon.clone()))
        }
        None => Err(JsonStatus::not_found(format!(
            "Trainer '{}' has no pokemon",
            trainer_name
        ))),
    }
}
