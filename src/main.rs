use std::str::FromStr;

mod json;
use crate::json::JsonResult;
use json::JsonStatus;
use rocket_cors::{AllowedMethods, AllowedOrigins, CorsOptions};
use tokio::sync::RwLock;

mod fight;
mod pokeapi;
mod pokemon;
mod trainer;

#[cfg(test)]
mod tests;

use pokeapi::PokeApiClient;
use trainer::Roster;

#[macro_use]
extern crate rocket;

#[macro_use]
extern crate log;

fn make_cors() -> CorsOptions {
    let allowed_methods: AllowedMethods = ["Get", "Post", "Delete"]
        .iter()
        .map(|s| FromStr::from_str(s).unwrap())
        .collect();

    CorsOptions::default()
        // or use .allowed_origins(AllowedOrigins::some_exact(&["http://localhost:3000"])) for more restriction
        // for react frontend
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(allowed_methods)
        .allow_credentials(true)
}

#[launch]
fn rocket() -> _ {
    let _ = env_logger::try_init();

    let cors = make_cors().to_cors().expect("Error creating CORS fairing");

    rocket::build()
        .attach(cors)
        .manage(PokeApiClient::from_config())
        .manage(RwLock::new(Roster::new()))
        .mount(
            "/api",
            routes![
                index,
                pokeapi::endpoints::get_species,
                trainer::endpoints::get_trainers,
                trainer::endpoints::catch_pokemon,
                trainer::endpoints::get_trainer_pokemon,
                trainer::endpoints::release_pokemon,
                trainer::endpoints::set_pokemon_level,
                fight::endpoints::use_move,
            ],
        )
}

#[get("/")]
pub async fn index<'a>() -> JsonResult<'a> {
    info!("Request to /api");
    Ok(JsonStatus::ok::<String>(None))
}
