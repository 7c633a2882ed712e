use rocket::{State, serde::json::Json};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::{
    fight::{self, FightEvent},
    json::{JsonResult, JsonStatus},
    pokemon::{Pokemon, moves::Move},
    trainer::Roster,
};

/// What a resolved move looks like on the wire: the battle events plus both
/// participants with their updated stats
#[derive(Serialize, Clone, Debug)]
pub struct MoveReport {
    pub events: Vec<FightEvent>,
    pub attacker: Pokemon,
    pub defender: Pokemon,
}

/// Endpoint for resolving one move between two trainers' Pokemon.
#[post("/use_move/<attacker_trainer>/<defender_trainer>", data = "<mv>")]
pub async fn use_move<'a>(
    attacker_trainer: String,
    defender_trainer: String,
    mv: Json<Move>,
    roster: &State<RwLock<Roster>>,
) -> JsonResult<'a> {
    info!(
        "Request to /api/use_move/{}/{}",
        attacker_trainer, defender_trainer
    );

    let mut roster = roster.write().await;

    let (attacker, defender) = roster
        .duel_mut(&attacker_trainer, &defender_trainer)
        .map_err(JsonStatus::error)?;

    let events = fight::resolve_move(attacker, defender, &mv).map_err(JsonStatus::error)?;

    Ok(JsonStatus::data_owned(MoveReport {
        events,
        attacker: attacker.clone(),
        defender: defender.clone(),
    }))
}
