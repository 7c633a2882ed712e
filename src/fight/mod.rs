use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pokemon::{
    Pokemon,
    moves::{Move, MoveKind, StatChange, Target},
    stats::StatName,
};

/// HTTP endpoints for resolving moves between registered Pokemon
pub mod endpoints;

/// Special moves punch through with a softer defense divisor than physical
/// ones. The asymmetry is an intentional balance choice, kept as-is.
const SPECIAL_DEFENSE_DIVISOR: f64 = 1.8;
const PHYSICAL_DEFENSE_DIVISOR: f64 = 2.0;

/// Battle log entries produced by resolving a single move
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "event_name", content = "event_data")]
pub enum FightEvent {
    /// A damaging move connected
    Hit {
        /// The name of the attacking Pokemon
        attacker: String,
        /// The name of the defending Pokemon
        defender: String,
        /// The amount of hp actually lost
        damage: u32,
        /// The amount of hp left on the defending Pokemon
        hp_left: u32,
    },
    /// A stat-changing move adjusted one stat
    StatChanged {
        /// The name of the Pokemon whose stat changed
        pokemon: String,
        /// The stat that changed
        stat: StatName,
        /// The adjustment that was applied
        delta: i32,
        /// The stat value after the change
        value: u32,
    },
    /// A Pokemon's hp reached 0
    Fainted {
        /// The name of the Pokemon that fainted
        pokemon: String,
    },
}

/// Errors from applying a move to a pair of Pokemon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move references a stat its target does not carry; nothing is
    /// applied and no stat entry is created
    #[error("{pokemon} has no '{stat}' stat")]
    UnknownStat { pokemon: String, stat: StatName },
}

/// Resolves one move between two Pokemon and returns the battle events it
/// produced.
///
/// Both participants are explicit parameters; nothing here reaches for
/// shared or ambient state. A failed validation applies no changes at all.
pub fn resolve_move(
    attacker: &mut Pokemon,
    defender: &mut Pokemon,
    mv: &Move,
) -> Result<Vec<FightEvent>, MoveError> {
    match &mv.kind {
        MoveKind::StatChange(changes) => apply_stat_changes(attacker, defender, changes),
        MoveKind::Damage => apply_damage(attacker, defender, mv),
    }
}

/// Applies the change list in order, so later entries observe earlier ones.
///
/// Every (target, stat) pair is validated before anything is mutated; a move
/// naming an unknown stat fails without partial application. Stat values
/// saturate at 0 instead of going negative.
fn apply_stat_changes(
    attacker: &mut Pokemon,
    defender: &mut Pokemon,
    changes: &[StatChange],
) -> Result<Vec<FightEvent>, MoveError> {
    for change in changes {
        let target = match change.target {
            Target::Attacker => &*attacker,
            Target::Defender => &*defender,
        };
        if target.stat(change.stat).is_none() {
            return Err(MoveError::UnknownStat {
                pokemon: target.name.clone(),
                stat: change.stat,
            });
        }
    }

    let mut events = Vec::with_capacity(changes.len());

    for change in changes {
        let target = match change.target {
            Target::Attacker => &mut *attacker,
            Target::Defender => &mut *defender,
        };
        let name = target.name.clone();

        let Some(stat) = target.stat_mut(change.stat) else {
            return Err(MoveError::UnknownStat {
                pokemon: name,
                stat: change.stat,
            });
        };

        stat.value = stat.value.saturating_add_signed(change.delta);

        events.push(FightEvent::StatChanged {
            pokemon: name,
            stat: change.stat,
            delta: change.delta,
            value: stat.value,
        });
    }

    Ok(events)
}

/// Resolves a damaging move:
/// `raw = (power / 10) * atk - def / divisor`, subtracted from the
/// defender's hp with a floor of 0.
///
/// Special moves use the special-attack/special-defense pairing with a
/// divisor of 1.8; physical moves use attack/defense with 2.0.
fn apply_damage(
    attacker: &mut Pokemon,
    defender: &mut Pokemon,
    mv: &Move,
) -> Result<Vec<FightEvent>, MoveError> {
    let (atk_name, def_name, divisor) = if mv.special {
        (
            StatName::SpecialAttack,
            StatName::SpecialDefense,
            SPECIAL_DEFENSE_DIVISOR,
        )
    } else {
        (StatName::Attack, StatName::Defense, PHYSICAL_DEFENSE_DIVISOR)
    };

    let atk = attacker
        .stat_value(atk_name)
        .ok_or_else(|| MoveError::UnknownStat {
            pokemon: attacker.name.clone(),
            stat: atk_name,
        })? as f64;

    let def = defender
        .stat_value(def_name)
        .ok_or_else(|| MoveError::UnknownStat {
            pokemon: defender.name.clone(),
            stat: def_name,
        })? as f64;

    let hp_before = defender
        .stat_value(StatName::Hp)
        .ok_or_else(|| MoveError::UnknownStat {
            pokemon: defender.name.clone(),
            stat: StatName::Hp,
        })?;

    let raw = (mv.power as f64 / 10.0) * atk - def / divisor;

    let hp_left = (hp_before as f64 - raw).max(0.0).round() as u32;

    let defender_name = defender.name.clone();
    let Some(hp_stat) = defender.stat_mut(StatName::Hp) else {
        return Err(MoveError::UnknownStat {
            pokemon: defender_name,
            stat: StatName::Hp,
        });
    };
    hp_stat.value = hp_left;

    let mut events = vec![FightEvent::Hit {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        damage: hp_before.saturating_sub(hp_left),
        hp_left,
    }];

    if hp_left == 0 {
        events.push(FightEvent::Fainted {
            pokemon: defender.name.clone(),
        });
    }

    Ok(events)
}
