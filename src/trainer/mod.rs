/// Trainer HTTP endpoints module
pub mod endpoints;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::pokemon::Pokemon;

/// Errors from roster lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// The named trainer has no registered Pokemon
    #[error("Trainer '{0}' has no pokemon")]
    NoPokemon(String),

    /// Both sides of a duel resolved to the same trainer
    #[error("Trainer '{0}' cannot fight themselves")]
    SameTrainer(String),
}

/// The trainer-to-Pokemon registry: one Pokemon per trainer name.
///
/// Owned by whoever runs the battles (the server manages a single instance)
/// and passed to the components that need lookup; never process-global.
#[derive(Serialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Roster {
    entries: HashMap<String, Pokemon>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a Pokemon under a trainer's name. The association is
    /// exclusive: assigning again replaces (and returns) the previous one.
    pub fn assign(&mut self, trainer: impl Into<String>, pokemon: Pokemon) -> Option<Pokemon> {
        self.entries.insert(trainer.into(), pokemon)
    }

    /// The Pokemon registered under the trainer's name, if any
    pub fn get(&self, trainer: &str) -> Option<&Pokemon> {
        self.entries.get(trainer)
    }

    pub fn get_mut(&mut self, trainer: &str) -> Option<&mut Pokemon> {
        self.entries.get_mut(trainer)
    }

    /// Removes a trainer's Pokemon from the registry
    pub fn release(&mut self, trainer: &str) -> Option<Pokemon> {
        self.entries.remove(trainer)
    }

    /// Borrows two distinct trainers' Pokemon mutably at once, for move
    /// resolution between them
    pub fn duel_mut(
        &mut self,
        attacker: &str,
        defender: &str,
    ) -> Result<(&mut Pokemon, &mut Pokemon), RosterError> {
        if attacker == defender {
            return Err(RosterError::SameTrainer(attacker.to_string()));
        }

        let mut first = None;
        let mut second = None;
        for (name, pokemon) in self.entries.iter_mut() {
            if name == attacker {
                first = Some(pokemon);
            } else if name == defender {
                second = Some(pokemon);
            }
        }

        match (first, second) {
            (Some(a), Some(d)) => Ok((a, d)),
            (None, _) => Err(RosterError::NoPokemon(attacker.to_string())),
            (_, None) => Err(RosterError::NoPokemon(defender.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
