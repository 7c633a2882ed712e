/// Stat names and stat derivation
pub mod stats;

/// Battle move model
pub mod moves;

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::pokeapi::Species;
use stats::{Stat, StatName};

/// A caught Pokemon with its derived battle stats
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Pokemon {
    /// The species name of the Pokemon
    pub name: String,

    /// The numeric PokeAPI species id
    pub species_id: u32,

    /// URL of the official artwork sprite, when the data source has one
    pub sprite_url: Option<String>,

    /// The type names of the species
    pub types: Vec<String>,

    /// The ability names of the species
    pub abilities: Vec<String>,

    /// Current level; changed through `set_level` so stats stay in sync
    level: u32,

    /// Per-stat values, keyed by stat name
    stats: BTreeMap<StatName, Stat>,
}

impl Pokemon {
    /// Creates a Pokemon from species data.
    ///
    /// Rolls one individual value per stat the species reports; the rolls
    /// happen here, once, and are held fixed for the Pokemon's lifetime.
    /// Effort defaults to 0 for stats the data source reports none for.
    ///
    /// Panics when `level` is 0.
    pub fn from_species<R: Rng>(species: &Species, level: u32, rng: &mut R) -> Self {
        assert!(level >= 1, "pokemon level must be at least 1");

        let mut stats = BTreeMap::new();
        for (&name, &base) in &species.base_stats {
            let effort = species.effort_values.get(&name).copied().unwrap_or(0);
            let iv = stats::roll_iv(rng);
            stats.insert(name, Stat::new(base, effort, iv, level, name == StatName::Hp));
        }

        Pokemon {
            name: species.name.clone(),
            species_id: species.id,
            sprite_url: species.sprite_url.clone(),
            types: species.types.clone(),
            abilities: species.abilities.clone(),
            level,
            stats,
        }
    }

    /// Constructs a Pokemon with explicit stats, bypassing the data source
    #[cfg(test)]
    pub(crate) fn with_stats(
        name: impl Into<String>,
        level: u32,
        stats: BTreeMap<StatName, Stat>,
    ) -> Self {
        Pokemon {
            name: name.into(),
            species_id: 0,
            sprite_url: None,
            types: vec![],
            abilities: vec![],
            level,
            stats,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Changes the level and re-derives every stat value from the stored
    /// base/effort/iv inputs. Individual values are kept as rolled.
    ///
    /// Panics when `level` is 0.
    pub fn set_level(&mut self, level: u32) {
        assert!(level >= 1, "pokemon level must be at least 1");

        self.level = level;
        for (name, stat) in self.stats.iter_mut() {
            stat.recompute(level, *name == StatName::Hp);
        }
    }

    /// The full stat of the given name, if this Pokemon has it
    pub fn stat(&self, name: StatName) -> Option<&Stat> {
        self.stats.get(&name)
    }

    /// The current in-battle value of the given stat
    pub fn stat_value(&self, name: StatName) -> Option<u32> {
        self.stats.get(&name).map(|s| s.value)
    }

    /// Mutable access for move resolution; missing stats are reported by the
    /// resolver, never created on the fly
    pub(crate) fn stat_mut(&mut self, name: StatName) -> Option<&mut Stat> {
        self.stats.get_mut(&name)
    }

    /// All stats, keyed by name
    pub fn stats(&self) -> &BTreeMap<StatName, Stat> {
        &self.stats
    }

    /// Whether this Pokemon's hp has dropped to 0
    pub fn is_fainted(&self) -> bool {
        self.stat_value(StatName::Hp) == Some(0)
    }
}
