use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The six battle stats tracked per Pokemon, named the way PokeAPI names them
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StatName {
    /// Hit points; the only stat with a level-dependent derivation offset
    Hp,
    /// Physical attack power
    Attack,
    /// Physical defense power
    Defense,
    /// Attack power of special moves
    SpecialAttack,
    /// Defense against special moves
    SpecialDefense,
    /// Determines turn order in battle
    Speed,
}

impl StatName {
    /// All stat names, in PokeAPI order
    pub const ALL: [StatName; 6] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hp" => Ok(StatName::Hp),
            "attack" => Ok(StatName::Attack),
            "defense" => Ok(StatName::Defense),
            "special-attack" => Ok(StatName::SpecialAttack),
            "special-defense" => Ok(StatName::SpecialDefense),
            "speed" => Ok(StatName::Speed),
            _ => Err(()),
        }
    }
}

/// A single battle stat of a Pokemon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    /// The species-level base value from the data source
    pub base: u32,

    /// Accumulated training bonus, 0 when the data source reports none
    pub effort: u32,

    /// Individual value, rolled once at creation and never re-rolled
    pub iv: u32,

    /// The derived in-battle value; recomputed whenever the level changes
    pub value: u32,
}

impl Stat {
    pub fn new(base: u32, effort: u32, iv: u32, level: u32, is_hp: bool) -> Self {
        Stat {
            base,
            effort,
            iv,
            value: compute_stat(base, effort, iv, level, is_hp),
        }
    }

    /// Re-derives the in-battle value for a new level, keeping the iv fixed
    pub fn recompute(&mut self, level: u32, is_hp: bool) {
        self.value = compute_stat(self.base, self.effort, self.iv, level, is_hp);
    }
}

/// Derives an in-battle stat value from its inputs:
/// `floor(0.01 * (2*base + iv + floor(0.25*effort)) * level)` plus a flat
/// offset of `level + 10` for hp and `5` for every other stat.
///
/// Panics when `level` is 0; stat derivation is undefined below level 1.
pub fn compute_stat(base: u32, effort: u32, iv: u32, level: u32, is_hp: bool) -> u32 {
    assert!(level >= 1, "stat derivation requires level >= 1");

    let effort_bonus = (0.25 * effort as f64).floor();
    let scaled = (0.01 * (2.0 * base as f64 + iv as f64 + effort_bonus) * level as f64).floor();

    let offset = if is_hp { level + 10 } else { 5 };

    scaled as u32 + offset
}

/// Rolls an individual value, uniform in [1, 31] inclusive
pub fn roll_iv<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=31)
}
