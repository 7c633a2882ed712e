use serde::{Deserialize, Serialize};

use super::stats::StatName;

/// Which participant of a move a stat change lands on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The Pokemon using the move
    Attacker,
    /// The Pokemon the move is used on
    Defender,
}

/// One entry of a stat-changing move
///
/// Entries are applied strictly in list order, so later entries observe the
/// effects of earlier ones.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StatChange {
    /// Who the change applies to
    pub target: Target,
    /// The stat being changed
    pub stat: StatName,
    /// Signed adjustment to the current stat value
    pub delta: i32,
}

/// What a move does when it connects
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "kind", content = "changes", rename_all = "snake_case")]
pub enum MoveKind {
    /// Reduce the defender's hp based on the attack/defense pairing
    Damage,
    /// Adjust stats of either participant, in list order
    StatChange(Vec<StatChange>),
}

/// A battle move
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Move {
    /// The name of the move
    pub name: String,

    /// Move power; only meaningful for damaging moves
    #[serde(default)]
    pub power: u32,

    /// Whether the move uses the special-attack/special-defense pairing
    /// instead of the physical attack/defense one
    #[serde(default)]
    pub special: bool,

    /// Damaging or stat-changing behavior
    #[serde(flatten)]
    pub kind: MoveKind,
}
