use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable move template.
///
/// `pp` and `max_pp` are carried for display. Nothing in the engine spends PP
/// or refuses an empty move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub move_type: PokemonType,
    pub power: u16,
    /// Hit chance as a percentage, 0-100.
    pub accuracy: u8,
    #[serde(default = "MoveData::default_pp")]
    pub pp: u8,
    #[serde(default = "MoveData::default_pp")]
    pub max_pp: u8,
}

impl MoveData {
    pub const DEFAULT_PP: u8 = 15;

    /// Create a move with full default PP.
    pub fn new(name: impl Into<String>, move_type: PokemonType, power: u16, accuracy: u8) -> Self {
        Self {
            name: name.into(),
            move_type,
            power,
            accuracy,
            pp: Self::DEFAULT_PP,
            max_pp: Self::DEFAULT_PP,
        }
    }

    fn default_pp() -> u8 {
        Self::DEFAULT_PP
    }
}

impl fmt::Display for MoveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
