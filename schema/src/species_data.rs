use crate::{MoveData, PokemonType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
}

/// A roster entry: the complete stat block a combatant is copied from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantTemplate {
    pub id: u16,
    pub name: String,
    pub types: Vec<PokemonType>, // 1-2 types, order carries no meaning
    pub max_hp: u16,
    pub base_stats: BaseStats,
    pub moves: Vec<MoveData>, // 1-4 moves
}

