use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, Display, EnumIter)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Calculate type effectiveness multiplier for attacking type vs a single defending type
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    ///
    /// Only Fire, Water, Grass and Electric have matchups; every other pair is neutral.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        use PokemonType::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) => 2.0,
            (Fire, Water) | (Fire, Fire) => 0.5,

            // Water
            (Water, Fire) => 2.0,
            (Water, Grass) | (Water, Water) => 0.5,

            // Grass
            (Grass, Water) => 2.0,
            (Grass, Fire) | (Grass, Grass) => 0.5,

            // Electric
            (Electric, Water) => 2.0,
            (Electric, Grass) => 0.5,
            (Electric, Ground) => 0.0,

            _ => 1.0,
        }
    }

    /// Combined multiplier against every type of the defender.
    /// Factors compound, so a single immunity zeroes the result.
    pub fn effectiveness(attacking: PokemonType, defending: &[PokemonType]) -> f64 {
        defending
            .iter()
            .fold(1.0, |multiplier, &defender_type| {
                multiplier * Self::type_effectiveness(attacking, defender_type)
            })
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }
}
