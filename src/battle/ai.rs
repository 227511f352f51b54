//! A module for defining how the computer-controlled side picks its moves.

use crate::battle::state::TurnRng;
use crate::pokemon::Combatant;

/// A trait for any system that can decide on a move for a combatant.
/// This provides a common interface for different AI difficulties or strategies.
pub trait Behavior {
    /// Returns the index into `combatant.moves` of the move to use.
    fn decide_move(&self, combatant: &Combatant, rng: &mut TurnRng) -> usize;
}

/// Picks uniformly from the whole move set, fresh every time it is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAI;

impl RandomAI {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for RandomAI {
    fn decide_move(&self, combatant: &Combatant, rng: &mut TurnRng) -> usize {
        rng.pick_index(combatant.moves.len(), "opponent move")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCombatantBuilder;
    use schema::{MoveData, PokemonType};

    #[test]
    fn test_random_ai_uses_rng_for_choice() {
        let combatant = TestCombatantBuilder::new("Blastoise")
            .with_moves(vec![
                MoveData::new("Hydro Pump", PokemonType::Water, 110, 80),
                MoveData::new("Bite", PokemonType::Ghost, 80, 100),
                MoveData::new("Ice Beam", PokemonType::Ice, 90, 100),
            ])
            .build();
        let mut rng = TurnRng::new_for_test(vec![2, 4]);

        let ai = RandomAI::new();
        assert_eq!(ai.decide_move(&combatant, &mut rng), 2);
        assert_eq!(ai.decide_move(&combatant, &mut rng), 1);
    }

    #[test]
    fn test_random_ai_covers_every_move() {
        let combatant = TestCombatantBuilder::new("Pikachu")
            .with_moves(vec![
                MoveData::new("Thunderbolt", PokemonType::Electric, 90, 100),
                MoveData::new("Quick Attack", PokemonType::Normal, 40, 100),
                MoveData::new("Thunder", PokemonType::Electric, 110, 70),
                MoveData::new("Iron Tail", PokemonType::Steel, 100, 75),
            ])
            .build();
        let mut rng = TurnRng::new_seeded(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[RandomAI.decide_move(&combatant, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
