use crate::battle::state::{BattleState, TurnRng};
use crate::errors::BattleResult;
use crate::pokemon::Combatant;
use schema::{BaseStats, CombatantTemplate, MoveData, PokemonType};
use std::sync::atomic::{AtomicU16, Ordering};

static NEXT_ID: AtomicU16 = AtomicU16::new(1);

/// A builder for creating test combatants with common defaults.
///
/// # Example
/// ```
/// let pikachu = TestCombatantBuilder::new("Pikachu")
///     .with_types(vec![PokemonType::Electric])
///     .with_stats(90, 50, 120)
///     .with_hp(20)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    id: Option<u16>,
    name: String,
    types: Vec<PokemonType>,
    max_hp: u16,
    current_hp: Option<u16>,
    stats: BaseStats,
    moves: Vec<MoveData>,
}

impl TestCombatantBuilder {
    /// Creates a neutral Normal-type combatant with 100 HP, 80 in every stat and Tackle.
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            types: vec![PokemonType::Normal],
            max_hp: 100,
            current_hp: None,
            stats: BaseStats {
                attack: 80,
                defense: 80,
                speed: 80,
            },
            moves: vec![MoveData::new("Tackle", PokemonType::Normal, 40, 100)],
        }
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_types(mut self, types: Vec<PokemonType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_stats(mut self, attack: u16, defense: u16, speed: u16) -> Self {
        self.stats = BaseStats {
            attack,
            defense,
            speed,
        };
        self
    }

    pub fn with_max_hp(mut self, max_hp: u16) -> Self {
        self.max_hp = max_hp;
        self
    }

    /// Sets the current HP for the test combatant. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = moves;
        self
    }

    /// The roster template this builder describes, at full health.
    pub fn template(&self) -> CombatantTemplate {
        CombatantTemplate {
            id: self
                .id
                .unwrap_or_else(|| NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            name: self.name.clone(),
            types: self.types.clone(),
            max_hp: self.max_hp.max(self.current_hp.unwrap_or(0)),
            base_stats: self.stats,
            moves: self.moves.clone(),
        }
    }

    pub fn build(self) -> Combatant {
        let mut combatant = Combatant::from_template(&self.template());
        if let Some(hp) = self.current_hp {
            combatant.set_hp(hp);
        }
        combatant
    }
}

/// Creates a battle state between two combatants, waiting on turn 1.
pub fn create_test_battle(player: Combatant, opponent: Combatant) -> BattleState {
    BattleState::new(player, opponent)
}

/// Creates a `TurnRng` instance with a long list of default values (50).
/// Every move with accuracy 50 or more hits, and each damage roll is the minimum 85.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![50; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
