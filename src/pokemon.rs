use schema::{BaseStats, CombatantTemplate, MoveData, PokemonType};
use serde::{Deserialize, Serialize};

/// A combatant taking part in a battle.
///
/// Built as a deep copy of a roster template, so damage taken here never
/// reaches the roster. `current_hp` is the only field that changes during play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: u16,
    pub name: String,
    pub types: Vec<PokemonType>,
    pub base_stats: BaseStats,
    pub moves: Vec<MoveData>,
    max_hp: u16,
    current_hp: u16,
}

impl Combatant {
    /// Create a fresh, full-health combatant from a roster template
    pub fn from_template(template: &CombatantTemplate) -> Self {
        Combatant {
            id: template.id,
            name: template.name.clone(),
            types: template.types.clone(),
            base_stats: template.base_stats,
            moves: template.moves.clone(),
            max_hp: template.max_hp,
            current_hp: template.max_hp,
        }
    }

    pub fn max_hp(&self) -> u16 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u16 {
        self.current_hp
    }

    pub fn attack(&self) -> u16 {
        self.base_stats.attack
    }

    pub fn defense(&self) -> u16 {
        self.base_stats.defense
    }

    pub fn speed(&self) -> u16 {
        self.base_stats.speed
    }

    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Get the move in the given slot
    pub fn move_at(&self, index: usize) -> Option<&MoveData> {
        self.moves.get(index)
    }

    /// Set current HP, clamped to max HP
    pub fn set_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.max_hp);
    }

    /// Apply damage. HP bottoms out at zero.
    /// Returns true if this damage caused the combatant to faint.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        let was_fainted = self.is_fainted();
        self.current_hp = self.current_hp.saturating_sub(damage);
        !was_fainted && self.is_fainted()
    }

    /// Remaining HP as a fraction of max HP, for health bars.
    pub fn hp_fraction(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.current_hp) / f64::from(self.max_hp)
    }
}
