use crate::battle::state::{BattleEvent, TurnRng};
use crate::pokemon::Combatant;
use schema::{MoveData, PokemonType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every combatant battles at this level.
pub const BATTLE_LEVEL: f64 = 50.0;
pub const STAB_MULTIPLIER: f64 = 1.5;
/// Variance factors above this are narrated as critical hits.
pub const CRITICAL_THRESHOLD: f64 = 0.98;

/// Narration bucket for a type multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectivenessTier {
    Super,
    Weak,
    Immune,
    Normal,
}

impl EffectivenessTier {
    pub fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            EffectivenessTier::Super
        } else if multiplier == 0.0 {
            EffectivenessTier::Immune
        } else if multiplier < 1.0 {
            EffectivenessTier::Weak
        } else {
            EffectivenessTier::Normal
        }
    }
}

/// The result of one combatant attacking another with one move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub hit: bool,
    pub damage: u16,
    pub multiplier: f64,
    pub effectiveness: EffectivenessTier,
    pub is_critical: bool,
    /// Defender HP after the action; unchanged on a miss.
    pub defender_hp: u16,
}

impl ActionOutcome {
    fn missed(defender_hp: u16) -> Self {
        Self {
            hit: false,
            damage: 0,
            multiplier: 1.0,
            effectiveness: EffectivenessTier::Normal,
            is_critical: false,
            defender_hp,
        }
    }

    /// The narration that follows the attack announcement, in order.
    pub fn events(&self, attacker: &Combatant, defender: &Combatant, move_used: &MoveData) -> Vec<BattleEvent> {
        if !self.hit {
            return vec![BattleEvent::MoveMissed {
                attacker: attacker.name.clone(),
                move_name: move_used.name.clone(),
            }];
        }

        let mut events = vec![BattleEvent::AttackTypeEffectiveness {
            multiplier: self.multiplier,
        }];
        if self.is_critical {
            events.push(BattleEvent::CriticalHit {
                attacker: attacker.name.clone(),
                defender: defender.name.clone(),
            });
        }
        events.push(BattleEvent::DamageDealt {
            target: defender.name.clone(),
            damage: self.damage,
            remaining_hp: self.defender_hp,
        });
        events
    }
}

/// A move hits when the accuracy draw does not exceed its accuracy.
pub fn move_hits(move_used: &MoveData, roll: f64) -> bool {
    roll <= f64::from(move_used.accuracy)
}

/// Same-type attack bonus for this attacker using a move of `move_type`
pub fn stab_multiplier(attacker: &Combatant, move_type: PokemonType) -> f64 {
    if attacker.has_type(move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    }
}

/// Critical hits only affect narration; damage is unchanged.
// TODO: decide whether criticals should carry a damage multiplier; the roll
// threshold is already in place.
pub fn is_critical(variance: f64) -> bool {
    variance > CRITICAL_THRESHOLD
}

/// Level-50 damage formula. Everything stays real-valued until the final floor.
pub fn calculate_damage(
    attack: u16,
    defense: u16,
    power: u16,
    stab: f64,
    effectiveness: f64,
    variance: f64,
) -> u16 {
    // Defense below 1 counts as 1
    let defense = f64::from(defense.max(1));
    let base = (2.0 * BATTLE_LEVEL / 5.0 + 2.0) * f64::from(power) * f64::from(attack) / defense;
    let damage = (base / 50.0 + 2.0) * stab * effectiveness * variance;
    damage.floor() as u16
}

/// Resolve a single attack. The defender is not modified; the new HP is
/// reported in the outcome for the caller to apply.
pub fn resolve_action(
    attacker: &Combatant,
    defender: &Combatant,
    move_used: &MoveData,
    rng: &mut TurnRng,
) -> ActionOutcome {
    let roll = rng.accuracy_roll();
    if !move_hits(move_used, roll) {
        debug!(attacker = %attacker.name, move_name = %move_used.name, roll, "Move missed");
        return ActionOutcome::missed(defender.current_hp());
    }

    let multiplier = PokemonType::effectiveness(move_used.move_type, &defender.types);
    let stab = stab_multiplier(attacker, move_used.move_type);
    let variance = f64::from(rng.damage_roll()) / 100.0;

    let damage = calculate_damage(
        attacker.attack(),
        defender.defense(),
        move_used.power,
        stab,
        multiplier,
        variance,
    );
    let defender_hp = defender.current_hp().saturating_sub(damage);

    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %move_used.name,
        multiplier,
        stab,
        variance,
        damage,
        "Move hit"
    );

    ActionOutcome {
        hit: true,
        damage,
        multiplier,
        effectiveness: EffectivenessTier::from_multiplier(multiplier),
        is_critical: is_critical(variance),
        defender_hp,
    }
}
