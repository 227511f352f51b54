use crate::pokemon::Combatant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Copy)]
pub enum TurnPhase {
    AwaitingInput,
    Resolving,
    Finished,
}

/// One of the two combatant slots. Only the player picks moves explicitly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    BattleStarted {
        player: String,
        opponent: String,
        rematch: bool,
    },
    MoveUsed {
        side: Side,
        attacker: String,
        move_name: String,
    },
    MoveMissed {
        attacker: String,
        move_name: String,
    },
    AttackTypeEffectiveness {
        multiplier: f64,
    },
    CriticalHit {
        attacker: String,
        defender: String,
    },
    DamageDealt {
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    BattleEnded {
        winner: Side,
        fainted: String,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable string.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::BattleStarted { player, opponent, rematch } => {
                if *rematch {
                    Some(format!("A new battle begins! {} vs {}!", player, opponent))
                } else {
                    Some(format!("The battle begins! {} vs {}!", player, opponent))
                }
            }

            // === Move Events ===
            BattleEvent::MoveUsed { attacker, move_name, .. } => {
                Some(format!("{} used {}!", attacker, move_name))
            }
            BattleEvent::MoveMissed { move_name, .. } => {
                Some(format!("But {} missed!", move_name))
            }
            BattleEvent::CriticalHit { .. } => Some("A critical hit!".to_string()),

            // === Type Effectiveness Events ===
            BattleEvent::AttackTypeEffectiveness { multiplier } => match *multiplier {
                m if m > 1.0 => Some("It's super effective!".to_string()),
                m if m < 1.0 && m > 0.0 => Some("It's not very effective...".to_string()),
                0.0 => Some("It had no effect...".to_string()),
                _ => None, // Normal effectiveness, no message
            },

            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", target, damage))
            }

            // === Battle End Events ===
            BattleEvent::BattleEnded { winner, fainted } => match winner {
                Side::Player => Some(format!("{} fainted! You won!", fainted)),
                Side::Opponent => Some(format!("{} fainted! You lost!", fainted)),
            },
        }
    }
}

/// Event bus for collecting the events of a single transition, in order.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return the narration lines of all non-silent events.
    pub fn narration(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }
}

impl std::fmt::Display for EventBus {
    /// Format the EventBus for printing. Shows debug format of all events.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// A narration line tagged with the turn it happened on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub message: String,
    pub turn: u32,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(StdRng),
    Scripted { outcomes: Vec<u16>, index: usize },
}

/// Source of every random draw in a battle.
///
/// Accuracy rolls, damage variance, opponent move choice and roster sampling
/// all go through here, so a seeded or scripted `TurnRng` makes a battle
/// fully reproducible.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

impl TurnRng {
    /// A deterministic generator for a given seed.
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn new_random() -> Self {
        Self {
            source: RngSource::Seeded(StdRng::from_os_rng()),
        }
    }

    /// Replays a fixed list of outcomes, one per draw.
    ///
    /// Accuracy draws use the value as-is, damage rolls clamp it into 85..=100
    /// and index picks take it modulo the number of choices.
    ///
    /// # Panics
    /// Any draw past the end of the list panics with the reason for the draw.
    pub fn new_for_test(outcomes: Vec<u16>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    fn next_scripted(outcomes: &[u16], index: &mut usize, reason: &str) -> u16 {
        let Some(&outcome) = outcomes.get(*index) else {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        };
        *index += 1;
        outcome
    }

    /// Uniform draw in [0, 100) compared against move accuracy.
    pub fn accuracy_roll(&mut self) -> f64 {
        let roll = match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0.0..100.0),
            RngSource::Scripted { outcomes, index } => {
                f64::from(Self::next_scripted(outcomes, index, "accuracy"))
            }
        };
        trace!(roll, "Consumed accuracy roll");
        roll
    }

    /// Uniform integer in [85, 100] used as the damage variance percentage.
    pub fn damage_roll(&mut self) -> u8 {
        let roll = match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(85..=100u8),
            RngSource::Scripted { outcomes, index } => {
                Self::next_scripted(outcomes, index, "damage variance").clamp(85, 100) as u8
            }
        };
        trace!(roll, "Consumed damage roll");
        roll
    }

    /// Uniform index in [0, len). An empty range yields 0 without drawing.
    pub fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        if len == 0 {
            return 0;
        }
        let picked = match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0..len),
            RngSource::Scripted { outcomes, index } => {
                usize::from(Self::next_scripted(outcomes, index, reason)) % len
            }
        };
        trace!(picked, len, reason, "Consumed index pick");
        picked
    }
}

/// A read-only view of the battle handed to the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattleSnapshot {
    pub player: Combatant,
    pub opponent: Combatant,
    pub turn: u32,
    pub phase: TurnPhase,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleState {
    pub player: Combatant,
    pub opponent: Combatant,
    pub turn_number: u32,
    pub phase: TurnPhase,
    log: Vec<LogEntry>,
}

impl BattleState {
    pub fn new(player: Combatant, opponent: Combatant) -> Self {
        Self {
            player,
            opponent,
            turn_number: 1,
            phase: TurnPhase::AwaitingInput,
            log: Vec::new(),
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Push an event onto the bus and append its narration, if any, to the log.
    pub fn emit(&mut self, bus: &mut EventBus, event: BattleEvent) {
        if let Some(message) = event.format() {
            self.log.push(LogEntry {
                message,
                turn: self.turn_number,
            });
        }
        bus.push(event);
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            player: self.player.clone(),
            opponent: self.opponent.clone(),
            turn: self.turn_number,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod event_formatting_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_silent_events_return_none() {
        let event = BattleEvent::AttackTypeEffectiveness { multiplier: 1.0 };
        assert!(event.format().is_none());
    }

    #[test]
    fn test_effectiveness_text() {
        let text = |multiplier| BattleEvent::AttackTypeEffectiveness { multiplier }.format();
        assert_eq!(text(2.0), Some("It's super effective!".to_string()));
        assert_eq!(text(4.0), Some("It's super effective!".to_string()));
        assert_eq!(text(0.5), Some("It's not very effective...".to_string()));
        assert_eq!(text(0.25), Some("It's not very effective...".to_string()));
        assert_eq!(text(0.0), Some("It had no effect...".to_string()));
    }

    #[test]
    fn test_event_text_samples() {
        let used = BattleEvent::MoveUsed {
            side: Side::Player,
            attacker: "Pikachu".to_string(),
            move_name: "Thunder".to_string(),
        };
        assert_eq!(used.format(), Some("Pikachu used Thunder!".to_string()));

        let missed = BattleEvent::MoveMissed {
            attacker: "Pikachu".to_string(),
            move_name: "Thunder".to_string(),
        };
        assert_eq!(missed.format(), Some("But Thunder missed!".to_string()));

        let damage = BattleEvent::DamageDealt {
            target: "Blastoise".to_string(),
            damage: 42,
            remaining_hp: 148,
        };
        assert_eq!(damage.format(), Some("Blastoise took 42 damage!".to_string()));

        let lost = BattleEvent::BattleEnded {
            winner: Side::Opponent,
            fainted: "Pikachu".to_string(),
        };
        assert_eq!(lost.format(), Some("Pikachu fainted! You lost!".to_string()));
    }

    #[test]
    fn test_event_bus_collects_in_order() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());
        bus.push(BattleEvent::CriticalHit {
            attacker: "Pikachu".to_string(),
            defender: "Blastoise".to_string(),
        });
        bus.push(BattleEvent::AttackTypeEffectiveness { multiplier: 1.0 });
        assert_eq!(bus.len(), 2);
        assert_eq!(bus.narration(), vec!["A critical hit!".to_string()]);
        assert!(format!("{}", bus).contains("CriticalHit"));
    }

    #[test]
    fn test_scripted_rng_maps_outcomes() {
        let mut rng = TurnRng::new_for_test(vec![85, 40, 7, 3]);
        assert_eq!(rng.accuracy_roll(), 85.0);
        assert_eq!(rng.damage_roll(), 85); // clamped up
        assert_eq!(rng.pick_index(4, "opponent move"), 3);
        assert_eq!(rng.pick_index(4, "opponent move"), 3);
    }

    #[test]
    #[should_panic(expected = "TurnRng exhausted")]
    fn test_scripted_rng_exhaustion_panics() {
        let mut rng = TurnRng::new_for_test(vec![]);
        rng.accuracy_roll();
    }

    #[test]
    fn test_seeded_rng_stays_in_range() {
        let mut rng = TurnRng::new_seeded(7);
        for _ in 0..500 {
            let accuracy = rng.accuracy_roll();
            assert!((0.0..100.0).contains(&accuracy));
            assert!((85..=100).contains(&rng.damage_roll()));
            assert!(rng.pick_index(4, "test") < 4);
        }
    }
}
