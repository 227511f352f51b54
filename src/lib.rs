//! Pocket Duel Battle Engine
//!
//! A one-on-one, turn-based monster battle: a player-controlled combatant
//! against a randomly acting opponent, both drawn from a small fixed roster.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod pokemon;
pub mod roster;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{BaseStats, CombatantTemplate, MoveData, PokemonType};

// --- From this crate's modules (`src/`) ---

// Core battle engine functions and state.
pub use battle::engine::{determine_action_order, ready_for_turn_resolution, resolve_turn};
pub use battle::runner::{BattleRunner, LogSink, TracingSink, TurnResult};
pub use battle::state::{BattleEvent, BattleSnapshot, BattleState, LogEntry, Side, TurnPhase, TurnRng};

// Runtime types.
pub use config::DuelConfig;
pub use pokemon::Combatant;
pub use roster::Roster;

// Crate-specific error and result types.
pub use errors::{BattleError, BattleResult, RosterError, RosterResult};
