use crate::battle::state::TurnPhase;
use thiserror::Error;

/// Main error type for the Pocket Duel battle engine.
///
/// Misses and faints are ordinary battle outcomes and never show up here;
/// these variants are caller contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A move was submitted while the battle was not waiting for one
    #[error("Battle is not accepting moves (phase: {phase:?})")]
    NotAcceptingMoves { phase: TurnPhase },
    /// Move index is out of bounds for the player's move set
    #[error("Invalid move index {index}: combatant knows {available} moves")]
    InvalidMoveIndex { index: usize, available: usize },
    /// Error related to roster data
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
}

/// Errors raised while building or loading a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster has no templates
    #[error("Roster is empty")]
    Empty,
    /// Two templates share the same id
    #[error("Duplicate roster id: {0}")]
    DuplicateId(u16),
    /// A template violates the stat block contract
    #[error("Invalid template '{name}': {reason}")]
    InvalidTemplate { name: String, reason: String },
    /// Roster data is malformed
    #[error("Malformed roster data: {0}")]
    Parse(String),
    /// Roster file could not be read
    #[error("Failed to read roster file: {0}")]
    Io(String),
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;
