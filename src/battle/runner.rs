use crate::battle::ai::{Behavior, RandomAI};
use crate::battle::engine::{begin_battle, resolve_turn};
use crate::battle::state::{BattleEvent, BattleSnapshot, BattleState, LogEntry, TurnRng};
use crate::errors::BattleResult;
use crate::pokemon::Combatant;
use crate::roster::Roster;
use schema::CombatantTemplate;
use tracing::{debug, info};

/// Destination for narration lines as they are appended to the battle log.
pub trait LogSink {
    fn append(&mut self, message: &str, turn: u32);
}

/// Forwards narration to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn append(&mut self, message: &str, turn: u32) {
        debug!(turn, "{}", message);
    }
}

/// Result of submitting one move
#[derive(Debug, Clone)]
pub struct TurnResult {
    pub events: Vec<BattleEvent>,
    pub snapshot: BattleSnapshot,
}

impl TurnResult {
    pub fn battle_ended(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, BattleEvent::BattleEnded { .. }))
    }
}

/// High-level battle management interface
///
/// Owns the current battle, the roster it was drawn from and the random
/// source, and is the only thing a presentation layer needs to talk to.
pub struct BattleRunner {
    state: BattleState,
    roster: Roster,
    rng: TurnRng,
    behavior: Box<dyn Behavior>,
    sink: Option<Box<dyn LogSink>>,
    forwarded: usize,
}

impl BattleRunner {
    /// Start the opening battle: roster entry 0 against entry 1.
    pub fn new(roster: Roster, rng: TurnRng) -> Self {
        let (player, opponent) = roster.opening_pair();
        let mut state = new_state(player, opponent);
        begin_battle(&mut state, false);

        Self {
            state,
            roster,
            rng,
            behavior: Box::new(RandomAI::new()),
            sink: None,
            forwarded: 0,
        }
    }

    /// Replace the opponent's move selection strategy
    pub fn with_behavior(mut self, behavior: Box<dyn Behavior>) -> Self {
        self.behavior = behavior;
        self
    }

    /// Attach a log sink. Entries already in the log are forwarded immediately.
    pub fn with_sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self.flush_log();
        self
    }

    /// Play one turn with the player's move at `move_index`.
    pub fn submit(&mut self, move_index: usize) -> BattleResult<TurnResult> {
        let bus = resolve_turn(
            &mut self.state,
            move_index,
            self.behavior.as_ref(),
            &mut self.rng,
        )?;
        self.flush_log();

        Ok(TurnResult {
            events: bus.events().to_vec(),
            snapshot: self.state.snapshot(),
        })
    }

    /// Discard the current battle and start a new one between two distinct
    /// roster entries. Legal in any phase.
    pub fn restart(&mut self) -> BattleSnapshot {
        let (player, opponent) = self.roster.sample_pair(&mut self.rng);
        info!(player = %player.name, opponent = %opponent.name, "Restarting battle");
        self.state = new_state(player, opponent);
        self.forwarded = 0;
        begin_battle(&mut self.state, true);
        self.flush_log();

        self.state.snapshot()
    }

    pub fn snapshot(&self) -> BattleSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn log(&self) -> &[LogEntry] {
        self.state.log()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    fn flush_log(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            for entry in &self.state.log()[self.forwarded..] {
                sink.append(&entry.message, entry.turn);
            }
            self.forwarded = self.state.log().len();
        }
    }
}

fn new_state(player: &CombatantTemplate, opponent: &CombatantTemplate) -> BattleState {
    BattleState::new(
        Combatant::from_template(player),
        Combatant::from_template(opponent),
    )
}
