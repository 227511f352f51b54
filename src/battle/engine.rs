use crate::battle::ai::Behavior;
use crate::battle::calculators::resolve_action;
use crate::battle::state::{BattleEvent, BattleState, EventBus, Side, TurnPhase, TurnRng};
use crate::errors::{BattleError, BattleResult};
use schema::MoveData;
use tracing::{debug, info, warn};

/// Check if battle is ready for turn resolution (waiting on the player's move)
pub fn ready_for_turn_resolution(battle_state: &BattleState) -> bool {
    battle_state.phase == TurnPhase::AwaitingInput
}

/// The side with the higher speed acts first. Ties go to the player.
pub fn determine_action_order(battle_state: &BattleState) -> [Side; 2] {
    if battle_state.player.speed() >= battle_state.opponent.speed() {
        [Side::Player, Side::Opponent]
    } else {
        [Side::Opponent, Side::Player]
    }
}

/// Announce the matchup of a freshly set up battle
pub fn begin_battle(battle_state: &mut BattleState, rematch: bool) -> EventBus {
    let mut bus = EventBus::new();
    info!(
        player = %battle_state.player.name,
        opponent = %battle_state.opponent.name,
        rematch,
        "Battle started"
    );
    let event = BattleEvent::BattleStarted {
        player: battle_state.player.name.clone(),
        opponent: battle_state.opponent.name.clone(),
        rematch,
    };
    battle_state.emit(&mut bus, event);
    bus
}

/// Main entry point for turn resolution
///
/// Runs both actions of the turn in speed order, or stops after the first
/// one if it makes the defender faint. The opponent's move is asked from
/// `behavior` at the moment the opponent acts.
/// Returns EventBus containing all events that occurred during the turn
pub fn resolve_turn(
    battle_state: &mut BattleState,
    player_move_index: usize,
    behavior: &dyn Behavior,
    rng: &mut TurnRng,
) -> BattleResult<EventBus> {
    if !ready_for_turn_resolution(battle_state) {
        warn!(phase = ?battle_state.phase, "Rejected move submission");
        return Err(BattleError::NotAcceptingMoves {
            phase: battle_state.phase,
        });
    }

    let player_move = battle_state
        .player
        .move_at(player_move_index)
        .cloned()
        .ok_or(BattleError::InvalidMoveIndex {
            index: player_move_index,
            available: battle_state.player.moves.len(),
        })?;

    let mut bus = EventBus::new();

    // 1. Initialization
    battle_state.phase = TurnPhase::Resolving;
    debug!(turn = battle_state.turn_number, "Resolving turn");

    // 2. Execute actions in speed order
    for side in determine_action_order(battle_state) {
        let move_used = match side {
            Side::Player => player_move.clone(),
            Side::Opponent => {
                let available = battle_state.opponent.moves.len();
                let chosen = behavior.decide_move(&battle_state.opponent, rng);
                // Out-of-range choices wrap around the move list
                let index = chosen % available.max(1);
                if index != chosen {
                    warn!(chosen, available, "Opponent move choice out of range, wrapping");
                }
                match battle_state.opponent.move_at(index) {
                    Some(move_data) => move_data.clone(),
                    None => {
                        warn!(opponent = %battle_state.opponent.name, "Opponent has no moves");
                        continue;
                    }
                }
            }
        };

        if execute_attack(battle_state, side, &move_used, rng, &mut bus) {
            finish_battle(battle_state, side.opponent(), &mut bus);
            return Ok(bus);
        }
    }

    // 3. Cleanup & Finalization
    battle_state.turn_number += 1;
    battle_state.phase = TurnPhase::AwaitingInput;

    Ok(bus)
}

/// Execute one attack from `attacker_side` against the other side.
/// Returns true if the defender fainted.
fn execute_attack(
    battle_state: &mut BattleState,
    attacker_side: Side,
    move_used: &MoveData,
    rng: &mut TurnRng,
    bus: &mut EventBus,
) -> bool {
    let defender_side = attacker_side.opponent();

    let used = BattleEvent::MoveUsed {
        side: attacker_side,
        attacker: battle_state.combatant(attacker_side).name.clone(),
        move_name: move_used.name.clone(),
    };
    battle_state.emit(bus, used);

    let attacker = battle_state.combatant(attacker_side);
    let defender = battle_state.combatant(defender_side);
    let outcome = resolve_action(attacker, defender, move_used, rng);
    let events = outcome.events(attacker, defender, move_used);

    let fainted = battle_state.combatant_mut(defender_side).take_damage(outcome.damage);
    for event in events {
        battle_state.emit(bus, event);
    }

    fainted
}

fn finish_battle(battle_state: &mut BattleState, fainted_side: Side, bus: &mut EventBus) {
    let winner = fainted_side.opponent();
    battle_state.phase = TurnPhase::Finished;
    info!(
        turn = battle_state.turn_number,
        winner = ?winner,
        fainted = %battle_state.combatant(fainted_side).name,
        "Battle finished"
    );

    let event = BattleEvent::BattleEnded {
        winner,
        fainted: battle_state.combatant(fainted_side).name.clone(),
    };
    battle_state.emit(bus, event);
}
