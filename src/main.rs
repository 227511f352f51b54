//! Terminal driver for a Pocket Duel battle.
use anyhow::{Context, Result};
use pocket_duel::config::log_filter;
use pocket_duel::{BattleEvent, BattleRunner, BattleSnapshot, Combatant, DuelConfig, TracingSink};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::sleep;

const HP_BAR_WIDTH: usize = 20;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = DuelConfig::from_env();
    let roster = config.roster().context("failed to load roster")?;
    let mut runner = BattleRunner::new(roster, config.rng()).with_sink(Box::new(TracingSink));

    for entry in runner.log() {
        println!("{}", entry.message);
    }
    print_status(&runner.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => break,
            "r" | "restart" => {
                let snapshot = runner.restart();
                for entry in runner.log() {
                    println!("{}", entry.message);
                }
                print_status(&snapshot);
            }
            "state" => {
                println!("{}", serde_json::to_string_pretty(&runner.snapshot())?);
            }
            input => match input.parse::<usize>() {
                Ok(choice) if choice >= 1 => match runner.submit(choice - 1) {
                    Ok(result) => {
                        narrate(&result.events, &config).await;
                        print_status(&result.snapshot);
                        if result.battle_ended() {
                            println!("Type 'r' for a new battle or 'q' to quit.");
                        }
                    }
                    Err(e) => println!("{}", e),
                },
                _ => println!("Enter a move number, 'r' to restart, 'state' or 'q'."),
            },
        }
    }

    Ok(())
}

/// Print one turn's narration, pausing before the second attacker acts.
async fn narrate(events: &[BattleEvent], config: &DuelConfig) {
    let mut attacks = 0;
    for event in events {
        if matches!(event, BattleEvent::MoveUsed { .. }) {
            attacks += 1;
            if attacks == 2 {
                sleep(config.action_delay).await;
            }
        }
        if let Some(line) = event.format() {
            println!("{}", line);
        }
    }
}

fn print_status(snapshot: &BattleSnapshot) {
    println!();
    println!("-- Turn {} --", snapshot.turn);
    println!("Foe  {}", hp_line(&snapshot.opponent));
    println!("You  {}", hp_line(&snapshot.player));
    for (i, move_data) in snapshot.player.moves.iter().enumerate() {
        println!(
            "  {}. {} ({}, power {}, accuracy {})",
            i + 1,
            move_data.name,
            move_data.move_type,
            move_data.power,
            move_data.accuracy
        );
    }
}

fn hp_line(combatant: &Combatant) -> String {
    let filled = (combatant.hp_fraction() * HP_BAR_WIDTH as f64).ceil() as usize;
    let filled = filled.min(HP_BAR_WIDTH);
    format!(
        "{:<10} [{}{}] {}/{}",
        combatant.name,
        "#".repeat(filled),
        "-".repeat(HP_BAR_WIDTH - filled),
        combatant.current_hp(),
        combatant.max_hp()
    )
}
