//! Plain-text battle client.
//!
//! Composition root: assembles a runtime from CLI arguments, prints the
//! event stream, and feeds typed commands (`attack`, `protect`, `quit`)
//! back in. All battle logic lives behind the runtime handle; this binary
//! is presentation only.

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use battle_core::{BattlePhase, PlayerChoice, UnitSpec};
use runtime::{
    ActionReceipt, BattleEvent, BattleRuntime, DelayPacing, Event, NarrativeEvent, NoPacing,
    Topic, UnitEvent,
};

#[derive(Parser, Debug)]
#[command(name = "battle-cli", about = "Two-combatant turn battle in the terminal")]
struct Args {
    #[arg(long, default_value = "Hero")]
    player_name: String,
    #[arg(long, default_value_t = 20)]
    player_hp: u32,
    #[arg(long, default_value_t = 5)]
    player_attack: u32,

    #[arg(long, default_value = "Ravager")]
    enemy_name: String,
    #[arg(long, default_value_t = 25)]
    enemy_hp: u32,
    #[arg(long, default_value_t = 4)]
    enemy_attack: u32,

    /// Battle seed; same seed replays the same enemy decisions.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Skip the narration pauses.
    #[arg(long)]
    fast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let builder = BattleRuntime::builder()
        .player(UnitSpec::new(
            args.player_name,
            args.player_hp,
            args.player_attack,
        ))
        .enemy(UnitSpec::new(
            args.enemy_name,
            args.enemy_hp,
            args.enemy_attack,
        ))
        .seed(args.seed);
    let builder = if args.fast {
        builder.pacing(NoPacing)
    } else {
        builder.pacing(DelayPacing::classic())
    };

    let battle = builder.build()?;
    let handle = battle.handle();

    let printer = tokio::spawn(print_events(handle.clone()));

    handle.begin().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }
        let Ok(choice) = input.parse::<PlayerChoice>() else {
            println!("Commands: attack, protect, quit");
            continue;
        };

        match handle.player_action(choice).await? {
            ActionReceipt::Resolved(phase) if phase.is_terminal() => break,
            ActionReceipt::Resolved(_) => {}
            ActionReceipt::Dropped => println!("(the battle is not waiting on you)"),
        }
    }

    printer.abort();
    drop(handle);
    battle.shutdown().await;
    Ok(())
}

/// Streams bus events to stdout until the battle ends.
async fn print_events(handle: runtime::BattleHandle) {
    let mut narrative_rx = handle.subscribe(Topic::Narrative);
    let mut unit_rx = handle.subscribe(Topic::Unit);
    let mut battle_rx = handle.subscribe(Topic::Battle);

    loop {
        tokio::select! {
            Ok(event) = narrative_rx.recv() => {
                if let Event::Narrative(NarrativeEvent { text }) = event {
                    println!("{text}");
                }
            }
            Ok(event) = unit_rx.recv() => {
                if let Event::Unit(UnitEvent::HealthChanged { side, current_hp }) = event {
                    println!("  [{side} HP: {current_hp}]");
                }
            }
            Ok(event) = battle_rx.recv() => {
                match event {
                    Event::Battle(BattleEvent::Ended { .. }) => {
                        // Flush the closing narration before exiting.
                        while let Ok(Event::Narrative(NarrativeEvent { text })) =
                            narrative_rx.try_recv()
                        {
                            println!("{text}");
                        }
                        break;
                    }
                    Event::Battle(BattleEvent::PhaseChanged { phase }) => {
                        if phase == BattlePhase::Resolving {
                            println!();
                        }
                    }
                    _ => {}
                }
            }
            else => break,
        }
    }
}
