//! End-to-end battles driven through the public handle.

use battle_core::{
    ActionKind, BattleConfig, BattlePhase, ForcedPolicy, PlayerChoice, RngOracle, Side, UnitSpec,
};
use runtime::{
    ActionReceipt, BattleEvent, BattleHandle, BattleResult, BattleRuntime, Event, NarrativeEvent,
    RuntimeConfig, Topic, UnitEvent,
};

/// Oracle that always yields the same d100 roll.
struct FixedRoll(u32);

impl RngOracle for FixedRoll {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0 - 1
    }
}

fn hero() -> UnitSpec {
    UnitSpec::new("Hero", 20, 5)
}

fn drone() -> UnitSpec {
    UnitSpec::new("Drone", 15, 4)
}

async fn drain_narratives(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Event::Narrative(NarrativeEvent { text }) = event {
            lines.push(text);
        }
    }
    lines
}

#[tokio::test]
async fn begin_reports_opening_narration_and_initial_health() {
    let runtime = BattleRuntime::builder()
        .player(hero())
        .enemy(drone())
        .build()
        .unwrap();
    let handle = runtime.handle();

    let mut narrative_rx = handle.subscribe(Topic::Narrative);
    let mut unit_rx = handle.subscribe(Topic::Unit);
    let mut battle_rx = handle.subscribe(Topic::Battle);

    handle.begin().await.unwrap();

    let lines = drain_narratives(&mut narrative_rx).await;
    assert_eq!(
        lines,
        vec![
            "A wild Drone approaches...".to_string(),
            "Choose an action:".to_string()
        ]
    );

    let mut initial_hp = Vec::new();
    while let Ok(Event::Unit(UnitEvent::HealthChanged { side, current_hp })) = unit_rx.try_recv() {
        initial_hp.push((side, current_hp));
    }
    assert_eq!(initial_hp, vec![(Side::Player, 20), (Side::Enemy, 15)]);

    assert!(matches!(
        battle_rx.try_recv().unwrap(),
        Event::Battle(BattleEvent::PhaseChanged {
            phase: BattlePhase::PlayerChoose
        })
    ));
    assert_eq!(handle.phase().await.unwrap(), BattlePhase::PlayerChoose);
}

#[tokio::test]
async fn three_bombing_rounds_defeat_a_ten_hp_player() {
    // Player 10 HP, enemy attack 4: rounds go 6, 2, then clamp to 0.
    let runtime = BattleRuntime::builder()
        .player(UnitSpec::new("Hero", 10, 5))
        .enemy(UnitSpec::new("Drone", 100, 4))
        .policy(ForcedPolicy(ActionKind::Bombing))
        .build()
        .unwrap();
    let handle = runtime.handle();
    handle.begin().await.unwrap();

    for expected_hp in [6, 2] {
        let receipt = handle.player_action(PlayerChoice::Attack).await.unwrap();
        assert_eq!(receipt, ActionReceipt::Resolved(BattlePhase::PlayerChoose));
        let snapshot = handle.snapshot(Side::Player).await.unwrap();
        assert_eq!(snapshot.current_hp, expected_hp);
    }

    let receipt = handle.player_action(PlayerChoice::Attack).await.unwrap();
    assert_eq!(receipt, ActionReceipt::Resolved(BattlePhase::Lost));

    let snapshot = handle.snapshot(Side::Player).await.unwrap();
    assert_eq!(snapshot.current_hp, 0);
}

#[tokio::test]
async fn first_round_kill_preempts_the_scheduled_enemy_action() {
    let runtime = BattleRuntime::builder()
        .player(UnitSpec::new("Hero", 20, 5))
        .enemy(UnitSpec::new("Drone", 5, 4))
        .policy(ForcedPolicy(ActionKind::Bombing))
        .build()
        .unwrap();
    let handle = runtime.handle();

    let mut narrative_rx = handle.subscribe(Topic::Narrative);
    let mut battle_rx = handle.subscribe(Topic::Battle);
    handle.begin().await.unwrap();

    let receipt = handle.player_action(PlayerChoice::Attack).await.unwrap();
    assert_eq!(receipt, ActionReceipt::Resolved(BattlePhase::Won));

    // The scheduled bombing never ran: no windup line, player untouched.
    let lines = drain_narratives(&mut narrative_rx).await;
    assert!(lines.iter().any(|l| l == "The attack is successful!"));
    assert!(lines.iter().all(|l| !l.contains("bombing")));
    assert_eq!(
        handle.snapshot(Side::Player).await.unwrap().current_hp,
        20
    );

    let mut saw_end = false;
    while let Ok(event) = battle_rx.try_recv() {
        if let Event::Battle(BattleEvent::Ended { result }) = event {
            assert_eq!(result, BattleResult::Won);
            saw_end = true;
        }
    }
    assert!(saw_end, "battle end event not published");
}

#[tokio::test]
async fn protect_blocks_snipe_and_narrates_the_block() {
    let runtime = BattleRuntime::builder()
        .player(hero())
        .enemy(drone())
        .policy(ForcedPolicy(ActionKind::Snipe))
        .build()
        .unwrap();
    let handle = runtime.handle();

    let mut narrative_rx = handle.subscribe(Topic::Narrative);
    handle.begin().await.unwrap();

    let receipt = handle.player_action(PlayerChoice::Protect).await.unwrap();
    assert_eq!(receipt, ActionReceipt::Resolved(BattlePhase::PlayerChoose));

    let lines = drain_narratives(&mut narrative_rx).await;
    assert!(lines.iter().any(|l| l == "Drone uses sniping!"));
    assert!(
        lines
            .iter()
            .any(|l| l == "You protected yourself from the attack!")
    );
    assert_eq!(
        handle.snapshot(Side::Player).await.unwrap().current_hp,
        20
    );
}

#[tokio::test]
async fn standard_policy_stops_sniping_once_charges_run_out() {
    // Always-maximal roll: snipe while charges remain, bombing after.
    let mut config = RuntimeConfig::default();
    config.battle = BattleConfig::with_snipe_charges(2);

    let runtime = BattleRuntime::builder()
        .player(UnitSpec::new("Hero", 50, 1))
        .enemy(UnitSpec::new("Drone", 100, 4))
        .config(config)
        .rng(FixedRoll(100))
        .build()
        .unwrap();
    let handle = runtime.handle();

    let mut narrative_rx = handle.subscribe(Topic::Narrative);
    handle.begin().await.unwrap();

    for _ in 0..4 {
        handle.player_action(PlayerChoice::Protect).await.unwrap();
    }

    let lines = drain_narratives(&mut narrative_rx).await;
    let snipes = lines.iter().filter(|l| l.contains("sniping")).count();
    let bombings = lines.iter().filter(|l| l.contains("bombing")).count();
    assert_eq!(snipes, 2, "snipe fired beyond its charges: {lines:?}");
    assert_eq!(bombings, 2);
}

#[tokio::test]
async fn input_after_the_battle_ends_is_dropped_without_mutation() {
    let runtime = BattleRuntime::builder()
        .player(UnitSpec::new("Hero", 20, 5))
        .enemy(UnitSpec::new("Drone", 5, 4))
        .policy(ForcedPolicy(ActionKind::Bombing))
        .build()
        .unwrap();
    let handle = runtime.handle();
    handle.begin().await.unwrap();

    handle.player_action(PlayerChoice::Attack).await.unwrap();
    assert_eq!(handle.phase().await.unwrap(), BattlePhase::Won);

    let before = snapshots(&handle).await;
    let receipt = handle.player_action(PlayerChoice::Attack).await.unwrap();
    assert_eq!(receipt, ActionReceipt::Dropped);
    assert_eq!(snapshots(&handle).await, before);
    assert_eq!(handle.phase().await.unwrap(), BattlePhase::Won);
}

#[tokio::test]
async fn begin_twice_is_rejected() {
    let runtime = BattleRuntime::builder()
        .player(hero())
        .enemy(drone())
        .build()
        .unwrap();
    let handle = runtime.handle();

    handle.begin().await.unwrap();
    assert!(handle.begin().await.is_err());
}

#[tokio::test]
async fn setup_rejects_malformed_specs() {
    let err = BattleRuntime::builder()
        .player(UnitSpec::new("", 20, 5))
        .enemy(drone())
        .build()
        .err()
        .expect("empty name must fail setup");
    assert!(err.to_string().contains("name"));

    let err = BattleRuntime::builder()
        .player(hero())
        .enemy(UnitSpec::new("Drone", 0, 4))
        .build()
        .err()
        .expect("zero max hp must fail setup");
    assert!(err.to_string().contains("max hp"));

    assert!(BattleRuntime::builder().player(hero()).build().is_err());
}

async fn snapshots(handle: &BattleHandle) -> Vec<battle_core::UnitSnapshot> {
    let mut out = Vec::new();
    for side in [Side::Player, Side::Enemy] {
        out.push(handle.snapshot(side).await.unwrap());
    }
    out
}
