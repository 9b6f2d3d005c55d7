//! Integration tests for the turn-based adventure.

use lecture_core::adventure::{
    simple_locations, Action, AdventureConfig, FirstAction, Game, LocationDescription, Pawn,
    Player, PolicyKind, RandomAction, TurnError, WorldFactory,
};
use lecture_core::testing::{assert_player_at, TestHarness};

#[test]
fn test_random_player_only_walks_existing_connections() {
    let config = AdventureConfig::new("Alice").with_seed(2024).with_rounds(200);
    let mut game = Game::from_config(WorldFactory::new().create(&simple_locations()).unwrap(), &config).unwrap();

    let reports = game.run(config.rounds).unwrap();
    assert_eq!(reports.len(), 200);

    for report in &reports {
        let origin = game.world().get(report.from).unwrap();
        match &report.action {
            Action::Move { direction, target, .. } => {
                assert_eq!(origin.connection(direction), Some(*target));
                assert_eq!(report.to, *target);
            }
            Action::SkipTurn => assert_eq!(report.from, report.to),
        }
    }

    // Consecutive turns chain: each turn starts where the previous ended.
    for pair in reports.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
}

#[test]
fn test_random_player_eventually_skips_and_moves() {
    let world = WorldFactory::new().create(&simple_locations()).unwrap();
    let start = world.id_of("Room 1").unwrap();
    let mut player = Player::new("Alice", Pawn::new("Alice", start), Box::new(RandomAction::with_seed(11)));

    let mut skipped = false;
    let mut moved = false;
    for _ in 0..200 {
        let report = player.take_turn(&world).unwrap();
        skipped |= report.action == Action::SkipTurn;
        moved |= report.moved();
    }
    assert!(skipped && moved);
}

#[test]
fn test_dead_end_still_offers_skip() {
    let descriptions = vec![LocationDescription::new("Cell", "No way out.")];
    let world = WorldFactory::new().create(&descriptions).unwrap();
    let mut game = Game::new(world);
    game.add_player("Prisoner", "Cell", Box::new(FirstAction)).unwrap();

    let reports = game.run(3).unwrap();
    assert!(reports.iter().all(|r| r.action == Action::SkipTurn));
}

#[test]
fn test_select_action_rejects_empty_list_for_every_policy() {
    let world = WorldFactory::new().create(&simple_locations()).unwrap();
    let start = world.id_of("Room 2").unwrap();
    for kind in [PolicyKind::First, PolicyKind::Random] {
        let mut player = Player::new("Bob", Pawn::new("Bob", start), kind.build(None));
        let err = player.select_action(Vec::new()).unwrap_err();
        assert!(matches!(err, TurnError::NoActions));
        assert_eq!(err.to_string(), "invalid operation: no actions available");
    }
}

#[test]
fn test_harness_two_players() {
    let mut harness = TestHarness::new();
    harness
        .scripted_player("Alice", "Room 1", ["move north to Room 2", "wait one turn"])
        .scripted_player("Bob", "Room 4", ["move south to Room 3", "move west to Room 1"]);

    harness.round().unwrap();
    assert_player_at(&harness, "Alice", "Room 2");
    assert_player_at(&harness, "Bob", "Room 3");

    harness.round().unwrap();
    assert_player_at(&harness, "Alice", "Room 2");
    assert_player_at(&harness, "Bob", "Room 1");
    assert_eq!(harness.game.round(), 2);
}
