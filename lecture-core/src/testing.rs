//! Testing utilities for the adventure.
//!
//! This module provides tools for integration testing:
//! - `ScriptedPolicy` for deterministic action selection
//! - `TestHarness` for scripted game scenarios
//! - Assertion helpers for verifying player positions

use crate::adventure::{
    simple_locations, Action, Game, SelectionPolicy, TurnError, TurnReport, World, WorldFactory,
};

/// A selection policy that replays a fixed list of choices.
///
/// Choices are matched against action descriptions, so scripts read like
/// the console output (`"move north to Room 2"`, `"wait one turn"`). Once
/// the script runs out every turn is skipped.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    script: Vec<String>,
    next: usize,
}

impl ScriptedPolicy {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// Number of scripted choices not yet used.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.next
    }
}

impl SelectionPolicy for ScriptedPolicy {
    /// Scripted choices that are not available select an out-of-range index,
    /// so the turn fails with `TurnError::InvalidSelection`.
    fn select(&mut self, actions: &[Action]) -> usize {
        let wanted = match self.script.get(self.next) {
            Some(wanted) => {
                self.next += 1;
                wanted.clone()
            }
            None => Action::SkipTurn.description(),
        };
        actions
            .iter()
            .position(|a| a.description() == wanted)
            .unwrap_or(actions.len())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Test harness for running adventure scenarios.
pub struct TestHarness {
    /// The game under test.
    pub game: Game,
}

impl TestHarness {
    /// Create a harness over the built-in simple world.
    pub fn new() -> Self {
        let world = WorldFactory::new()
            .create(&simple_locations())
            .expect("built-in world is valid");
        Self::with_world(world)
    }

    /// Create a harness over a custom world.
    pub fn with_world(world: World) -> Self {
        Self {
            game: Game::new(world),
        }
    }

    /// Add a player following `script`.
    pub fn scripted_player<I, S>(&mut self, name: &str, start: &str, script: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.game
            .add_player(name, start, Box::new(ScriptedPolicy::new(script)))
            .expect("start location exists");
        self
    }

    /// Play one round.
    pub fn round(&mut self) -> Result<Vec<TurnReport>, TurnError> {
        self.game.play_round()
    }

    /// Name of the location `player` is standing in.
    pub fn location_of(&self, player: &str) -> Option<&str> {
        let player = self.game.player(player)?;
        self.game
            .world()
            .location(player.location())
            .map(|l| l.name.as_str())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that `player` stands in the location named `location`.
#[track_caller]
pub fn assert_player_at(harness: &TestHarness, player: &str, location: &str) {
    let actual = harness.location_of(player);
    assert_eq!(
        actual,
        Some(location),
        "Expected {player} at '{location}', found {actual:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_player_follows_script() {
        let mut harness = TestHarness::new();
        harness.scripted_player("Alice", "Room 1", ["move east to Room 3", "move north to Room 4"]);

        harness.round().unwrap();
        assert_player_at(&harness, "Alice", "Room 3");
        harness.round().unwrap();
        assert_player_at(&harness, "Alice", "Room 4");

        // Script exhausted: the player waits.
        let reports = harness.round().unwrap();
        assert_eq!(reports[0].action, Action::SkipTurn);
        assert_player_at(&harness, "Alice", "Room 4");
    }

    #[test]
    fn test_unavailable_scripted_choice_fails_the_turn() {
        let mut harness = TestHarness::new();
        harness.scripted_player("Alice", "Room 1", ["move west to Nowhere"]);

        assert!(matches!(
            harness.round(),
            Err(TurnError::InvalidSelection { index: 3, len: 3 })
        ));
        assert_player_at(&harness, "Alice", "Room 1");
    }

    #[test]
    fn test_remaining() {
        let mut policy = ScriptedPolicy::new(["wait one turn", "wait one turn"]);
        assert_eq!(policy.remaining(), 2);
        policy.select(&[Action::SkipTurn]);
        assert_eq!(policy.remaining(), 1);
    }
}
