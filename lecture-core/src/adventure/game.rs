//! Turn-based game loop over a world and its players.

use super::pawn::Pawn;
use super::player::{Player, PolicyKind, SelectionPolicy, TurnError, TurnReport};
use super::world::World;

/// Configuration for a single-player adventure.
#[derive(Debug, Clone)]
pub struct AdventureConfig {
    /// Player (and pawn) name.
    pub player_name: String,

    /// Name of the location the player starts in.
    pub start_location: String,

    /// How the player picks actions.
    pub policy: PolicyKind,

    /// Seed for random selection; `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Number of rounds to play.
    pub rounds: usize,
}

impl AdventureConfig {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            start_location: "Room 1".to_string(),
            policy: PolicyKind::Random,
            seed: None,
            rounds: 10,
        }
    }

    pub fn with_start_location(mut self, location: impl Into<String>) -> Self {
        self.start_location = location.into();
        self
    }

    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self::new("Alice")
    }
}

/// A world plus the players moving through it.
///
/// Players take their turns in the order they were added.
#[derive(Debug)]
pub struct Game {
    world: World,
    players: Vec<Player>,
    round: u64,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            players: Vec::new(),
            round: 0,
        }
    }

    /// A game with the single player described by `config`.
    pub fn from_config(world: World, config: &AdventureConfig) -> Result<Self, TurnError> {
        let mut game = Self::new(world);
        game.add_player(
            &config.player_name,
            &config.start_location,
            config.policy.build(config.seed),
        )?;
        Ok(game)
    }

    /// Add a player starting at the location named `start`.
    pub fn add_player(
        &mut self,
        name: &str,
        start: &str,
        policy: Box<dyn SelectionPolicy>,
    ) -> Result<&Player, TurnError> {
        let location = self.world.id_of(start)?;
        tracing::debug!(player = name, start, policy = policy.name(), "adding player");
        self.players.push(Player::new(name, Pawn::new(name, location), policy));
        let index = self.players.len() - 1;
        Ok(&self.players[index])
    }

    /// Give every player one turn.
    pub fn play_round(&mut self) -> Result<Vec<TurnReport>, TurnError> {
        self.round += 1;
        tracing::debug!(round = self.round, "starting round");

        let mut reports = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            reports.push(player.take_turn(&self.world)?);
        }
        Ok(reports)
    }

    /// Play `rounds` rounds, returning every turn in order.
    pub fn run(&mut self, rounds: usize) -> Result<Vec<TurnReport>, TurnError> {
        let mut reports = Vec::new();
        for _ in 0..rounds {
            reports.extend(self.play_round()?);
        }
        Ok(reports)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Rounds played so far.
    pub fn round(&self) -> u64 {
        self.round
    }
}
