//! Players: pawns plus the decision of what to do each turn.

use super::action::Action;
use super::pawn::Pawn;
use super::world::{LocationId, World, WorldError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from taking a turn.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error("invalid operation: no actions available")]
    NoActions,

    #[error("selection policy chose index {index} from {len} actions")]
    InvalidSelection { index: usize, len: usize },

    #[error("unknown selection policy: {0}")]
    UnknownPolicy(String),

    #[error("world error: {0}")]
    World(#[from] WorldError),
}

// ============================================================================
// Selection policies
// ============================================================================

/// Chooses one of the available actions.
///
/// Implementations are only called with a non-empty slice and must return
/// an index into it.
pub trait SelectionPolicy: fmt::Debug {
    fn select(&mut self, actions: &[Action]) -> usize;

    fn name(&self) -> &str {
        "custom"
    }
}

/// Always picks the first available action.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAction;

impl SelectionPolicy for FirstAction {
    fn select(&mut self, _actions: &[Action]) -> usize {
        0
    }

    fn name(&self) -> &str {
        "first"
    }
}

/// Picks uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomAction {
    rng: StdRng,
}

impl RandomAction {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAction {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionPolicy for RandomAction {
    fn select(&mut self, actions: &[Action]) -> usize {
        if actions.is_empty() {
            return 0;
        }
        self.rng.gen_range(0..actions.len())
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Built-in policies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    First,
    #[default]
    Random,
}

impl PolicyKind {
    /// Instantiate the policy. `seed` only affects [`PolicyKind::Random`].
    pub fn build(self, seed: Option<u64>) -> Box<dyn SelectionPolicy> {
        match (self, seed) {
            (PolicyKind::First, _) => Box::new(FirstAction),
            (PolicyKind::Random, Some(seed)) => Box::new(RandomAction::with_seed(seed)),
            (PolicyKind::Random, None) => Box::new(RandomAction::new()),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::First => write!(f, "first"),
            PolicyKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = TurnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(PolicyKind::First),
            "random" => Ok(PolicyKind::Random),
            _ => Err(TurnError::UnknownPolicy(s.to_string())),
        }
    }
}

// ============================================================================
// Player
// ============================================================================

/// What happened during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: String,
    pub action: Action,
    pub from: LocationId,
    pub to: LocationId,
}

impl TurnReport {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

impl fmt::Display for TurnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} performs: {}", self.player, self.action)
    }
}

/// Owns a pawn and decides which action it performs each turn.
#[derive(Debug)]
pub struct Player {
    pub name: String,
    pawn: Pawn,
    policy: Box<dyn SelectionPolicy>,
}

impl Player {
    pub fn new(name: impl Into<String>, pawn: Pawn, policy: Box<dyn SelectionPolicy>) -> Self {
        Self {
            name: name.into(),
            pawn,
            policy,
        }
    }

    pub fn pawn(&self) -> &Pawn {
        &self.pawn
    }

    pub fn location(&self) -> LocationId {
        self.pawn.location()
    }

    pub fn set_location(&mut self, location: LocationId) {
        self.pawn.set_location(location);
    }

    pub fn policy(&self) -> &dyn SelectionPolicy {
        self.policy.as_ref()
    }

    /// Swap the selection policy, returning the previous one.
    pub fn set_policy(&mut self, policy: Box<dyn SelectionPolicy>) -> Box<dyn SelectionPolicy> {
        std::mem::replace(&mut self.policy, policy)
    }

    /// Every move from the current location, followed by skipping the turn.
    pub fn available_actions(&self, world: &World) -> Result<Vec<Action>, TurnError> {
        let mut actions = self.pawn.actions(world)?;
        actions.push(Action::SkipTurn);
        Ok(actions)
    }

    /// Pick one of `actions` with the current policy.
    pub fn select_action(&mut self, mut actions: Vec<Action>) -> Result<Action, TurnError> {
        if actions.is_empty() {
            return Err(TurnError::NoActions);
        }
        let index = self.policy.select(&actions);
        if index >= actions.len() {
            return Err(TurnError::InvalidSelection {
                index,
                len: actions.len(),
            });
        }
        Ok(actions.swap_remove(index))
    }

    pub fn perform(&mut self, action: &Action) {
        self.pawn.perform(action);
    }

    /// Select and perform one action.
    pub fn take_turn(&mut self, world: &World) -> Result<TurnReport, TurnError> {
        let from = self.location();
        let actions = self.available_actions(world)?;
        let action = self.select_action(actions)?;
        tracing::info!(player = %self.name, policy = self.policy.name(), "{} performs: {}", self.name, action);
        self.perform(&action);

        Ok(TurnReport {
            player: self.name.clone(),
            action,
            from,
            to: self.location(),
        })
    }

    /// "Player {name} at {location}".
    pub fn describe(&self, world: &World) -> String {
        let location = world
            .location(self.location())
            .map(|l| l.name.as_str())
            .unwrap_or("nowhere");
        format!("Player {} at {}", self.name, location)
    }
}
