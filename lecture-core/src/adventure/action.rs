//! Actions a player can take on their turn.

use super::pawn::Pawn;
use super::world::LocationId;
use std::fmt;

/// One possible move, created fresh every turn and discarded once performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Go to the location connected in `direction`.
    Move {
        direction: String,
        target: LocationId,
        target_name: String,
    },
    /// Do nothing this turn.
    SkipTurn,
}

impl Action {
    pub fn description(&self) -> String {
        match self {
            Action::Move {
                direction,
                target_name,
                ..
            } => format!("move {direction} to {target_name}"),
            Action::SkipTurn => "wait one turn".to_string(),
        }
    }

    /// Apply this action to `pawn`.
    pub fn perform(&self, pawn: &mut Pawn) {
        match self {
            Action::Move { target, .. } => pawn.set_location(*target),
            Action::SkipTurn => {}
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_relocates_pawn() {
        let start = LocationId::new();
        let target = LocationId::new();
        let mut pawn = Pawn::new("Alice", start);

        let action = Action::Move {
            direction: "north".to_string(),
            target,
            target_name: "Room 2".to_string(),
        };
        action.perform(&mut pawn);

        assert_eq!(pawn.location(), target);
        assert_eq!(action.to_string(), "move north to Room 2");
    }

    #[test]
    fn test_skip_turn_changes_nothing() {
        let start = LocationId::new();
        let mut pawn = Pawn::new("Alice", start);
        Action::SkipTurn.perform(&mut pawn);
        assert_eq!(pawn.location(), start);
        assert_eq!(Action::SkipTurn.description(), "wait one turn");
    }
}
