//! The piece that stands on the board.

use super::action::Action;
use super::world::{LocationId, World, WorldError};

/// Position state of a player: a name and exactly one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pawn {
    pub name: String,
    location: LocationId,
}

impl Pawn {
    pub fn new(name: impl Into<String>, location: LocationId) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    pub fn set_location(&mut self, location: LocationId) {
        self.location = location;
    }

    /// Moves available from the current location.
    pub fn actions(&self, world: &World) -> Result<Vec<Action>, WorldError> {
        Ok(world.get(self.location)?.move_actions())
    }

    pub fn perform(&mut self, action: &Action) {
        action.perform(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::world::{simple_locations, WorldFactory};

    #[test]
    fn test_pawn_moves_through_world() {
        let world = WorldFactory::new().create(&simple_locations()).unwrap();
        let mut pawn = Pawn::new("Alice", world.id_of("Room 1").unwrap());

        let actions = pawn.actions(&world).unwrap();
        assert_eq!(actions.len(), 2);

        pawn.perform(&actions[0]);
        assert_eq!(pawn.location(), world.id_of("Room 2").unwrap());
        assert_eq!(pawn.actions(&world).unwrap().len(), 1);
    }

    #[test]
    fn test_pawn_outside_world() {
        let world = WorldFactory::new().create(&simple_locations()).unwrap();
        let pawn = Pawn::new("Lost", LocationId::new());
        assert!(matches!(
            pawn.actions(&world),
            Err(WorldError::UnknownLocationId(_))
        ));
    }
}
