//! A text adventure illustrating the Command pattern.
//!
//! Every turn a [`Player`] asks its [`Pawn`] for the moves available at its
//! current [`Location`], adds the option of skipping the turn, lets its
//! [`SelectionPolicy`] pick one [`Action`] and performs it.
//!
//! ```
//! use lecture_core::adventure::{simple_locations, FirstAction, Game, WorldFactory};
//!
//! let world = WorldFactory::new().create(&simple_locations()).unwrap();
//! let mut game = Game::new(world);
//! game.add_player("Alice", "Room 1", Box::new(FirstAction)).unwrap();
//!
//! let reports = game.play_round().unwrap();
//! assert_eq!(reports[0].to_string(), "Alice performs: move north to Room 2");
//! ```

pub mod action;
pub mod game;
pub mod pawn;
pub mod player;
pub mod world;

pub use action::Action;
pub use game::{AdventureConfig, Game};
pub use pawn::Pawn;
pub use player::{
    FirstAction, Player, PolicyKind, RandomAction, SelectionPolicy, TurnError, TurnReport,
};
pub use world::{
    simple_locations, ConnectionDescription, Location, LocationConnection, LocationDescription,
    LocationId, World, WorldError, WorldFactory,
};
