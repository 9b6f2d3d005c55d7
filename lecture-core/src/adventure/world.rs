//! Adventure world: locations and the connections between them.
//!
//! Locations live in a [`World`] keyed by [`LocationId`]. Connections store
//! the destination's id, so the (usually cyclic) map never holds references
//! to itself.

use super::action::Action;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Error type for building and querying a world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("unknown location: {0}")]
    UnknownLocation(String),

    #[error("unknown location id: {0}")]
    UnknownLocationId(LocationId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid world description: {0}")]
    Parse(#[from] serde_json::Error),
}

// ============================================================================
// Locations
// ============================================================================

/// Unique identifier for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A location in the adventure world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    /// Outgoing connections in the order they were added.
    pub connections: Vec<LocationConnection>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            description: String::new(),
            connections: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The location reached by going `direction`, if any.
    pub fn connection(&self, direction: &str) -> Option<LocationId> {
        self.connections
            .iter()
            .find(|c| c.direction == direction)
            .map(|c| c.destination_id)
    }

    /// One move action per outgoing connection.
    pub fn move_actions(&self) -> Vec<Action> {
        self.connections
            .iter()
            .map(|c| Action::Move {
                direction: c.direction.clone(),
                target: c.destination_id,
                target_name: c.destination_name.clone(),
            })
            .collect()
    }

    /// Add or replace the connection in `direction`.
    fn connect(&mut self, direction: String, destination: &Location) {
        let connection = LocationConnection {
            destination_id: destination.id,
            destination_name: destination.name.clone(),
            direction,
        };
        match self
            .connections
            .iter_mut()
            .find(|c| c.direction == connection.direction)
        {
            Some(existing) => *existing = connection,
            None => self.connections.push(connection),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConnection {
    pub destination_id: LocationId,
    pub destination_name: String,
    pub direction: String,
}

// ============================================================================
// World
// ============================================================================

/// All locations of an adventure.
#[derive(Debug, Clone, Default)]
pub struct World {
    locations: HashMap<LocationId, Location>,
    by_name: HashMap<String, LocationId>,
    order: Vec<LocationId>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Names must be unique within a world.
    pub fn add_location(&mut self, location: Location) -> Result<LocationId, WorldError> {
        if self.by_name.contains_key(&location.name) {
            return Err(WorldError::DuplicateLocation(location.name));
        }
        let id = location.id;
        self.by_name.insert(location.name.clone(), id);
        self.order.push(id);
        self.locations.insert(id, location);
        Ok(id)
    }

    /// Connect `from` to `to` in `direction`. Connections are one-way.
    pub fn connect(
        &mut self,
        from: LocationId,
        direction: impl Into<String>,
        to: LocationId,
    ) -> Result<(), WorldError> {
        let destination = self.get(to)?.clone();
        let origin = self
            .locations
            .get_mut(&from)
            .ok_or(WorldError::UnknownLocationId(from))?;
        origin.connect(direction.into(), &destination);
        Ok(())
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Like [`World::location`], but a missing id is an error.
    pub fn get(&self, id: LocationId) -> Result<&Location, WorldError> {
        self.location(id).ok_or(WorldError::UnknownLocationId(id))
    }

    pub fn location_named(&self, name: &str) -> Option<&Location> {
        self.by_name.get(name).and_then(|id| self.locations.get(id))
    }

    pub fn id_of(&self, name: &str) -> Result<LocationId, WorldError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| WorldError::UnknownLocation(name.to_string()))
    }

    /// Locations in the order they were added.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.order.iter().filter_map(|id| self.locations.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ============================================================================
// World descriptions
// ============================================================================

/// Serializable description of one location, connections given by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDescription {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub connections: Vec<ConnectionDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescription {
    pub direction: String,
    pub destination: String,
}

impl LocationDescription {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            connections: Vec::new(),
        }
    }

    pub fn with_connection(mut self, direction: impl Into<String>, destination: impl Into<String>) -> Self {
        self.connections.push(ConnectionDescription {
            direction: direction.into(),
            destination: destination.into(),
        });
        self
    }
}

/// Builds worlds from location descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldFactory;

impl WorldFactory {
    pub fn new() -> Self {
        Self
    }

    /// Build a world: every location first, then every connection, so
    /// descriptions may refer to locations listed after them.
    pub fn create(&self, descriptions: &[LocationDescription]) -> Result<World, WorldError> {
        let mut world = World::new();
        for description in descriptions {
            world.add_location(Location::new(&description.name).with_description(&description.description))?;
        }

        for description in descriptions {
            let from = world.id_of(&description.name)?;
            for connection in &description.connections {
                let to = world.id_of(&connection.destination)?;
                world.connect(from, connection.direction.clone(), to)?;
            }
        }

        tracing::debug!(locations = world.len(), "created world");
        Ok(world)
    }

    /// Build a world from a JSON array of location descriptions.
    pub fn from_json(&self, json: &str) -> Result<World, WorldError> {
        let descriptions: Vec<LocationDescription> = serde_json::from_str(json)?;
        self.create(&descriptions)
    }

    /// Build a world from a JSON description file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<World, WorldError> {
        let json = std::fs::read_to_string(path)?;
        self.from_json(&json)
    }
}

/// A small four-room world used by the demos.
pub fn simple_locations() -> Vec<LocationDescription> {
    vec![
        LocationDescription::new("Room 1", "A small, dimly lit room.")
            .with_connection("north", "Room 2")
            .with_connection("east", "Room 3"),
        LocationDescription::new("Room 2", "A draughty hall with a high ceiling.")
            .with_connection("south", "Room 1"),
        LocationDescription::new("Room 3", "A cramped storeroom.")
            .with_connection("west", "Room 1")
            .with_connection("north", "Room 4"),
        LocationDescription::new("Room 4", "A quiet library.")
            .with_connection("south", "Room 3"),
    ]
}
