//! Entities on the map: planets, ships, and the ids that tie them to owners.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Ids and colors
// ---------------------------------------------------------------------------

/// Identifies a player. Halite-style engines hand out small consecutive ids
/// starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a planet or ship within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub i32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An 8-bit RGB color triple.
///
/// Lives in the map crate because a player may carry an explicit display
/// color as part of the snapshot; the renderer uses the same type for
/// everything it draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ---------------------------------------------------------------------------
// Entity trait
// ---------------------------------------------------------------------------

/// Anything the renderer can draw: a position, a circular footprint, an
/// optional owner, and an id to stamp next to it.
///
/// Planets and ships both implement this so the renderer has a single
/// color-and-draw path for them.
pub trait Entity {
    /// World-space center of the entity.
    fn position(&self) -> (f64, f64);
    /// Radius of the circular footprint in world units.
    fn radius(&self) -> f64;
    /// Owning player, if any. Unowned planets return `None`.
    fn owner(&self) -> Option<PlayerId>;
    /// Match-wide entity id.
    fn id(&self) -> EntityId;
}

// ---------------------------------------------------------------------------
// Planet
// ---------------------------------------------------------------------------

/// A planet: fixed position, large radius, owner set once captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    id: EntityId,
    x: f64,
    y: f64,
    radius: f64,
    owner: Option<PlayerId>,
}

impl Planet {
    pub fn new(id: i32, x: f64, y: f64, radius: f64, owner: Option<PlayerId>) -> Self {
        Self {
            id: EntityId(id),
            x,
            y,
            radius,
            owner,
        }
    }
}

impl Entity for Planet {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Ship
// ---------------------------------------------------------------------------

/// A ship. Always owned; the owner is duplicated here (rather than derived
/// from the containing player) so a ship can be drawn on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    id: EntityId,
    x: f64,
    y: f64,
    radius: f64,
    owner: PlayerId,
}

impl Ship {
    pub fn new(id: i32, x: f64, y: f64, radius: f64, owner: PlayerId) -> Self {
        Self {
            id: EntityId(id),
            x,
            y,
            radius,
            owner,
        }
    }
}

impl Entity for Ship {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn radius(&self) -> f64 {
        self.radius
    }

    fn owner(&self) -> Option<PlayerId> {
        Some(self.owner)
    }

    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_entity_accessors() {
        let p = Planet::new(3, 10.0, 20.0, 5.0, Some(PlayerId(1)));
        assert_eq!(p.position(), (10.0, 20.0));
        assert_eq!(p.radius(), 5.0);
        assert_eq!(p.owner(), Some(PlayerId(1)));
        assert_eq!(p.id(), EntityId(3));
    }

    #[test]
    fn unowned_planet_has_no_owner() {
        let p = Planet::new(0, 0.0, 0.0, 1.0, None);
        assert_eq!(p.owner(), None);
    }

    #[test]
    fn ship_is_always_owned() {
        let s = Ship::new(591, 1.0, 2.0, 0.5, PlayerId(2));
        assert_eq!(s.owner(), Some(PlayerId(2)));
        assert_eq!(s.id().to_string(), "591");
    }
}
