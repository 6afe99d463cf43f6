//! Spyglass Map -- read-only snapshot of a bot's view of the game map.
//!
//! This crate holds the data the frame renderer consumes: planets, ships,
//! players, ownership, and the turn counter. It is a snapshot model, not a
//! simulation -- nothing in here moves a ship or resolves a turn. The bot
//! (or a test fixture) builds a [`GameMap`] per turn and hands it to
//! `spyglass-display` for drawing.
//!
//! # Quick Start
//!
//! ```
//! use spyglass_map::{GameMap, Planet, Player, PlayerId, Ship};
//!
//! let mut map = GameMap::new(240.0, 160.0, PlayerId(0));
//! map.add_planet(Planet::new(7, 120.0, 80.0, 9.5, None));
//!
//! let mut me = Player::new(PlayerId(0));
//! me.add_ship(Ship::new(591, 60.0, 40.0, 0.5, PlayerId(0)));
//! map.add_player(me);
//!
//! assert_eq!(map.all_planets().len(), 1);
//! assert!(map.get_me().is_some());
//! assert!((map.ratio() - 160.0 / 240.0).abs() < f64::EPSILON);
//! ```
//!
//! All model types derive serde so snapshots round-trip through JSON, which
//! is how test fixtures and replay demos store them.

#![deny(unsafe_code)]

pub mod entity;
pub mod map;

pub use entity::{Entity, EntityId, Planet, PlayerId, Rgb, Ship};
pub use map::{GameMap, Player};
