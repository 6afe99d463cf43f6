//! Spyglass Display -- frame renderer for a bot's view of the game map.
//!
//! Draws one frame per turn from a [`spyglass_map::GameMap`] snapshot:
//! planets and ships as ownership-colored circles with id labels, an
//! optional zoomed view tracking one of the bot's ships, and a quarter-size
//! mini-map inset while zoomed. Every frame is saved as
//! `stats/botthought<turn>.jpeg` so a match leaves a browsable trail of
//! what the bot believed each turn.
//!
//! The renderer performs no game logic. It records draw operations, runs
//! them through one of three projections (unzoomed, zoomed, mini-map), and
//! rasterizes into a software canvas. With the `window` feature a minifb
//! window mirrors the canvas live and polls the keyboard: space pauses,
//! escape / ctrl+C / closing the window ends the run with
//! [`DisplayError::Quit`].
//!
//! # Quick Start
//!
//! ```
//! use spyglass_display::{DisplayConfig, FrameRenderer};
//! use spyglass_map::{GameMap, Planet, Player, PlayerId, Ship};
//!
//! let mut map = GameMap::new(100.0, 50.0, PlayerId(0));
//! map.add_planet(Planet::new(0, 50.0, 25.0, 6.0, None));
//! let mut me = Player::new(PlayerId(0));
//! me.add_ship(Ship::new(1, 10.0, 10.0, 0.5, PlayerId(0)));
//! map.add_player(me);
//!
//! let renderer = FrameRenderer::new(&map, DisplayConfig::default());
//! assert_eq!(renderer.viewport().display_size(), (1200, 600));
//! ```

#![deny(unsafe_code)]

pub mod canvas;
pub mod color;
pub mod error;
pub mod glyph;
pub mod ops;
pub mod render;
pub mod viewport;
#[cfg(feature = "window")]
pub mod window;

pub use canvas::Canvas;
pub use error::DisplayError;
pub use ops::{DrawOp, Fill};
pub use render::{DisplayConfig, FrameRenderer};
pub use viewport::{Scale, Viewport, ZoomFocus};
#[cfg(feature = "window")]
pub use window::Presenter;
