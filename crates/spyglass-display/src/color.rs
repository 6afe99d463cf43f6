//! Ownership color rules.
//!
//! Every entity gets exactly one fill color:
//!
//! | Owner | Color |
//! |-------|-------|
//! | none | black |
//! | the local player, no explicit color | blue |
//! | another player, no explicit color | `(255, 64*id mod 256, 255 - that)` |
//! | any player with an explicit color | that color |

use spyglass_map::{Entity, GameMap, PlayerId, Rgb};

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);

/// Fill color for the local player's entities.
pub const SELF_BLUE: Rgb = Rgb(0, 0, 255);

/// Deterministic hue for a player without an explicit color.
///
/// `64 * id` wraps mod 256, so ids beyond 3 still produce a valid (if
/// recycled) hue instead of overflowing.
pub fn player_hue(id: PlayerId) -> Rgb {
    let g = (64u32.wrapping_mul(id.0) % 256) as u8;
    Rgb(255, g, 255 - g)
}

/// Resolve the fill color for an entity against the current snapshot.
///
/// An explicit player color always wins; the local player falls back to
/// [`SELF_BLUE`]; everyone else gets [`player_hue`]. Unowned entities are
/// black.
pub fn entity_color<E: Entity>(map: &GameMap, ent: &E) -> Rgb {
    let Some(owner) = ent.owner() else {
        return BLACK;
    };
    if let Some(explicit) = map.player(owner).and_then(|p| p.color()) {
        return explicit;
    }
    if owner == map.me() {
        SELF_BLUE
    } else {
        player_hue(owner)
    }
}
