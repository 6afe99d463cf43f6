//! Replay a small scripted match and save one frame per turn.
//!
//! Run headless (frames only):
//!   cargo run --example replay_view -p spyglass-display
//!
//! Run with a live window (space pauses, escape quits):
//!   cargo run --example replay_view --features window -p spyglass-display
//!
//! Frames land in `stats/botthought<turn>.jpeg`.

use spyglass_display::{DisplayConfig, FrameRenderer};
use spyglass_map::{Entity, EntityId, GameMap, Planet, Player, PlayerId, Rgb, Ship};

/// Snapshot for one turn of a scripted two-player skirmish: our wing of
/// three ships flies toward the center planet while the enemy circles it.
fn turn_snapshot(turn: u32) -> GameMap {
    let t = f64::from(turn);
    let mut map = GameMap::new(240.0, 160.0, PlayerId(0));
    map.set_turn(turn);

    map.add_planet(Planet::new(0, 120.0, 80.0, 14.0, None));
    map.add_planet(Planet::new(1, 40.0, 40.0, 8.0, Some(PlayerId(0))));
    map.add_planet(Planet::new(2, 200.0, 120.0, 8.0, Some(PlayerId(1))));

    let mut me = Player::new(PlayerId(0));
    for n in 0..3 {
        me.add_ship(Ship::new(
            591 + n,
            30.0 + 2.0 * t,
            50.0 + 4.0 * f64::from(n),
            0.5,
            PlayerId(0),
        ));
    }
    map.add_player(me);

    let mut foe = Player::new(PlayerId(1)).with_color(Rgb(220, 60, 60));
    let angle = t * 0.2;
    foe.add_ship(Ship::new(
        100,
        120.0 + 30.0 * angle.cos(),
        80.0 + 30.0 * angle.sin(),
        0.5,
        PlayerId(1),
    ));
    map.add_player(foe);

    map
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = DisplayConfig {
        focus_ship: Some(EntityId(591)),
        ..DisplayConfig::default()
    };

    // The renderer never creates the stats directory; the host does.
    std::fs::create_dir_all(&config.stats_dir)?;

    let first = turn_snapshot(1);
    let mut renderer = FrameRenderer::new(&first, config);

    #[cfg(feature = "window")]
    renderer.attach_window("Spyglass -- space pauses, escape quits")?;

    for turn in 1..=60 {
        let map = turn_snapshot(turn);
        renderer.clear();

        // Overlay the wing's heading toward the neutral planet, the way a
        // bot would trace its navigation plans.
        if let Some(me) = map.get_me() {
            for ship in me.all_ships() {
                renderer.draw_line(ship.position(), (120.0, 80.0), Rgb(0, 160, 0), 1);
            }
        }

        let path = renderer.render(&map)?;
        tracing::info!(turn, path = %path.display(), "rendered turn");
    }

    Ok(())
}
