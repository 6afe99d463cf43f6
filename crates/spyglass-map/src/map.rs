//! The per-turn map snapshot and its query interface.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityId, Planet, PlayerId, Rgb, Ship};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A player and the ships it owns this turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    /// Explicit display color, if the bot author assigned one. When absent
    /// the renderer derives a hue from the player id.
    color: Option<Rgb>,
    ships: Vec<Ship>,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            color: None,
            ships: Vec::new(),
        }
    }

    /// Assign an explicit display color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn all_ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Look up one of this player's ships by id.
    pub fn ship(&self, id: EntityId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id() == id)
    }
}

// ---------------------------------------------------------------------------
// GameMap
// ---------------------------------------------------------------------------

/// One turn's snapshot of everything the bot can see.
///
/// Width and height are world units and never change between turns of the
/// same match; the renderer fixes its aspect ratio from them at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMap {
    width: f64,
    height: f64,
    turn: u32,
    me: PlayerId,
    players: Vec<Player>,
    planets: Vec<Planet>,
}

impl GameMap {
    pub fn new(width: f64, height: f64, me: PlayerId) -> Self {
        Self {
            width,
            height,
            turn: 0,
            me,
            players: Vec::new(),
            planets: Vec::new(),
        }
    }

    pub fn add_planet(&mut self, planet: Planet) {
        self.planets.push(planet);
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn set_turn(&mut self, turn: u32) {
        self.turn = turn;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Height over width. The renderer derives its display height from this.
    pub fn ratio(&self) -> f64 {
        self.height / self.width
    }

    pub fn turn_num(&self) -> u32 {
        self.turn
    }

    /// The local player's id.
    pub fn me(&self) -> PlayerId {
        self.me
    }

    /// The local player, if present in this snapshot.
    pub fn get_me(&self) -> Option<&Player> {
        self.player(self.me)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn all_players(&self) -> &[Player] {
        &self.players
    }

    pub fn all_planets(&self) -> &[Planet] {
        &self.planets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_player_map() -> GameMap {
        let mut map = GameMap::new(100.0, 50.0, PlayerId(0));
        map.add_planet(Planet::new(0, 25.0, 25.0, 6.0, None));
        map.add_planet(Planet::new(1, 75.0, 25.0, 6.0, Some(PlayerId(1))));

        let mut me = Player::new(PlayerId(0));
        me.add_ship(Ship::new(10, 10.0, 10.0, 0.5, PlayerId(0)));
        me.add_ship(Ship::new(11, 12.0, 10.0, 0.5, PlayerId(0)));
        map.add_player(me);

        let mut foe = Player::new(PlayerId(1)).with_color(Rgb(200, 40, 40));
        foe.add_ship(Ship::new(20, 90.0, 40.0, 0.5, PlayerId(1)));
        map.add_player(foe);

        map.set_turn(42);
        map
    }

    #[test]
    fn ratio_is_height_over_width() {
        let map = two_player_map();
        assert!((map.ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn get_me_finds_local_player() {
        let map = two_player_map();
        let me = map.get_me().expect("local player should be present");
        assert_eq!(me.id(), PlayerId(0));
        assert_eq!(me.all_ships().len(), 2);
    }

    #[test]
    fn ship_lookup_by_id() {
        let map = two_player_map();
        let me = map.get_me().unwrap();
        assert!(me.ship(EntityId(11)).is_some());
        assert!(me.ship(EntityId(999)).is_none());
    }

    #[test]
    fn explicit_player_color_survives() {
        let map = two_player_map();
        let foe = map.player(PlayerId(1)).unwrap();
        assert_eq!(foe.color(), Some(Rgb(200, 40, 40)));
    }

    #[test]
    fn missing_player_lookup_is_none() {
        let map = two_player_map();
        assert!(map.player(PlayerId(9)).is_none());
    }
}
