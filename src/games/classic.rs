//! The standard 40-space board.
//!
//! Built entirely through the public [`Board`] API from a static table, then
//! validated. Actions are attached by key so the table reads like a layout
//! file.

use tracing::debug;

use crate::actions::TileAction;
use crate::board::Board;
use crate::core::PropertyColor::{self, Brown, DarkBlue, Green, LightBlue, Orange, Pink, Red, Yellow};
use crate::core::{BoardError, GameConfig, Tile, TileId, TileKind};
use crate::engine::Game;

/// Tile id of Jail / Just Visiting.
pub const JAIL: TileId = TileId::new(11);

/// Tile id of Go To Jail.
pub const GO_TO_JAIL: TileId = TileId::new(31);

#[derive(Clone, Copy, Debug)]
enum Kind {
    Named,
    Property(PropertyColor),
    Railroad,
    Utility,
}

/// One row of the layout table.
#[derive(Clone, Copy, Debug)]
struct Space {
    id: u32,
    kind: Kind,
    name: &'static str,
    price: i64,
    rent: i64,
    house_price: i64,
    /// Action key and its argument (salary, tax amount or target tile).
    action: Option<(&'static str, u32)>,
}

const fn named(id: u32, name: &'static str, action: Option<(&'static str, u32)>) -> Space {
    Space { id, kind: Kind::Named, name, price: 0, rent: 0, house_price: 0, action }
}

const fn street(
    id: u32,
    name: &'static str,
    color: PropertyColor,
    price: i64,
    rent: i64,
    house_price: i64,
) -> Space {
    Space {
        id,
        kind: Kind::Property(color),
        name,
        price,
        rent,
        house_price,
        action: Some(("property", 0)),
    }
}

const fn railroad(id: u32, name: &'static str) -> Space {
    Space { id, kind: Kind::Railroad, name, price: 200, rent: 0, house_price: 0, action: Some(("railroad", 0)) }
}

const fn utility(id: u32, name: &'static str) -> Space {
    Space { id, kind: Kind::Utility, name, price: 150, rent: 0, house_price: 0, action: Some(("utility", 0)) }
}

const CHEST: Option<(&str, u32)> = Some(("chest", 0));
const CHANCE: Option<(&str, u32)> = Some(("chance", 0));

const SPACES: [Space; 40] = [
    named(1, "GO", Some(("go", 200))),
    street(2, "Mediterranean Avenue", Brown, 60, 2, 50),
    named(3, "Community Chest", CHEST),
    street(4, "Baltic Avenue", Brown, 60, 4, 50),
    named(5, "Income Tax", Some(("tax", 200))),
    railroad(6, "Reading Railroad"),
    street(7, "Oriental Avenue", LightBlue, 100, 6, 50),
    named(8, "Chance", CHANCE),
    street(9, "Vermont Avenue", LightBlue, 100, 6, 50),
    street(10, "Connecticut Avenue", LightBlue, 120, 8, 50),
    named(11, "Jail/Just Visiting", None),
    street(12, "St. Charles Place", Pink, 140, 10, 100),
    utility(13, "Electric Company"),
    street(14, "States Avenue", Pink, 140, 10, 100),
    street(15, "Virginia Avenue", Pink, 160, 12, 100),
    railroad(16, "Pennsylvania Railroad"),
    street(17, "St. James Place", Orange, 180, 14, 100),
    named(18, "Community Chest", CHEST),
    street(19, "Tennessee Avenue", Orange, 180, 14, 100),
    street(20, "New York Avenue", Orange, 200, 16, 100),
    named(21, "Free Parking", None),
    street(22, "Kentucky Avenue", Red, 220, 18, 150),
    named(23, "Chance", CHANCE),
    street(24, "Indiana Avenue", Red, 220, 18, 150),
    street(25, "Illinois Avenue", Red, 240, 20, 150),
    railroad(26, "B&O Railroad"),
    street(27, "Atlantic Avenue", Yellow, 260, 22, 150),
    street(28, "Ventnor Avenue", Yellow, 260, 22, 150),
    utility(29, "Water Works"),
    street(30, "Marvin Gardens", Yellow, 280, 24, 150),
    named(31, "Go To Jail", Some(("gotojail", JAIL.raw()))),
    street(32, "Pacific Avenue", Green, 300, 26, 200),
    street(33, "North Carolina Avenue", Green, 300, 26, 200),
    named(34, "Community Chest", CHEST),
    street(35, "Pennsylvania Avenue", Green, 320, 28, 200),
    railroad(36, "Short Line"),
    named(37, "Chance", CHANCE),
    street(38, "Park Place", DarkBlue, 350, 35, 200),
    named(39, "Luxury Tax", Some(("tax", 100))),
    street(40, "Boardwalk", DarkBlue, 400, 50, 200),
];

impl Space {
    fn tile(&self) -> Tile {
        let id = TileId::new(self.id);
        let kind = match self.kind {
            Kind::Named => TileKind::Named { name: self.name.to_string() },
            Kind::Property(color) => TileKind::Property {
                name: self.name.to_string(),
                color: Some(color),
                price: self.price,
                base_rent: self.rent,
                house_price: self.house_price,
            },
            Kind::Railroad => TileKind::Railroad { name: self.name.to_string(), price: self.price },
            Kind::Utility => TileKind::Utility { name: self.name.to_string(), price: self.price },
        };
        Tile::with_kind(id, kind)
    }
}

/// Build and validate the standard board.
pub fn build() -> Result<Board, BoardError> {
    let mut board = Board::new();

    for (index, space) in SPACES.iter().enumerate() {
        if index == 0 {
            board.set_first_tile(space.tile())?;
        } else {
            board.register_tile(space.tile())?;
        }
    }

    for pair in SPACES.windows(2) {
        board.link(TileId::new(pair[0].id), TileId::new(pair[1].id))?;
    }
    if let (Some(last), Some(first)) = (SPACES.last(), SPACES.first()) {
        board.link(TileId::new(last.id), TileId::new(first.id))?;
    }

    // Every tile is registered by now, so relocation targets resolve.
    for space in &SPACES {
        if let Some((key, argument)) = space.action {
            board.attach_action(TileId::new(space.id), TileAction::from_key(key, argument)?)?;
        }
    }

    board.validate()?;
    debug!(tiles = board.len(), "standard board built");
    Ok(board)
}

/// Start a game on the standard board with seeded random dice.
pub fn new_game(config: GameConfig) -> Result<Game, BoardError> {
    Game::new(build()?, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_valid_ring() {
        let board = build().unwrap();
        assert_eq!(board.len(), 40);
        assert_eq!(board.first_tile(), Some(TileId::new(1)));
        assert_eq!(board.last_tile(), Some(TileId::new(40)));
    }

    #[test]
    fn test_landmarks() {
        let board = build().unwrap();

        let go = board.tile(TileId::new(1)).unwrap();
        assert_eq!(go.action(), Some(&TileAction::Go { salary: 200 }));

        let jail = board.tile(JAIL).unwrap();
        assert_eq!(jail.name(), "Jail/Just Visiting");
        assert!(jail.action().is_none());

        assert_eq!(
            board.tile(GO_TO_JAIL).unwrap().action(),
            Some(&TileAction::GoToJail { jail: JAIL })
        );
        assert_eq!(
            board.tile(TileId::new(5)).unwrap().action(),
            Some(&TileAction::Tax { amount: 200 })
        );
        assert_eq!(
            board.tile(TileId::new(39)).unwrap().action(),
            Some(&TileAction::Tax { amount: 100 })
        );
    }

    #[test]
    fn test_color_groups_have_canonical_sizes() {
        let board = build().unwrap();
        for color in PropertyColor::ALL {
            let count = board.tiles().filter(|t| t.color() == Some(color)).count();
            assert_eq!(count, color.group_size(), "{color:?}");
        }
    }

    #[test]
    fn test_deeds() {
        let board = build().unwrap();
        let boardwalk = board.tile(TileId::new(40)).unwrap();
        assert_eq!(boardwalk.name(), "Boardwalk");
        assert_eq!(boardwalk.price(), 400);
        assert_eq!(boardwalk.base_rent(), 50);
        assert_eq!(boardwalk.house_price(), 200);
        assert_eq!(boardwalk.action(), Some(&TileAction::Property));

        assert_eq!(board.tiles().filter(|t| t.action() == Some(&TileAction::Railroad)).count(), 4);
        assert_eq!(board.tiles().filter(|t| t.action() == Some(&TileAction::Utility)).count(), 2);
        assert_eq!(board.tiles().filter(|t| t.action() == Some(&TileAction::Chance)).count(), 3);
        assert_eq!(board.tiles().filter(|t| t.action() == Some(&TileAction::Chest)).count(), 3);
    }

    #[test]
    fn test_new_game() {
        let mut game = new_game(GameConfig::new(42)).unwrap();
        game.add_player("Alice", "A");
        assert_eq!(game.board().len(), 40);
    }
}
