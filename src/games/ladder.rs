//! Ten-tile linear demo board with a single ladder.

use crate::actions::TileAction;
use crate::board::Board;
use crate::core::{BoardError, Tile, TileId};

/// Number of tiles.
pub const SIZE: u32 = 10;

/// Tile carrying the ladder.
pub const LADDER_FOOT: TileId = TileId::new(3);

/// Where the ladder leads.
pub const LADDER_TOP: TileId = TileId::new(7);

/// Build tiles 1..=10 linked in a line, with a ladder from 3 to 7.
///
/// The last tile has no successor; movement stops there.
pub fn build() -> Result<Board, BoardError> {
    let mut board = Board::new();
    board.set_first_tile(Tile::new(TileId::new(1)))?;
    for id in 2..=SIZE {
        board.register_tile(Tile::new(TileId::new(id)))?;
    }
    for id in 1..SIZE {
        board.link(TileId::new(id), TileId::new(id + 1))?;
    }
    board.attach_action(LADDER_FOOT, TileAction::Ladder { destination: LADDER_TOP })?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let board = build().unwrap();

        assert_eq!(board.len(), 10);
        assert_eq!(board.last_tile(), Some(TileId::new(10)));
        assert!(board.next_of(TileId::new(10)).is_none());
        assert_eq!(
            board.tile(LADDER_FOOT).unwrap().action(),
            Some(&TileAction::Ladder { destination: LADDER_TOP })
        );
        assert!(board.validate_ring(10).is_err());
    }
}
