//! Structural errors raised while building a board or starting a game.
//!
//! Gameplay refusals (unaffordable purchase, paying a fine while free) are
//! not errors; those entry points return `false` and leave state unchanged.

use super::tile::TileId;

/// Errors in board construction and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// `validate()` or a game was started without a first tile.
    #[error("board has no first tile")]
    MissingFirstTile,

    /// The board does not have the expected number of tiles.
    #[error("board has {actual} tiles, expected {expected}")]
    WrongTileCount { expected: usize, actual: usize },

    /// Following `next` from the first tile does not close the ring.
    #[error("tile chain is not circular: broke at {at} after {steps} steps")]
    NotCircular { at: TileId, steps: usize },

    /// Tile ids are positive.
    #[error("{0} is not a valid tile id: ids start at 1")]
    InvalidTileId(TileId),

    /// A tile with this id is already registered.
    #[error("duplicate tile id {0}")]
    DuplicateTile(TileId),

    /// A referenced tile is not registered.
    #[error("unknown tile {0}")]
    UnknownTile(TileId),

    /// An action key did not name any known action.
    #[error("unknown action type `{0}`")]
    UnknownAction(String),

    /// A typed action was attached to the wrong kind of tile.
    #[error("{action} cannot be attached to {tile}: it is a {found} tile")]
    TileTypeMismatch {
        tile: TileId,
        action: &'static str,
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(BoardError::MissingFirstTile.to_string(), "board has no first tile");
        assert_eq!(
            BoardError::WrongTileCount { expected: 40, actual: 39 }.to_string(),
            "board has 39 tiles, expected 40"
        );
        assert_eq!(
            BoardError::DuplicateTile(TileId::new(3)).to_string(),
            "duplicate tile id Tile 3"
        );
        assert_eq!(
            BoardError::TileTypeMismatch {
                tile: TileId::new(5),
                action: "PropertyAction",
                found: "named",
            }
            .to_string(),
            "PropertyAction cannot be attached to Tile 5: it is a named tile"
        );
    }
}
