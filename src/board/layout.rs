//! Board topology: tiles keyed by id, linked into a ring.
//!
//! The `Board` is populated once by a builder (see [`games`](crate::games))
//! and is read-only during play. It supports:
//! - Registration with duplicate-id detection
//! - Successor links and checked action attachment
//! - Lookup by id (absence is a normal result)
//! - Ring validation for the standard 40-space game

use rustc_hash::FxHashMap;

use crate::actions::TileAction;
use crate::core::{BoardError, Tile, TileId};

/// Number of spaces on the standard board.
pub const STANDARD_BOARD_SIZE: usize = 40;

/// Tiles and their circular linkage.
///
/// ## Usage
///
/// ```
/// use rust_estate::board::Board;
/// use rust_estate::core::{Tile, TileId};
///
/// let mut board = Board::new();
/// board.set_first_tile(Tile::new(TileId::new(1))).unwrap();
/// board.register_tile(Tile::new(TileId::new(2))).unwrap();
/// board.link(TileId::new(1), TileId::new(2)).unwrap();
/// board.link(TileId::new(2), TileId::new(1)).unwrap();
///
/// assert!(board.validate_ring(2).is_ok());
/// assert!(board.tile(TileId::new(3)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    tiles: FxHashMap<TileId, Tile>,
    first: Option<TileId>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile to the lookup table.
    ///
    /// Fails if the id is 0 or already registered; the existing tile and its
    /// links are left untouched. An action already carried by the tile gets
    /// the same kind check as [`attach_action`](Self::attach_action).
    /// Relocation targets may be registered later and are checked by
    /// [`check_targets`](Self::check_targets).
    pub fn register_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        let id = tile.id();
        if id.raw() == 0 {
            return Err(BoardError::InvalidTileId(id));
        }
        if self.tiles.contains_key(&id) {
            return Err(BoardError::DuplicateTile(id));
        }
        if let Some(action) = tile.action() {
            check_kind(&tile, action)?;
        }
        self.tiles.insert(id, tile);
        Ok(())
    }

    /// Register a tile and designate it as the entry tile.
    pub fn set_first_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        let id = tile.id();
        self.register_tile(tile)?;
        self.first = Some(id);
        Ok(())
    }

    /// Entry tile, if designated.
    #[must_use]
    pub fn first_tile(&self) -> Option<TileId> {
        self.first
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    /// Number of registered tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles (unordered).
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Set `from`'s successor to `to`. Both tiles must be registered.
    pub fn link(&mut self, from: TileId, to: TileId) -> Result<(), BoardError> {
        if !self.tiles.contains_key(&to) {
            return Err(BoardError::UnknownTile(to));
        }
        let tile = self.tiles.get_mut(&from).ok_or(BoardError::UnknownTile(from))?;
        tile.set_next(to);
        Ok(())
    }

    /// Attach an action to a registered tile.
    ///
    /// Typed actions must match the tile kind (a `PropertyAction` needs a
    /// property tile), and actions that relocate the player must point at a
    /// registered tile.
    pub fn attach_action(&mut self, id: TileId, action: TileAction) -> Result<(), BoardError> {
        if let Some(target) = action.target() {
            if !self.tiles.contains_key(&target) {
                return Err(BoardError::UnknownTile(target));
            }
        }

        let tile = self.tiles.get_mut(&id).ok_or(BoardError::UnknownTile(id))?;
        check_kind(tile, &action)?;

        tile.set_action(action);
        Ok(())
    }

    /// Every relocating action must point at a registered tile.
    pub fn check_targets(&self) -> Result<(), BoardError> {
        for tile in self.tiles.values() {
            if let Some(target) = tile.action().and_then(TileAction::target) {
                if !self.tiles.contains_key(&target) {
                    return Err(BoardError::UnknownTile(target));
                }
            }
        }
        Ok(())
    }

    /// Successor of a tile, if it is linked to a registered tile.
    #[must_use]
    pub fn next_of(&self, id: TileId) -> Option<TileId> {
        self.tile(id)?
            .next()
            .filter(|next| self.tiles.contains_key(next))
    }

    /// Last tile of the chain starting at the first tile.
    ///
    /// For a linear board this is the tile with no successor; for a ring it
    /// is the tile that links back to the first tile.
    #[must_use]
    pub fn last_tile(&self) -> Option<TileId> {
        let first = self.first?;
        let mut current = first;

        for _ in 0..self.tiles.len() {
            match self.next_of(current) {
                Some(next) if next == first => return Some(current),
                Some(next) => current = next,
                None => return Some(current),
            }
        }

        Some(current)
    }

    /// Validate the standard 40-space ring.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.validate_ring(STANDARD_BOARD_SIZE)
    }

    /// Validate a ring of `expected` tiles.
    ///
    /// Following `next` from the first tile must visit `expected` distinct
    /// tiles and arrive back at the first tile on exactly the last step.
    /// Relocation targets must all be registered.
    pub fn validate_ring(&self, expected: usize) -> Result<(), BoardError> {
        let first = self.first.ok_or(BoardError::MissingFirstTile)?;

        if self.tiles.len() != expected {
            return Err(BoardError::WrongTileCount {
                expected,
                actual: self.tiles.len(),
            });
        }

        let mut current = first;
        for step in 1..=expected {
            let next = self
                .next_of(current)
                .ok_or(BoardError::NotCircular { at: current, steps: step - 1 })?;

            if next == first && step < expected {
                return Err(BoardError::NotCircular { at: current, steps: step });
            }
            current = next;
        }

        if current != first {
            return Err(BoardError::NotCircular { at: current, steps: expected });
        }

        self.check_targets()
    }
}

/// Typed actions must sit on a tile of the matching kind.
fn check_kind(tile: &Tile, action: &TileAction) -> Result<(), BoardError> {
    match action.required_kind() {
        Some(required) if tile.kind().label() != required => Err(BoardError::TileTypeMismatch {
            tile: tile.id(),
            action: action.name(),
            found: tile.kind().label(),
        }),
        _ => Ok(()),
    }
}
