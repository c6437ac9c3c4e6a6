//! Ownership and building state, indexed by tile.
//!
//! Kept apart from [`Board`](super::Board) so the board stays immutable during
//! play and players never hold references into tiles.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, TileId};

/// Maximum houses on one property before it must be upgraded to a hotel.
pub const MAX_HOUSES: u8 = 4;

/// Mutable state of one ownable tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deed {
    /// Current owner; `None` while the bank holds it.
    pub owner: Option<PlayerId>,
    /// Houses built (0-4).
    pub houses: u8,
    /// Hotel built.
    pub hotel: bool,
}

/// Per-tile ownership ledger.
#[derive(Clone, Debug, Default)]
pub struct Deeds {
    deeds: FxHashMap<TileId, Deed>,
}

impl Deeds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deed for a tile; an untouched tile reads as bank-owned with no buildings.
    #[must_use]
    pub fn deed(&self, tile: TileId) -> Deed {
        self.deeds.get(&tile).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn owner(&self, tile: TileId) -> Option<PlayerId> {
        self.deed(tile).owner
    }

    #[must_use]
    pub fn is_owned(&self, tile: TileId) -> bool {
        self.owner(tile).is_some()
    }

    #[must_use]
    pub fn houses(&self, tile: TileId) -> u8 {
        self.deed(tile).houses
    }

    #[must_use]
    pub fn has_hotel(&self, tile: TileId) -> bool {
        self.deed(tile).hotel
    }

    /// Assign an owner.
    pub fn set_owner(&mut self, tile: TileId, owner: PlayerId) {
        self.deeds.entry(tile).or_default().owner = Some(owner);
    }

    /// Return a tile to the bank, clearing its buildings.
    pub fn release(&mut self, tile: TileId) {
        self.deeds.remove(&tile);
    }

    /// Add a house. Returns false at the house cap or when a hotel stands.
    pub fn add_house(&mut self, tile: TileId) -> bool {
        let deed = self.deeds.entry(tile).or_default();
        if deed.hotel || deed.houses >= MAX_HOUSES {
            return false;
        }
        deed.houses += 1;
        true
    }

    /// Trade four houses for a hotel. Returns false unless exactly four
    /// houses stand and no hotel yet.
    pub fn build_hotel(&mut self, tile: TileId) -> bool {
        let deed = self.deeds.entry(tile).or_default();
        if deed.hotel || deed.houses != MAX_HOUSES {
            return false;
        }
        deed.houses = 0;
        deed.hotel = true;
        true
    }
}
