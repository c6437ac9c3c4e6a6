//! Rent schedules.
//!
//! Pure functions; nothing here touches balances. The action resolver
//! and the engine's rent query both go through [`tile_rent`].

use crate::board::Deed;
use crate::core::{Player, Tile, TileKind};

/// Rent multiplier with a hotel.
pub const HOTEL_MULTIPLIER: i64 = 50;

/// Extra base-rent multiples per house.
pub const HOUSE_MULTIPLIER: i64 = 5;

/// Rent for a property.
///
/// Without a monopoly the base rent applies regardless of buildings.
/// With one: hotel `base*50`, houses `base*(1+5*houses)`, bare `base*2`.
#[must_use]
pub fn property_rent(base: i64, monopoly: bool, houses: u8, hotel: bool) -> i64 {
    if !monopoly {
        return base;
    }
    if hotel {
        base * HOTEL_MULTIPLIER
    } else if houses > 0 {
        base * (1 + HOUSE_MULTIPLIER * i64::from(houses))
    } else {
        base * 2
    }
}

/// Railroad rent by how many railroads the owner holds.
#[must_use]
pub fn railroad_rent(owned: usize) -> i64 {
    match owned {
        1 => 25,
        2 => 50,
        3 => 100,
        4 => 200,
        _ => 0,
    }
}

/// Utility rent: the dice total times 4 when the owner holds exactly one
/// utility, times 10 otherwise.
#[must_use]
pub fn utility_rent(last_roll: u32, owned: usize) -> i64 {
    let multiplier = if owned == 1 { 4 } else { 10 };
    i64::from(last_roll) * multiplier
}

/// Rent a visitor owes on `tile` given its deed and owner.
///
/// Unowned and non-ownable tiles cost nothing. `last_roll` only matters for
/// utilities.
#[must_use]
pub fn tile_rent(tile: &Tile, deed: Deed, owner: Option<&Player>, last_roll: u32) -> i64 {
    let Some(owner) = owner else {
        return 0;
    };

    match tile.kind() {
        TileKind::Property { color, base_rent, .. } => {
            property_rent(*base_rent, owner.has_monopoly(*color), deed.houses, deed.hotel)
        }
        TileKind::Railroad { .. } => railroad_rent(owner.railroad_count()),
        TileKind::Utility { .. } => utility_rent(last_roll, owner.utility_count()),
        TileKind::Plain | TileKind::Named { .. } => 0,
    }
}
