//! Game rules that are pure functions of player and deed state.
//!
//! - [`rent`]: property, railroad and utility rent schedules
//! - [`jail`]: the jailed-turn release rules
//!
//! The engine applies these; nothing in here emits events or moves players.

pub mod rent;
pub mod jail;

pub use rent::{property_rent, railroad_rent, tile_rent, utility_rent};
pub use jail::{serve_jail_turn, JailRelease};
