//! Board topology and tile ownership.
//!
//! - [`Board`]: tiles keyed by id, successor links, validation
//! - [`Deeds`]: who owns which tile and what is built on it
//!
//! The board is fixed before play; only `Deeds` changes while a game runs.

mod layout;
mod deeds;

pub use layout::{Board, STANDARD_BOARD_SIZE};
pub use deeds::{Deed, Deeds, MAX_HOUSES};
