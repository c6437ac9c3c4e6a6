//! Core engine types: tiles, players, RNG, configuration, errors.
//!
//! These are passive data holders. Cross-cutting control flow lives in
//! [`engine`](crate::engine).

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use tile::{PropertyColor, Tile, TileId, TileKind};
pub use player::{AssetKind, OwnedAsset, Player, PlayerId, STARTING_BALANCE};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::BoardError;
