//! # rust-estate
//!
//! A turn-based property-trading board game engine.
//!
//! ## Design Principles
//!
//! 1. **Boards Are Data**: The 40-space ring and the 10-tile ladder demo are
//!    two boards for one engine. Tile kinds and actions are closed enums
//!    dispatched by `match`.
//!
//! 2. **Engine Owns Mutation**: Boards are read-only once play starts.
//!    Ownership and buildings live in [`Deeds`](board::Deeds), keyed by tile
//!    id, and only the engine writes them.
//!
//! 3. **Observers Listen**: Events go out synchronously with a read-only
//!    view of the game. Observers cannot call back into the engine.
//!
//! 4. **Deterministic**: Dice and card draws come from seeded ChaCha8
//!    streams, and tests script rolls with [`FixedDice`](engine::FixedDice).
//!
//! ## Modules
//!
//! - `core`: Tile and player models, RNG, configuration, errors
//! - `board`: Board topology, validation, deeds
//! - `actions`: Tile actions and their resolution
//! - `rules`: Rent schedules and jail release
//! - `engine`: Turn state machine and entry points
//! - `observer`: Event protocol, recorder, tracing logger
//! - `games`: Standard and ladder boards
//!
//! ## Example
//!
//! ```
//! use rust_estate::{games::classic, GameConfig, TracingObserver, TurnOutcome};
//!
//! let mut game = classic::new_game(GameConfig::new(7)).unwrap();
//! game.add_observer(Box::new(TracingObserver::new()));
//! let alice = game.add_player("Alice", "Car");
//! game.add_player("Bob", "Hat");
//!
//! if let TurnOutcome::Moved { pending_purchase: Some(tile), .. } = game.play_turn() {
//!     game.buy_property(alice, tile);
//!     game.end_turn();
//! }
//! assert_eq!(game.players().len(), 2);
//! ```

pub mod core;
pub mod board;
pub mod actions;
pub mod rules;
pub mod engine;
pub mod observer;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    AssetKind, BoardError, GameConfig, GameRng, OwnedAsset, Player, PlayerId, PropertyColor,
    Tile, TileId, TileKind, STARTING_BALANCE,
};

pub use crate::board::{Board, Deed, Deeds, MAX_HOUSES, STANDARD_BOARD_SIZE};

pub use crate::actions::{ActionContext, ActionOutcome, ActionResolver, TileAction};

pub use crate::rules::{property_rent, railroad_rent, serve_jail_turn, tile_rent, utility_rent, JailRelease};

pub use crate::engine::{Dice, DiceRoll, FixedDice, Game, RandomDice, TurnOutcome, TurnPhase};

pub use crate::observer::{EventRecorder, GameEvent, GameObserver, GameView, ObserverSet, TracingObserver};
