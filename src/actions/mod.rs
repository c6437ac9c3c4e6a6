//! Tile actions: what happens when a player lands on a tile.
//!
//! [`TileAction`] is a closed set of variants dispatched by pattern match in
//! [`ActionResolver`]. Actions perform only their direct effect; the engine
//! handles bankruptcy and cascades after each one returns.

pub mod action;
pub mod resolver;

pub use action::{TileAction, CHANCE_OUTCOMES, CHEST_OUTCOMES};
pub use resolver::{ActionContext, ActionOutcome, ActionResolver};
