//! The game engine: turn state machine, dice and entry points.
//!
//! - [`Game`]: owns players, deeds, dice and observers; exposes queries and
//!   the purchase, building and jail-fine entry points
//! - [`TurnOutcome`]/[`TurnPhase`]: where a turn ended up
//! - [`Dice`]: roll source, with [`RandomDice`] and scripted [`FixedDice`]
//!
//! The engine is single-threaded and synchronous. Each entry point runs to
//! completion and notifies observers in order before returning.

pub mod dice;
pub mod game;
pub mod turn;

pub use dice::{Dice, DiceRoll, FixedDice, RandomDice};
pub use game::{Game, TurnPhase};
pub use turn::TurnOutcome;
