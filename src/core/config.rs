//! Game configuration.
//!
//! Tunable rule constants. Board layout (tile prices, tax amounts) is board
//! data, not configuration; see [`games`](crate::games).

use serde::{Deserialize, Serialize};

use super::player::STARTING_BALANCE;

/// Rule constants for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Balance each player starts with.
    pub starting_balance: i64,

    /// Salary credited when passing the first tile.
    pub go_salary: i64,

    /// Fine to leave jail early, or charged on forced release.
    pub jail_fine: i64,

    /// Jailed turns without doubles before forced release.
    pub jail_turn_limit: u32,

    /// Maximum actions resolved in one landing cascade.
    pub cascade_limit: usize,

    /// Sides on each die.
    pub dice_faces: u8,

    /// Seed for dice and card draws.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            go_salary: 200,
            jail_fine: 50,
            jail_turn_limit: 3,
            cascade_limit: 8,
            dice_faces: 6,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Default rules with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_go_salary(mut self, salary: i64) -> Self {
        self.go_salary = salary;
        self
    }

    #[must_use]
    pub fn with_jail_fine(mut self, fine: i64) -> Self {
        self.jail_fine = fine;
        self
    }

    #[must_use]
    pub fn with_jail_turn_limit(mut self, turns: u32) -> Self {
        self.jail_turn_limit = turns;
        self
    }

    /// Set the cascade ceiling. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_cascade_limit(mut self, limit: usize) -> Self {
        self.cascade_limit = limit.max(1);
        self
    }

    #[must_use]
    pub fn with_dice_faces(mut self, faces: u8) -> Self {
        assert!(faces > 0, "Dice must have at least 1 face");
        self.dice_faces = faces;
        self
    }
}
