//! Dice.
//!
//! The engine rolls through the [`Dice`] trait so tests can script exact
//! rolls with [`FixedDice`] while real games use seeded [`RandomDice`].

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// One roll of two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.first as u32 + self.second as u32
    }

    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.first == self.second
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.first, self.second)
    }
}

/// Source of dice rolls.
pub trait Dice {
    fn roll(&mut self) -> DiceRoll;
}

/// Seeded pseudo-random dice.
#[derive(Clone, Debug)]
pub struct RandomDice {
    rng: GameRng,
    faces: u8,
}

impl RandomDice {
    #[must_use]
    pub fn new(rng: GameRng, faces: u8) -> Self {
        Self { rng, faces }
    }
}

impl Dice for RandomDice {
    fn roll(&mut self) -> DiceRoll {
        DiceRoll::new(self.rng.roll_die(self.faces), self.rng.roll_die(self.faces))
    }
}

/// Scripted dice that cycle through a fixed list of rolls.
///
/// ```
/// use rust_estate::engine::{Dice, DiceRoll, FixedDice};
///
/// let mut dice = FixedDice::new([DiceRoll::new(1, 1), DiceRoll::new(2, 3)]);
/// assert_eq!(dice.roll().total(), 2);
/// assert_eq!(dice.roll().total(), 5);
/// assert_eq!(dice.roll().total(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FixedDice {
    rolls: Vec<DiceRoll>,
    cursor: usize,
}

impl FixedDice {
    /// Cycle through `rolls`. An empty list rolls double ones.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = DiceRoll>) -> Self {
        let mut rolls: Vec<DiceRoll> = rolls.into_iter().collect();
        if rolls.is_empty() {
            rolls.push(DiceRoll::new(1, 1));
        }
        Self { rolls, cursor: 0 }
    }

    /// Always roll the same pair.
    #[must_use]
    pub fn always(first: u8, second: u8) -> Self {
        Self::new([DiceRoll::new(first, second)])
    }
}

impl Dice for FixedDice {
    fn roll(&mut self) -> DiceRoll {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor = (self.cursor + 1) % self.rolls.len();
        roll
    }
}
