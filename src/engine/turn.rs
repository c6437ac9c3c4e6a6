//! Turn execution.
//!
//! One call to [`Game::play_turn`] runs a whole turn:
//!
//! 1. A flagged player sits out: flag cleared, skip emitted, rotation advanced.
//! 2. Two dice are rolled and the total recorded.
//! 3. A jailed player serves a jail turn; if still jailed the turn ends.
//! 4. The player walks the total along `next` links. Passing through the
//!    first tile pays salary; landing on it is left to its own action.
//! 5. Landing actions cascade while an action relocates the player, up to
//!    [`GameConfig::cascade_limit`](crate::core::GameConfig) actions.
//! 6. Rotation advances, skipping (and clearing) flagged players, unless the
//!    player was offered a purchase. Then the game waits in
//!    [`TurnPhase::AwaitingDecision`] until [`Game::end_turn`], a purchase
//!    followed by `end_turn`, or the next `play_turn`.
//!
//! Bankruptcy is checked after every action.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::actions::{ActionContext, ActionOutcome, ActionResolver, TileAction};
use crate::core::{PlayerId, TileId};
use crate::observer::GameEvent;
use crate::rules::serve_jail_turn;

use super::dice::DiceRoll;
use super::game::{Game, TurnPhase};

/// What a call to [`Game::play_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game is over (or has no players); nothing happened.
    GameOver,
    /// The player sat out.
    Skipped { player: PlayerId },
    /// The player rolled in jail and stays there.
    StayedInJail { player: PlayerId, roll: DiceRoll },
    /// The player moved and the landing cascade finished.
    Moved {
        player: PlayerId,
        roll: DiceRoll,
        landed: TileId,
        pending_purchase: Option<TileId>,
    },
    /// The player went bankrupt during the cascade.
    Bankrupt { player: PlayerId },
}

impl Game {
    /// Run one turn for the current player.
    pub fn play_turn(&mut self) -> TurnOutcome {
        if matches!(self.phase, TurnPhase::AwaitingDecision { .. } | TurnPhase::TurnComplete) {
            self.end_turn();
        }
        if self.is_finished() || self.players.is_empty() {
            return TurnOutcome::GameOver;
        }

        let index = self.current;
        let player = self.players[index].id();

        if self.players[index].skip_next_turn() {
            self.phase = TurnPhase::SkippedTurn;
            self.players[index].set_skip_next_turn(false);
            debug!(%player, "turn skipped");
            self.emit(GameEvent::PlayerSkipped { player });
            self.advance_turn();
            return TurnOutcome::Skipped { player };
        }

        let roll = self.dice.roll();
        self.last_roll = roll.total();
        debug!(%player, %roll, "dice rolled");
        self.emit(GameEvent::dice(player, roll.first, roll.second));

        if self.players[index].in_jail() {
            let release = serve_jail_turn(
                &mut self.players[index],
                roll.is_doubles(),
                self.config.jail_fine,
                self.config.jail_turn_limit,
            );
            debug!(%player, ?release, "jail turn served");
            if !release.released() {
                self.phase = TurnPhase::TurnComplete;
                self.advance_turn();
                return TurnOutcome::StayedInJail { player, roll };
            }
        }

        self.phase = TurnPhase::RolledAndMoving;
        let from = self.players[index].current_tile();
        let (landed, steps, passes) = self.walk(from.unwrap_or(self.start), roll.total());
        self.players[index].set_current_tile(landed);
        debug!(%player, %landed, steps, "player moved");
        self.emit(GameEvent::moved(player, from, landed, steps));

        if passes > 0 {
            let salary = self.salary();
            for _ in 0..passes {
                self.players[index].adjust_balance(salary);
                self.emit(GameEvent::action(player, TileAction::Go { salary }.name(), self.start));
            }
        }

        self.phase = TurnPhase::ActionCascade;
        let (landed, pending_purchase) = match self.cascade(player, landed) {
            Some(result) => result,
            None => return TurnOutcome::Bankrupt { player },
        };

        match pending_purchase {
            Some(tile) => self.phase = TurnPhase::AwaitingDecision { tile },
            None => {
                self.phase = TurnPhase::TurnComplete;
                self.advance_turn();
            }
        }

        TurnOutcome::Moved { player, roll, landed, pending_purchase }
    }

    /// Finish the current turn, declining any pending purchase.
    ///
    /// Returns false if there was no turn to finish (the current player has
    /// not rolled yet, or the game is over).
    pub fn end_turn(&mut self) -> bool {
        match self.phase {
            TurnPhase::AwaitingDecision { tile } => {
                debug!(%tile, "purchase declined");
                self.advance_turn();
                true
            }
            TurnPhase::TurnComplete => {
                self.advance_turn();
                true
            }
            _ => false,
        }
    }

    /// Pass play to the next eligible player regardless of phase.
    pub fn next_turn(&mut self) {
        if matches!(self.phase, TurnPhase::AwaitingDecision { .. }) {
            debug!("purchase declined");
        }
        self.advance_turn();
    }

    /// Remove `player` if their balance is negative.
    ///
    /// Every deed they hold returns to the bank with its buildings cleared.
    /// If one player remains the game ends with them as winner. Returns
    /// whether the player was removed.
    pub fn check_bankruptcy(&mut self, player: PlayerId) -> bool {
        let Some(index) = self.index_of(player) else {
            return false;
        };
        let balance = self.players[index].balance();
        if balance >= 0 {
            return false;
        }

        info!(%player, balance, "player bankrupt");
        self.emit(GameEvent::PlayerBankrupt { player });

        for asset in self.players[index].clear_owned() {
            self.deeds.release(asset.tile);
        }
        self.players.remove(index);

        let was_current = index == self.current;
        if index < self.current {
            self.current -= 1;
        }
        if self.current >= self.players.len() {
            self.current = 0;
        }

        match self.players.len() {
            0 => self.phase = TurnPhase::GameOver,
            1 => {
                let winner = self.players[0].id();
                self.winner = Some(winner);
                self.phase = TurnPhase::GameOver;
                info!(%winner, "game over");
                self.emit(GameEvent::GameEnded { winner });
            }
            _ if was_current => self.phase = TurnPhase::AwaitingRoll,
            _ => {}
        }
        true
    }

    /// Advance to the next player, skipping flagged players once each.
    pub(super) fn advance_turn(&mut self) {
        if self.is_finished() || self.players.is_empty() {
            return;
        }

        let count = self.players.len();
        self.current = (self.current + 1) % count;
        for _ in 0..count {
            let candidate = &mut self.players[self.current];
            if !candidate.skip_next_turn() {
                break;
            }
            candidate.set_skip_next_turn(false);
            let player = candidate.id();
            debug!(%player, "turn skipped");
            self.emit(GameEvent::PlayerSkipped { player });
            self.current = (self.current + 1) % count;
        }
        self.phase = TurnPhase::AwaitingRoll;
    }

    /// Follow `next` links up to `steps` times from `from`.
    ///
    /// Returns the landing tile, the steps actually taken (fewer at the end
    /// of a linear board) and how many times the first tile was passed
    /// through without stopping on it.
    fn walk(&self, from: TileId, steps: u32) -> (TileId, u32, u32) {
        let mut current = from;
        let mut taken = 0;
        let mut passes = 0;

        while taken < steps {
            let Some(next) = self.board.next_of(current) else {
                break;
            };
            current = next;
            taken += 1;
            if current == self.start && taken < steps {
                passes += 1;
            }
        }

        (current, taken, passes)
    }

    /// Salary for passing the first tile: its own Go action's amount if it
    /// has one, the configured salary otherwise.
    fn salary(&self) -> i64 {
        match self.board.tile(self.start).and_then(|t| t.action()) {
            Some(TileAction::Go { salary }) => *salary,
            _ => self.config.go_salary,
        }
    }

    /// Resolve landing actions starting at `tile`.
    ///
    /// Returns the final tile and any purchase offer still standing there, or
    /// `None` if the player went bankrupt.
    fn cascade(&mut self, player: PlayerId, mut tile: TileId) -> Option<(TileId, Option<TileId>)> {
        let mut pending = None;
        let mut resolved = 0;

        while let Some(action) = self.board.tile(tile).and_then(|t| t.action()).cloned() {
            if resolved == self.config.cascade_limit {
                warn!(%player, %tile, limit = resolved, "action cascade limit reached");
                break;
            }
            resolved += 1;

            let index = self.index_of(player)?;
            let mut ctx = ActionContext {
                board: &self.board,
                deeds: &self.deeds,
                players: &mut self.players,
                rng: &mut self.cards,
                last_roll: self.last_roll,
            };
            let outcome = ActionResolver::resolve(&action, tile, index, &mut ctx);
            debug!(%player, %tile, action = action.name(), ?outcome, "action resolved");

            match outcome {
                ActionOutcome::PropertyAvailable => {
                    pending = Some(tile);
                    self.emit(GameEvent::PropertyAvailable { player, tile });
                }
                ActionOutcome::RentPaid { owner, amount } => {
                    self.emit(GameEvent::RentPaid { payer: player, owner, tile, amount });
                }
                _ => {}
            }
            self.emit(GameEvent::action(player, action.name(), tile));

            if outcome.reduced_balance() && self.check_bankruptcy(player) {
                return None;
            }

            match outcome.relocated_to() {
                Some(next) if next != tile => {
                    pending = None;
                    self.emit(GameEvent::moved(player, Some(tile), next, 0));
                    tile = next;
                }
                _ => break,
            }
        }

        Some((tile, pending))
    }
}
