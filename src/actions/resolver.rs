//! Action resolution - applying a tile action to one player.
//!
//! The resolver performs only the action's direct transfer or state change.
//! Bankruptcy checks, event emission and cascade continuation belong to the
//! engine, which inspects the returned [`ActionOutcome`].

use serde::{Deserialize, Serialize};

use crate::board::{Board, Deeds};
use crate::core::{GameRng, Player, PlayerId, TileId};
use crate::rules::tile_rent;

use super::action::{TileAction, CHANCE_OUTCOMES, CHEST_OUTCOMES};

/// Read/write view of game state handed to the resolver.
pub struct ActionContext<'a> {
    pub board: &'a Board,
    pub deeds: &'a Deeds,
    pub players: &'a mut [Player],
    pub rng: &'a mut GameRng,
    /// Total of the dice roll that brought the player here.
    pub last_roll: u32,
}

/// What resolving an action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Nothing changed (own property, missing tile, ...).
    NoEffect,
    /// Balance credited.
    Credited(i64),
    /// Balance debited.
    Debited(i64),
    /// A card was drawn; positive credits, negative debits.
    CardDrawn(i64),
    /// Landed on an unowned deed; the engine decides whether to offer it.
    PropertyAvailable,
    /// Rent moved from the player to `owner`.
    RentPaid { owner: PlayerId, amount: i64 },
    /// Player moved to another tile.
    Relocated { to: TileId },
    /// Player moved to jail.
    Jailed { to: TileId },
    /// Player will sit out their next turn.
    SkipScheduled,
}

impl ActionOutcome {
    /// Did this outcome reduce the player's balance?
    #[must_use]
    pub fn reduced_balance(&self) -> bool {
        match self {
            ActionOutcome::Debited(_) | ActionOutcome::RentPaid { .. } => true,
            ActionOutcome::CardDrawn(delta) => *delta < 0,
            _ => false,
        }
    }

    /// New tile if the player was moved.
    #[must_use]
    pub fn relocated_to(&self) -> Option<TileId> {
        match self {
            ActionOutcome::Relocated { to } | ActionOutcome::Jailed { to } => Some(*to),
            _ => None,
        }
    }
}

/// Resolves tile actions.
pub struct ActionResolver;

impl ActionResolver {
    /// Apply `action`, attached to `tile`, to the player at `player` in
    /// `ctx.players`.
    pub fn resolve(
        action: &TileAction,
        tile: TileId,
        player: usize,
        ctx: &mut ActionContext<'_>,
    ) -> ActionOutcome {
        if player >= ctx.players.len() {
            return ActionOutcome::NoEffect;
        }

        match action {
            TileAction::Go { salary } => {
                ctx.players[player].adjust_balance(*salary);
                ActionOutcome::Credited(*salary)
            }

            TileAction::Property => Self::settle_deed(tile, player, ctx, false),
            TileAction::Railroad | TileAction::Utility => Self::settle_deed(tile, player, ctx, true),

            TileAction::Tax { amount } => {
                ctx.players[player].adjust_balance(-*amount);
                ActionOutcome::Debited(*amount)
            }

            TileAction::Chance => Self::draw(&CHANCE_OUTCOMES, player, ctx),
            TileAction::Chest => Self::draw(&CHEST_OUTCOMES, player, ctx),

            TileAction::GoToJail { jail } => {
                if !ctx.board.contains(*jail) {
                    return ActionOutcome::NoEffect;
                }
                let target = &mut ctx.players[player];
                target.set_current_tile(*jail);
                target.go_to_jail();
                ActionOutcome::Jailed { to: *jail }
            }

            TileAction::SkipTurn => {
                ctx.players[player].set_skip_next_turn(true);
                ActionOutcome::SkipScheduled
            }

            TileAction::Ladder { destination } => {
                if !ctx.board.contains(*destination) {
                    return ActionOutcome::NoEffect;
                }
                ctx.players[player].set_current_tile(*destination);
                ActionOutcome::Relocated { to: *destination }
            }
        }
    }

    fn draw(outcomes: &[i64], player: usize, ctx: &mut ActionContext<'_>) -> ActionOutcome {
        let Some(&delta) = ctx.rng.choose(outcomes) else {
            return ActionOutcome::NoEffect;
        };
        ctx.players[player].adjust_balance(delta);
        ActionOutcome::CardDrawn(delta)
    }

    /// Shared deed handling: unowned signals availability, owned by someone
    /// else charges rent, owned by the lander does nothing.
    fn settle_deed(
        tile: TileId,
        player: usize,
        ctx: &mut ActionContext<'_>,
        clamp_to_balance: bool,
    ) -> ActionOutcome {
        let Some(tile_ref) = ctx.board.tile(tile) else {
            return ActionOutcome::NoEffect;
        };
        let deed = ctx.deeds.deed(tile);

        let Some(owner_id) = deed.owner else {
            return ActionOutcome::PropertyAvailable;
        };
        if owner_id == ctx.players[player].id() {
            return ActionOutcome::NoEffect;
        }
        let Some(owner) = ctx.players.iter().position(|p| p.id() == owner_id) else {
            return ActionOutcome::NoEffect;
        };

        let rent = tile_rent(tile_ref, deed, Some(&ctx.players[owner]), ctx.last_roll);
        let amount = if clamp_to_balance {
            rent.min(ctx.players[player].balance().max(0))
        } else {
            rent
        };

        ctx.players[player].adjust_balance(-amount);
        ctx.players[owner].adjust_balance(amount);
        ActionOutcome::RentPaid { owner: owner_id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssetKind, OwnedAsset, PropertyColor, Tile};

    fn board() -> Board {
        let mut board = Board::new();
        board.set_first_tile(Tile::named(TileId::new(1), "GO")).unwrap();
        board
            .register_tile(Tile::property(TileId::new(2), "Baltic", Some(PropertyColor::Brown), 60, 4, 50))
            .unwrap();
        board.register_tile(Tile::railroad(TileId::new(6), "Reading Railroad", 200)).unwrap();
        board.register_tile(Tile::utility(TileId::new(13), "Electric Company", 150)).unwrap();
        board.register_tile(Tile::named(TileId::new(11), "Jail")).unwrap();
        board
    }

    fn players() -> Vec<Player> {
        vec![
            Player::new(PlayerId::new(0), "Alice", "A"),
            Player::new(PlayerId::new(1), "Bob", "B"),
        ]
    }

    fn own(players: &mut [Player], deeds: &mut Deeds, owner: usize, tile: u32, kind: AssetKind) {
        let tile = TileId::new(tile);
        deeds.set_owner(tile, players[owner].id());
        players[owner].add_owned(OwnedAsset { tile, kind });
    }

    fn resolve(
        action: TileAction,
        tile: u32,
        board: &Board,
        deeds: &Deeds,
        players: &mut [Player],
        last_roll: u32,
    ) -> ActionOutcome {
        let mut rng = GameRng::new(7);
        let mut ctx = ActionContext { board, deeds, players, rng: &mut rng, last_roll };
        ActionResolver::resolve(&action, TileId::new(tile), 0, &mut ctx)
    }

    #[test]
    fn test_go_credits_salary() {
        let board = board();
        let mut players = players();
        let outcome = resolve(TileAction::Go { salary: 200 }, 1, &board, &Deeds::new(), &mut players, 0);

        assert_eq!(outcome, ActionOutcome::Credited(200));
        assert_eq!(players[0].balance(), 1700);
    }

    #[test]
    fn test_unowned_property_is_offered_not_bought() {
        let board = board();
        let mut players = players();
        let deeds = Deeds::new();

        let outcome = resolve(TileAction::Property, 2, &board, &deeds, &mut players, 0);

        assert_eq!(outcome, ActionOutcome::PropertyAvailable);
        assert_eq!(players[0].balance(), 1500);
        assert!(!deeds.is_owned(TileId::new(2)));
    }

    #[test]
    fn test_own_property_no_effect() {
        let board = board();
        let mut players = players();
        let mut deeds = Deeds::new();
        own(&mut players, &mut deeds, 0, 2, AssetKind::Property(Some(PropertyColor::Brown)));

        assert_eq!(
            resolve(TileAction::Property, 2, &board, &deeds, &mut players, 0),
            ActionOutcome::NoEffect
        );
    }

    #[test]
    fn test_property_rent_is_not_clamped() {
        let board = board();
        let mut players = players();
        players[0] = players[0].clone().with_balance(2);
        let mut deeds = Deeds::new();
        own(&mut players, &mut deeds, 1, 2, AssetKind::Property(Some(PropertyColor::Brown)));

        let outcome = resolve(TileAction::Property, 2, &board, &deeds, &mut players, 0);

        assert_eq!(outcome, ActionOutcome::RentPaid { owner: PlayerId::new(1), amount: 4 });
        assert_eq!(players[0].balance(), -2);
        assert_eq!(players[1].balance(), 1504);
        assert!(outcome.reduced_balance());
    }

    #[test]
    fn test_railroad_rent_clamped_to_balance() {
        let board = board();
        let mut players = players();
        players[0] = players[0].clone().with_balance(10);
        let mut deeds = Deeds::new();
        own(&mut players, &mut deeds, 1, 6, AssetKind::Railroad);

        let outcome = resolve(TileAction::Railroad, 6, &board, &deeds, &mut players, 0);

        assert_eq!(outcome, ActionOutcome::RentPaid { owner: PlayerId::new(1), amount: 10 });
        assert_eq!(players[0].balance(), 0);
        assert_eq!(players[1].balance(), 1510);
    }

    #[test]
    fn test_utility_rent_uses_last_roll() {
        let board = board();
        let mut players = players();
        let mut deeds = Deeds::new();
        own(&mut players, &mut deeds, 1, 13, AssetKind::Utility);

        let outcome = resolve(TileAction::Utility, 13, &board, &deeds, &mut players, 7);

        assert_eq!(outcome, ActionOutcome::RentPaid { owner: PlayerId::new(1), amount: 28 });
        assert_eq!(players[0].balance(), 1472);
    }

    #[test]
    fn test_tax_has_no_floor() {
        let board = board();
        let mut players = players();
        players[0] = players[0].clone().with_balance(50);

        let outcome = resolve(TileAction::Tax { amount: 200 }, 1, &board, &Deeds::new(), &mut players, 0);

        assert_eq!(outcome, ActionOutcome::Debited(200));
        assert_eq!(players[0].balance(), -150);
    }

    #[test]
    fn test_cards_draw_from_outcome_set() {
        let board = board();
        for action in [TileAction::Chance, TileAction::Chest] {
            let mut players = players();
            let outcome = resolve(action.clone(), 1, &board, &Deeds::new(), &mut players, 0);
            let ActionOutcome::CardDrawn(delta) = outcome else {
                panic!("expected a card draw, got {outcome:?}");
            };
            let allowed = if action == TileAction::Chance { CHANCE_OUTCOMES } else { CHEST_OUTCOMES };
            assert!(allowed.contains(&delta));
            assert_eq!(players[0].balance(), 1500 + delta);
        }
    }

    #[test]
    fn test_go_to_jail() {
        let board = board();
        let mut players = players();
        let action = TileAction::GoToJail { jail: TileId::new(11) };

        let outcome = resolve(action, 1, &board, &Deeds::new(), &mut players, 0);

        assert_eq!(outcome, ActionOutcome::Jailed { to: TileId::new(11) });
        assert_eq!(players[0].current_tile(), Some(TileId::new(11)));
        assert!(players[0].in_jail());
        assert_eq!(players[0].jail_turns(), 0);
        assert_eq!(players[0].balance(), 1500);
    }

    #[test]
    fn test_skip_turn_is_deferred() {
        let board = board();
        let mut players = players();

        assert_eq!(
            resolve(TileAction::SkipTurn, 1, &board, &Deeds::new(), &mut players, 0),
            ActionOutcome::SkipScheduled
        );
        assert!(players[0].skip_next_turn());
    }

    #[test]
    fn test_ladder_to_missing_tile_is_ignored() {
        let board = board();
        let mut players = players();
        let action = TileAction::Ladder { destination: TileId::new(99) };

        assert_eq!(resolve(action, 1, &board, &Deeds::new(), &mut players, 0), ActionOutcome::NoEffect);
    }
}
