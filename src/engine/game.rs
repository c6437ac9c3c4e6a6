//! Game state and the non-turn entry points.
//!
//! `Game` owns everything mutable: players, deeds, dice, the card RNG and
//! the observer list. The board itself is read-only once handed over.
//! Turn execution lives in [`turn`](super::turn).

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::{Board, Deeds};
use crate::core::{AssetKind, BoardError, GameConfig, GameRng, OwnedAsset, Player, PlayerId, TileId, TileKind};
use crate::observer::{GameEvent, GameObserver, GameView, ObserverSet};
use crate::rules::tile_rent;

use super::dice::{Dice, RandomDice};

/// Where the engine is within the current player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    AwaitingRoll,
    /// The current player is sitting out.
    SkippedTurn,
    /// Dice rolled, player moving.
    RolledAndMoving,
    /// Resolving landing actions.
    ActionCascade,
    /// The player landed on an unowned deed; buy it or end the turn.
    AwaitingDecision { tile: TileId },
    /// Turn over, rotation not yet advanced.
    TurnComplete,
    /// One player (or none) remains.
    GameOver,
}

/// A running game.
///
/// ## Usage
///
/// ```
/// use rust_estate::core::GameConfig;
/// use rust_estate::engine::{FixedDice, Game};
/// use rust_estate::games::ladder;
///
/// let board = ladder::build().unwrap();
/// let mut game = Game::with_dice(board, GameConfig::default(), FixedDice::always(1, 1)).unwrap();
/// let alice = game.add_player("Alice", "A");
///
/// game.play_turn();
/// assert_eq!(game.player(alice).unwrap().current_tile().unwrap().raw(), 7);
/// ```
pub struct Game {
    pub(super) config: GameConfig,
    pub(super) board: Board,
    pub(super) deeds: Deeds,
    pub(super) players: Vec<Player>,
    pub(super) dice: Box<dyn Dice>,
    pub(super) cards: GameRng,
    pub(super) observers: ObserverSet,
    /// First tile of the board; players start here.
    pub(super) start: TileId,
    pub(super) current: usize,
    pub(super) next_player_id: u32,
    pub(super) last_roll: u32,
    pub(super) phase: TurnPhase,
    pub(super) winner: Option<PlayerId>,
}

impl Game {
    /// Start a game on `board` with seeded random dice.
    ///
    /// The board must have a first tile and every relocation target must be
    /// registered. It is not ring-validated here: the ladder board is linear;
    /// the standard board is validated by its builder.
    pub fn new(board: Board, config: GameConfig) -> Result<Self, BoardError> {
        let dice = RandomDice::new(GameRng::new(config.seed).for_context("dice"), config.dice_faces);
        Self::with_dice(board, config, dice)
    }

    /// Start a game with a specific dice source.
    ///
    /// A cascade limit below 1 (possible in a deserialized config) is raised
    /// to 1 so landing actions always run.
    pub fn with_dice(
        board: Board,
        mut config: GameConfig,
        dice: impl Dice + 'static,
    ) -> Result<Self, BoardError> {
        let start = board.first_tile().ok_or(BoardError::MissingFirstTile)?;
        board.check_targets()?;
        config.cascade_limit = config.cascade_limit.max(1);
        let cards = GameRng::new(config.seed).for_context("cards");

        debug!(tiles = board.len(), seed = config.seed, "game created");

        Ok(Self {
            config,
            board,
            deeds: Deeds::new(),
            players: Vec::new(),
            dice: Box::new(dice),
            cards,
            observers: ObserverSet::new(),
            start,
            current: 0,
            next_player_id: 0,
            last_roll: 0,
            phase: TurnPhase::AwaitingRoll,
            winner: None,
        })
    }

    /// Add a player on the first tile with the configured starting balance.
    pub fn add_player(&mut self, name: impl Into<String>, token: impl Into<String>) -> PlayerId {
        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;

        let mut player = Player::new(id, name, token).with_balance(self.config.starting_balance);
        player.set_current_tile(self.start);
        debug!(player = %id, name = player.name(), "player joined");

        self.players.push(player);
        id
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.add(observer);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deeds(&self) -> &Deeds {
        &self.deeds
    }

    /// Players still in the game, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Total of the most recent roll.
    #[must_use]
    pub fn last_roll(&self) -> u32 {
        self.last_roll
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Last player standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Tile offered to the current player, if a decision is pending.
    #[must_use]
    pub fn pending_purchase(&self) -> Option<TileId> {
        match self.phase {
            TurnPhase::AwaitingDecision { tile } => Some(tile),
            _ => None,
        }
    }

    #[must_use]
    pub fn owner_of(&self, tile: TileId) -> Option<PlayerId> {
        self.deeds.owner(tile)
    }

    /// Rent a visitor would owe on `tile` right now.
    #[must_use]
    pub fn rent_for(&self, tile: TileId) -> i64 {
        let Some(tile_ref) = self.board.tile(tile) else {
            return 0;
        };
        let deed = self.deeds.deed(tile);
        let owner = deed.owner.and_then(|id| self.player(id));
        tile_rent(tile_ref, deed, owner, self.last_roll)
    }

    pub(super) fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        let view = GameView {
            board: &self.board,
            players: &self.players,
            deeds: &self.deeds,
        };
        self.observers.notify(&event, &view);
    }

    // === Entry points ===

    /// Buy `tile` for the current player.
    ///
    /// Succeeds only for the current player, on an ownable unowned tile with
    /// a positive price the player can afford. Returns false and changes
    /// nothing otherwise.
    pub fn buy_property(&mut self, player: PlayerId, tile: TileId) -> bool {
        if self.is_finished() {
            return false;
        }
        let Some(buyer) = self.current_player() else {
            return false;
        };
        if buyer.id() != player || self.deeds.is_owned(tile) {
            return false;
        }
        let balance = buyer.balance();

        let Some(tile_ref) = self.board.tile(tile) else {
            return false;
        };
        let kind = match tile_ref.kind() {
            TileKind::Property { color, .. } => AssetKind::Property(*color),
            TileKind::Railroad { .. } => AssetKind::Railroad,
            TileKind::Utility { .. } => AssetKind::Utility,
            TileKind::Plain | TileKind::Named { .. } => return false,
        };
        let price = tile_ref.price();
        if price <= 0 || balance < price {
            return false;
        }

        let index = self.current;
        self.players[index].adjust_balance(-price);
        self.players[index].add_owned(OwnedAsset { tile, kind });
        self.deeds.set_owner(tile, player);
        info!(%player, %tile, price, "property purchased");

        if self.phase == (TurnPhase::AwaitingDecision { tile }) {
            self.phase = TurnPhase::TurnComplete;
        }
        self.emit(GameEvent::action(player, "PurchaseAction", tile));
        true
    }

    /// Leave jail early by paying the fine.
    ///
    /// Requires the player to be jailed and able to cover the fine.
    pub fn pay_jail_fine(&mut self, player: PlayerId) -> bool {
        let fine = self.config.jail_fine;
        let Some(index) = self.index_of(player) else {
            return false;
        };
        let jailed = &mut self.players[index];
        if !jailed.in_jail() || jailed.balance() < fine {
            return false;
        }

        jailed.adjust_balance(-fine);
        jailed.release_from_jail();
        info!(%player, fine, "jail fine paid");
        true
    }

    /// Build a house on a property.
    ///
    /// The player must own the tile and its whole color group, the tile must
    /// have fewer than four houses and no hotel, and the player must cover the
    /// house price.
    pub fn build_house(&mut self, player: PlayerId, tile: TileId) -> bool {
        let Some((index, cost)) = self.building_site(player, tile) else {
            return false;
        };
        if !self.deeds.add_house(tile) {
            return false;
        }

        self.players[index].adjust_balance(-cost);
        info!(%player, %tile, houses = self.deeds.houses(tile), "house built");
        self.emit(GameEvent::action(player, "BuildHouseAction", tile));
        true
    }

    /// Replace four houses with a hotel. Same ownership and funds rules as
    /// [`build_house`](Self::build_house).
    pub fn build_hotel(&mut self, player: PlayerId, tile: TileId) -> bool {
        let Some((index, cost)) = self.building_site(player, tile) else {
            return false;
        };
        if !self.deeds.build_hotel(tile) {
            return false;
        }

        self.players[index].adjust_balance(-cost);
        info!(%player, %tile, "hotel built");
        self.emit(GameEvent::action(player, "BuildHotelAction", tile));
        true
    }

    /// Player index and house price if `player` may build on `tile` at all.
    fn building_site(&self, player: PlayerId, tile: TileId) -> Option<(usize, i64)> {
        if self.is_finished() || self.deeds.owner(tile) != Some(player) {
            return None;
        }
        let index = self.index_of(player)?;
        let tile_ref = self.board.tile(tile)?;
        let TileKind::Property { color, house_price, .. } = tile_ref.kind() else {
            return None;
        };

        let builder = &self.players[index];
        if !builder.has_monopoly(*color) || builder.balance() < *house_price {
            return None;
        }
        Some((index, *house_price))
    }
}
