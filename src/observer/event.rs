//! Events emitted by the engine.
//!
//! Events are fire-and-forget: the engine never reads anything back from an
//! observer. Payloads carry ids; names and balances are available through the
//! [`GameView`](super::GameView) passed alongside each event.

use serde::Serialize;

use crate::core::{PlayerId, TileId};

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// Dice were rolled for a player.
    DiceRolled { player: PlayerId, first: u8, second: u8 },

    /// A player moved. `steps` is 0 when an action teleported them.
    PlayerMoved {
        player: PlayerId,
        from: Option<TileId>,
        to: TileId,
        steps: u32,
    },

    /// A named action took effect for a player on a tile.
    TileAction {
        player: PlayerId,
        action: &'static str,
        tile: TileId,
    },

    /// A player landed on an unowned deed they may buy.
    PropertyAvailable { player: PlayerId, tile: TileId },

    /// Rent changed hands.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        tile: TileId,
        amount: i64,
    },

    /// A flagged player sat out their turn.
    PlayerSkipped { player: PlayerId },

    /// A player went bankrupt and left the game.
    PlayerBankrupt { player: PlayerId },

    /// One player remains.
    GameEnded { winner: PlayerId },
}

impl GameEvent {
    /// Player the event is about. For rent, the payer.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::DiceRolled { player, .. }
            | GameEvent::PlayerMoved { player, .. }
            | GameEvent::TileAction { player, .. }
            | GameEvent::PropertyAvailable { player, .. }
            | GameEvent::PlayerSkipped { player }
            | GameEvent::PlayerBankrupt { player } => *player,
            GameEvent::RentPaid { payer, .. } => *payer,
            GameEvent::GameEnded { winner } => *winner,
        }
    }

    /// Short event name, used for logging and filtering.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::DiceRolled { .. } => "dice_rolled",
            GameEvent::PlayerMoved { .. } => "player_moved",
            GameEvent::TileAction { .. } => "tile_action",
            GameEvent::PropertyAvailable { .. } => "property_available",
            GameEvent::RentPaid { .. } => "rent_paid",
            GameEvent::PlayerSkipped { .. } => "player_skipped",
            GameEvent::PlayerBankrupt { .. } => "player_bankrupt",
            GameEvent::GameEnded { .. } => "game_ended",
        }
    }

    // === Builders ===

    #[must_use]
    pub fn dice(player: PlayerId, first: u8, second: u8) -> Self {
        GameEvent::DiceRolled { player, first, second }
    }

    #[must_use]
    pub fn moved(player: PlayerId, from: Option<TileId>, to: TileId, steps: u32) -> Self {
        GameEvent::PlayerMoved { player, from, to, steps }
    }

    #[must_use]
    pub fn action(player: PlayerId, action: &'static str, tile: TileId) -> Self {
        GameEvent::TileAction { player, action, tile }
    }
}
