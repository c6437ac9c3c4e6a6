//! Observer that writes events to `tracing`.

use super::{GameEvent, GameObserver, GameView};

/// Logs every event at `info`, bankruptcies at `warn`.
///
/// Install a subscriber (`tracing-subscriber` or similar) to see the output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl TracingObserver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent, view: &GameView<'_>) {
        match event {
            GameEvent::DiceRolled { player, first, second } => {
                tracing::info!(player = %view.player_name(*player), first, second, "dice rolled");
            }
            GameEvent::PlayerMoved { player, from, to, steps } => {
                let from = from.map_or_else(|| "nowhere".to_string(), |t| view.tile_name(t));
                tracing::info!(
                    player = %view.player_name(*player),
                    %from,
                    to = %view.tile_name(*to),
                    steps,
                    "player moved"
                );
            }
            GameEvent::TileAction { player, action, tile } => {
                tracing::info!(
                    player = %view.player_name(*player),
                    action,
                    tile = %view.tile_name(*tile),
                    "tile action"
                );
            }
            GameEvent::PropertyAvailable { player, tile } => {
                let price = view.board.tile(*tile).map_or(0, |t| t.price());
                tracing::info!(
                    player = %view.player_name(*player),
                    tile = %view.tile_name(*tile),
                    price,
                    "property available"
                );
            }
            GameEvent::RentPaid { payer, owner, tile, amount } => {
                tracing::info!(
                    payer = %view.player_name(*payer),
                    owner = %view.player_name(*owner),
                    tile = %view.tile_name(*tile),
                    amount,
                    "rent paid"
                );
            }
            GameEvent::PlayerSkipped { player } => {
                tracing::info!(player = %view.player_name(*player), "turn skipped");
            }
            GameEvent::PlayerBankrupt { player } => {
                tracing::warn!(player = %view.player_name(*player), "player bankrupt");
            }
            GameEvent::GameEnded { winner } => {
                tracing::info!(winner = %view.player_name(*winner), "game over");
            }
        }
    }
}
