//! Observer protocol: how external consumers watch a game.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: what happened
//! - [`GameView`]: read-only snapshot of the board, players and deeds at the
//!   moment the event fired
//! - [`GameObserver`]: the listener trait
//! - [`EventRecorder`]: collects events, mostly for tests
//! - [`TracingObserver`]: forwards events to `tracing`
//!
//! ## Re-entrancy
//!
//! Observers are pure listeners. They receive shared references only and
//! cannot reach the engine while it is notifying them; to react to an event
//! (buy the offered property, say) record it and act after the engine call
//! returns.

pub mod event;
pub mod recorder;
pub mod logger;

pub use event::GameEvent;
pub use recorder::EventRecorder;
pub use logger::TracingObserver;

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::{Board, Deeds};
use crate::core::{Player, PlayerId, TileId};

/// Read-only game state handed to observers.
#[derive(Clone, Copy)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub players: &'a [Player],
    pub deeds: &'a Deeds,
}

impl GameView<'_> {
    /// Look up a player still in the game.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Display name for a player; falls back to the id for removed players.
    #[must_use]
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map_or_else(|| id.to_string(), |p| p.name().to_string())
    }

    /// Display name for a tile; falls back to the id for unknown tiles.
    #[must_use]
    pub fn tile_name(&self, id: TileId) -> String {
        self.board
            .tile(id)
            .map_or_else(|| id.to_string(), |t| t.name())
    }
}

/// Receives engine events synchronously, in emission order.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, view: &GameView<'_>);
}

/// Lets callers keep a handle to an observer after handing it to a game.
impl<T: GameObserver> GameObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &GameEvent, view: &GameView<'_>) {
        self.borrow_mut().on_event(event, view);
    }
}

/// Registered observers, notified in registration order.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Box<dyn GameObserver>>,
}

impl ObserverSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver one event to every observer.
    pub fn notify(&mut self, event: &GameEvent, view: &GameView<'_>) {
        for observer in &mut self.observers {
            observer.on_event(event, view);
        }
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverSet")
            .field("observers", &self.observers.len())
            .finish()
    }
}
