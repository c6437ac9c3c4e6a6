//! Event recorder.

use std::cell::RefCell;
use std::rc::Rc;

use super::{GameEvent, GameObserver, GameView};

/// Keeps every event it sees.
///
/// ```
/// use rust_estate::observer::EventRecorder;
///
/// let recorder = EventRecorder::shared();
/// // game.add_observer(Box::new(recorder.clone()));
/// assert!(recorder.borrow().events().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<GameEvent>,
}

impl EventRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder that can be registered and still read afterwards.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of recorded events with the given [`GameEvent::kind`].
    #[must_use]
    pub fn count(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    /// Recorded events with the given kind, in order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventRecorder {
    fn on_event(&mut self, event: &GameEvent, _view: &GameView<'_>) {
        self.events.push(event.clone());
    }
}
