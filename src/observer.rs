use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Receives engine notifications, synchronously and inline with the
/// mutating call.
pub trait EngineObserver {
    /// Fired after any board mutation (reset or committed move).
    fn board_changed(&mut self) {}

    /// Fired after a committed move ends the game.
    fn game_over(&mut self, _both_no_moves: bool) {}
}

/// A notification as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineEvent {
    BoardChanged,
    GameOver { both_no_moves: bool },
}

/// Shared recorder; clones see the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<EngineEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.borrow().clone()
    }

    /// Takes every recorded event, leaving the log empty.
    pub fn drain(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EngineObserver for EventLog {
    fn board_changed(&mut self) {
        self.events.borrow_mut().push(EngineEvent::BoardChanged);
    }

    fn game_over(&mut self, both_no_moves: bool) {
        self.events
            .borrow_mut()
            .push(EngineEvent::GameOver { both_no_moves });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_log() {
        let log = EventLog::new();
        let mut handle = log.clone();

        handle.board_changed();
        handle.game_over(true);

        let game_over = EngineEvent::GameOver {
            both_no_moves: true,
        };
        assert_eq!(log.events(), vec![EngineEvent::BoardChanged, game_over]);
        assert_eq!(log.drain().len(), 2);
        assert!(log.is_empty());
    }
}
