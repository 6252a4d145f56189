use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::engine::ReversiEngine;
use crate::error::EngineError;
use crate::observer::EngineObserver;
use crate::types::{PlaceResult, Player};

/// Host-side owner of one engine for one game.
///
/// Keeps the configured board size and resets the engine on `start` when
/// the stored board no longer matches it.
pub struct ReversiSession {
    config: EngineConfig,
    engine: ReversiEngine,
}

impl ReversiSession {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let engine = ReversiEngine::new(&config)?;
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn engine(&self) -> &ReversiEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ReversiEngine {
        &mut self.engine
    }

    pub fn subscribe(&mut self, observer: Box<dyn EngineObserver>) {
        self.engine.subscribe(observer);
    }

    /// Records a new board size; the board is rebuilt on the next `start`
    /// or `restart`.
    pub fn configure_size(&mut self, size: usize) -> Result<(), EngineError> {
        self.engine.set_size(size)?;
        self.config.size = size;
        Ok(())
    }

    /// Session start. Resets only a stale board and reports whether it did.
    #[instrument(skip(self), fields(size = self.config.size))]
    pub fn start(&mut self) -> bool {
        if !self.engine.needs_reset() {
            return false;
        }
        debug!("stored board does not match configured size, resetting");
        self.engine.reset_board();
        true
    }

    /// Unconditional new game.
    pub fn restart(&mut self) {
        self.engine.reset_board();
    }

    pub fn play(&mut self, x: i32, y: i32) -> PlaceResult {
        self.engine.try_place_at(x, y, false)
    }

    pub fn play_ai(&mut self, ai_player: Player) -> bool {
        self.engine.play_ai_move(ai_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{EngineEvent, EventLog};

    fn session() -> (ReversiSession, EventLog) {
        let config = EngineConfig {
            seed: Some(3),
            ..EngineConfig::default()
        };
        let mut session = ReversiSession::new(config).unwrap();
        let log = EventLog::new();
        session.subscribe(Box::new(log.clone()));
        (session, log)
    }

    #[test]
    fn start_leaves_matching_board_alone() {
        let (mut session, log) = session();

        assert!(!session.start());
        assert!(log.is_empty());
    }

    #[test]
    fn start_resets_after_size_change() {
        let (mut session, log) = session();
        session.configure_size(10).unwrap();

        assert!(session.start());
        assert_eq!(session.engine().cells().len(), 100);
        assert_eq!(session.config().size, 10);
        assert_eq!(log.events(), vec![EngineEvent::BoardChanged]);
        assert!(!session.start());
    }

    #[test]
    fn invalid_size_keeps_previous_config() {
        let (mut session, _) = session();

        assert!(session.configure_size(5).is_err());
        assert_eq!(session.config().size, 8);
        assert!(!session.engine().needs_reset());
    }

    #[test]
    fn human_then_ai_alternate() {
        let (mut session, log) = session();

        assert!(session.play(3, 2).success);
        assert_eq!(session.engine().current_player(), Player::White);
        assert!(!session.play_ai(Player::Black));
        assert!(session.play_ai(Player::White));
        assert_eq!(session.engine().current_player(), Player::Black);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn restart_always_resets() {
        let (mut session, log) = session();
        session.play(3, 2);

        session.restart();

        assert_eq!(session.engine().score().black, 2);
        assert_eq!(log.len(), 2);
    }
}
