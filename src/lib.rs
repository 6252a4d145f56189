pub mod ai;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod observer;
pub mod session;
pub mod types;
pub mod wasm;

pub use ai::{FirstLegalMoveSelector, GreedySelector, MoveSelector, ScoringMode};
pub use board::Board;
pub use config::EngineConfig;
pub use engine::ReversiEngine;
pub use error::EngineError;
pub use observer::{EngineEvent, EngineObserver, EventLog};
pub use session::ReversiSession;
pub use types::{Cell, Coord, GameOverState, GameStatus, Outcome, PlaceResult, Player, Score};
