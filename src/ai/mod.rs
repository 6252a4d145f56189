pub mod greedy;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Coord, Player};

pub use greedy::GreedySelector;

/// Picks one move out of the legal moves for `player`.
///
/// Caller contract: `moves` is the non-empty, row-major list of legal moves
/// for `player` on `board`.
pub trait MoveSelector: Send {
    fn select_move(&mut self, board: &Board, player: Player, moves: &[Coord]) -> Option<Coord>;
}

/// How the greedy AI builds its set of best moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Every move whose flip count equals the true maximum.
    #[default]
    ArgMax,
    /// Reproduces the legacy bookkeeping, where a new maximum resets the
    /// running best to 1 instead of the observed flip count.
    Legacy,
}

/// Always takes the first legal move in scan order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&mut self, _board: &Board, _player: Player, moves: &[Coord]) -> Option<Coord> {
        moves.first().copied()
    }
}
