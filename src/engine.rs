use tracing::{debug, instrument, trace};

use crate::ai::{GreedySelector, MoveSelector};
use crate::board::Board;
use crate::config::{EngineConfig, validate_size};
use crate::error::EngineError;
use crate::observer::EngineObserver;
use crate::types::{Cell, Coord, GameOverState, GameStatus, Outcome, PlaceResult, Player, Score};

/// Reversi rules engine: one board, the side to move, and the notification
/// fan-out.
///
/// Single-threaded and synchronous. Observers run inline, in subscription
/// order, before the mutating call returns.
pub struct ReversiEngine {
    board: Board,
    /// Side length the next `reset_board` builds; `board` keeps its own
    /// geometry until then.
    configured_size: usize,
    current_player: Player,
    observers: Vec<Box<dyn EngineObserver>>,
    selector: Box<dyn MoveSelector>,
}

impl ReversiEngine {
    /// Creates an engine with the opening position and the greedy AI.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let selector = match config.seed {
            Some(seed) => GreedySelector::seeded(config.scoring, seed),
            None => GreedySelector::from_clock(config.scoring),
        };
        Self::with_selector(config, Box::new(selector))
    }

    pub fn with_selector(
        config: &EngineConfig,
        selector: Box<dyn MoveSelector>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.size),
            configured_size: config.size,
            current_player: Player::Black,
            observers: Vec::new(),
            selector,
        })
    }

    pub fn subscribe(&mut self, observer: Box<dyn EngineObserver>) {
        self.observers.push(observer);
    }

    /// Side length of the board currently in play.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn configured_size(&self) -> usize {
        self.configured_size
    }

    /// Stores a new side length. The board in play is untouched until the
    /// next `reset_board`.
    pub fn set_size(&mut self, size: usize) -> Result<(), EngineError> {
        validate_size(size)?;
        self.configured_size = size;
        Ok(())
    }

    /// `true` when the board in play does not match the configured size.
    pub fn needs_reset(&self) -> bool {
        self.board.size() != self.configured_size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.board.in_bounds(x, y)
    }

    pub fn index(&self, x: i32, y: i32) -> Result<usize, EngineError> {
        self.board.index(x, y)
    }

    pub fn get_cell(&self, x: i32, y: i32) -> Result<Cell, EngineError> {
        self.board.cell_at(x, y)
    }

    #[instrument(skip(self), fields(size = self.configured_size))]
    pub fn reset_board(&mut self) {
        self.board = Board::new(self.configured_size);
        self.current_player = Player::Black;
        debug!("board reset");
        self.notify_board_changed();
    }

    /// Number of discs `player` would flip at `(x, y)` and their coordinates.
    pub fn count_flips_if_place(&self, x: i32, y: i32, player: Player) -> (usize, Vec<Coord>) {
        self.board.count_flips_if_place(x, y, player)
    }

    /// Tries the current player's move at `(x, y)`.
    ///
    /// With `simulate` set, only reports whether the move is legal and how
    /// many discs it flips. Otherwise commits it, passes the turn (skipping
    /// a side with no move), notifies observers and checks for game over.
    #[instrument(skip(self))]
    pub fn try_place_at(&mut self, x: i32, y: i32, simulate: bool) -> PlaceResult {
        let mover = self.current_player;
        let (count, _) = self.board.count_flips_if_place(x, y, mover);
        if count == 0 {
            trace!(?mover, "illegal move rejected");
            return PlaceResult::rejected();
        }
        if simulate {
            return PlaceResult {
                success: true,
                flipped: count,
            };
        }

        let flipped = self.board.place(x, y, mover).len();
        debug_assert_eq!(flipped, count);
        debug!(?mover, flipped, "move committed");

        self.advance_turn();
        self.notify_board_changed();

        let state = self.is_game_over();
        if state.is_over {
            debug!(both_no_moves = state.both_no_moves, score = ?self.score(), "game over");
            self.notify_game_over(state.both_no_moves);
        }

        PlaceResult {
            success: true,
            flipped,
        }
    }

    /// Passes the turn, skipping the opponent once if it cannot move.
    fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        if !self.has_any_valid_move(self.current_player) {
            debug!(passed = ?self.current_player, "forced pass");
            self.current_player = self.current_player.opponent();
        }
    }

    /// Legal moves for the side to move, row-major.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.valid_moves_for(self.current_player)
    }

    pub fn valid_moves_for(&self, player: Player) -> Vec<Coord> {
        self.board
            .empty_squares()
            .filter(|c| self.board.is_legal(c.x, c.y, player))
            .collect()
    }

    pub fn has_any_valid_move(&self, player: Player) -> bool {
        self.board
            .empty_squares()
            .any(|c| self.board.is_legal(c.x, c.y, player))
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// A full board ends the game with `both_no_moves == false`; otherwise
    /// the game ends only when neither side can move.
    pub fn is_game_over(&self) -> GameOverState {
        if self.board.is_full() {
            return GameOverState {
                is_over: true,
                both_no_moves: false,
            };
        }
        let both_no_moves = !self.has_any_valid_move(Player::Black)
            && !self.has_any_valid_move(Player::White);
        GameOverState {
            is_over: both_no_moves,
            both_no_moves,
        }
    }

    /// Lets the AI move for `ai_player`.
    ///
    /// Returns `false` without touching anything when it is not
    /// `ai_player`'s turn or it has no legal move.
    #[instrument(skip(self))]
    pub fn play_ai_move(&mut self, ai_player: Player) -> bool {
        if self.current_player != ai_player {
            trace!(current = ?self.current_player, "AI asked to move out of turn");
            return false;
        }

        let moves = self.valid_moves();
        if moves.is_empty() {
            return false;
        }

        let Some(choice) = self.selector.select_move(&self.board, ai_player, &moves) else {
            return false;
        };
        debug!(x = choice.x, y = choice.y, "AI chose move");

        self.try_place_at(choice.x, choice.y, false).success
    }

    pub fn status(&self) -> GameStatus {
        let score = self.score();
        let over = self.is_game_over();
        GameStatus {
            size: self.size(),
            board: self.cells().to_vec(),
            current_player: self.current_player,
            black_count: score.black,
            white_count: score.white,
            is_game_over: over.is_over,
            both_no_moves: over.both_no_moves,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from(self.score())
    }

    fn notify_board_changed(&mut self) {
        for observer in &mut self.observers {
            observer.board_changed();
        }
    }

    fn notify_game_over(&mut self, both_no_moves: bool) {
        for observer in &mut self.observers {
            observer.game_over(both_no_moves);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_board_for_test(&mut self, board: Board, current_player: Player) {
        self.configured_size = board.size();
        self.board = board;
        self.current_player = current_player;
    }
}

impl Default for ReversiEngine {
    fn default() -> Self {
        let board = Board::default();
        Self {
            configured_size: board.size(),
            board,
            current_player: Player::Black,
            observers: Vec::new(),
            selector: Box::new(GreedySelector::from_clock(Default::default())),
        }
    }
}
