use serde::{Deserialize, Serialize};

/// Contents of one board square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The disc this player puts on the board.
    pub fn disc(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate, `x` is the column and `y` the row, both 0-indexed.
///
/// Signed so hosts can pass raw input without pre-validating it; anything
/// outside the board is simply not in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Disc tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// Outcome of `try_place_at`.
///
/// Contract:
/// - `success == false` implies `flipped == 0` and nothing changed.
/// - `success == true` carries the number of discs the move flips, whether
///   or not it was committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub success: bool,
    pub flipped: usize,
}

impl PlaceResult {
    pub(crate) fn rejected() -> Self {
        Self::default()
    }
}

/// Result of the terminal-state check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverState {
    pub is_over: bool,
    /// `true` when neither side can move; `false` for a full board or a
    /// game still in progress.
    pub both_no_moves: bool,
}

/// Public snapshot handed to hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub size: usize,
    /// Row-major cells, `y * size + x`.
    pub board: Vec<Cell>,
    pub current_player: Player,
    pub black_count: usize,
    pub white_count: usize,
    pub is_game_over: bool,
    pub both_no_moves: bool,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// `None` on a draw.
    pub winner: Option<Player>,
    pub black_count: usize,
    pub white_count: usize,
}

impl From<Score> for Outcome {
    fn from(score: Score) -> Self {
        let winner = match score.black.cmp(&score.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        };
        Self {
            winner,
            black_count: score.black,
            white_count: score.white,
        }
    }
}
