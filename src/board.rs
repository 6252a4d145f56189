use std::fmt;

use crate::config::DEFAULT_BOARD_SIZE;
use crate::error::EngineError;
use crate::types::{Cell, Coord, Player, Score};

/// Compass directions scanned from a placement: E, SE, S, SW, W, NW, N, NE.
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Square Reversi board stored row-major (`y * size + x`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with the four-disc opening.
    /// For size 8: (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white.
    pub fn new(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: Vec::new(),
        };
        board.reset();
        board
    }

    /// Builds a board from raw row-major cells.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, EngineError> {
        if cells.len() != size * size {
            return Err(EngineError::InvalidSize(size));
        }
        Ok(Self { size, cells })
    }

    /// Clears every cell and places the opening discs around the center.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.cells.resize(self.size * self.size, Cell::Empty);

        if self.size < 2 {
            return;
        }
        let m = (self.size / 2 - 1) as i32;
        self.set(m, m, Cell::White);
        self.set(m + 1, m, Cell::Black);
        self.set(m, m + 1, Cell::Black);
        self.set(m + 1, m + 1, Cell::White);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let size = self.size as i32;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    pub fn index(&self, x: i32, y: i32) -> Result<usize, EngineError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_range(x, y));
        }
        Ok(y as usize * self.size + x as usize)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, EngineError> {
        self.get(x, y).ok_or_else(|| self.out_of_range(x, y))
    }

    /// Counts the discs `player` would flip by placing at `(x, y)`, and
    /// lists them in direction order.
    ///
    /// Out-of-bounds and occupied squares flip nothing. The board is not
    /// modified.
    pub fn count_flips_if_place(&self, x: i32, y: i32, player: Player) -> (usize, Vec<Coord>) {
        if self.get(x, y) != Some(Cell::Empty) {
            return (0, Vec::new());
        }

        let mut flips = Vec::new();
        for (dx, dy) in DIRECTIONS {
            let run = self.capturable_run(x, y, dx, dy, player);
            flips.extend((1..=run as i32).map(|step| Coord::new(x + dx * step, y + dy * step)));
        }

        (flips.len(), flips)
    }

    /// Legality only; stops at the first capturable run.
    pub fn is_legal(&self, x: i32, y: i32, player: Player) -> bool {
        self.get(x, y) == Some(Cell::Empty)
            && DIRECTIONS
                .iter()
                .any(|&(dx, dy)| self.capturable_run(x, y, dx, dy, player) > 0)
    }

    /// Length of the opponent run walking from `(x, y)` along `(dx, dy)`,
    /// or 0 when it is empty or not closed by one of `player`'s discs.
    fn capturable_run(&self, x: i32, y: i32, dx: i32, dy: i32, player: Player) -> usize {
        let me = player.disc();
        let opp = player.opponent().disc();
        let mut cx = x + dx;
        let mut cy = y + dy;
        let mut run = 0usize;

        while self.get(cx, cy) == Some(opp) {
            run += 1;
            cx += dx;
            cy += dy;
        }

        if run > 0 && self.get(cx, cy) == Some(me) {
            run
        } else {
            0
        }
    }

    /// Places `player`'s disc and flips the captured discs.
    /// Returns the flipped coordinates, empty when the move is illegal
    /// (in which case nothing changes).
    pub fn place(&mut self, x: i32, y: i32, player: Player) -> Vec<Coord> {
        let (count, flips) = self.count_flips_if_place(x, y, player);
        if count == 0 {
            return flips;
        }

        let disc = player.disc();
        self.set(x, y, disc);
        for c in &flips {
            self.set(c.x, c.y, disc);
        }

        flips
    }

    /// Returns `(black, white)` disc counts.
    pub fn score(&self) -> Score {
        self.cells.iter().fold(Score::default(), |mut score, cell| {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
            score
        })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Row-major iteration over `(x, y)` of every empty square.
    pub fn empty_squares(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(move |(i, _)| Coord::new((i % size) as i32, (i / size) as i32))
            .filter(|c| self.in_bounds(c.x, c.y))
    }

    fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells.get(y as usize * self.size + x as usize).copied()
    }

    fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = y as usize * self.size + x as usize;
        if let Some(slot) = self.cells.get_mut(idx) {
            *slot = cell;
        }
    }

    fn out_of_range(&self, x: i32, y: i32) -> EngineError {
        EngineError::OutOfRange {
            x,
            y,
            size: self.size,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
