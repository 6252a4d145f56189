use derive_more::{Display, Error};

/// Faults surfaced by the engine.
///
/// Illegal moves are not faults and never show up here; they are reported
/// through `PlaceResult` and empty flip lists.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Coordinate outside the current board.
    #[display("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: i32, y: i32, size: usize },

    /// Board side length cannot hold the standard opening.
    #[display("board size {_0} must be even and at least 4")]
    InvalidSize(#[error(not(source))] usize),

    /// Configuration text could not be parsed.
    #[display("config error: {_0}")]
    Config(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let err = EngineError::OutOfRange {
            x: 8,
            y: -1,
            size: 8,
        };
        assert_eq!(err.to_string(), "coordinate (8, -1) is outside the 8x8 board");
    }

    #[test]
    fn invalid_size_display() {
        assert_eq!(
            EngineError::InvalidSize(5).to_string(),
            "board size 5 must be even and at least 4"
        );
    }
}
