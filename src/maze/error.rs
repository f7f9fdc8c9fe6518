use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Cell ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },
    #[error("Cell ({row}, {col}) was never populated")]
    UnsetCell { row: usize, col: usize },
    #[error("Floor variant count {0} is outside 1..=10")]
    InvalidVariantCount(usize),
    #[error("Player cannot start on blocked cell ({row}, {col})")]
    BlockedStart { row: usize, col: usize },
    #[error("Invalid level: {0}")]
    InvalidLevel(String),
}
