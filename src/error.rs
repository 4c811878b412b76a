use thiserror::Error;

use crate::maze::Coord;

/// Failures surfaced by maze construction and solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("coordinate {coord:?} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        cols: usize,
    },

    #[error("no path connects start {start:?} to end {end:?}")]
    NoPathFound { start: Coord, end: Coord },

    /// Both dimensions must be at least 2 so the corner terminals are distinct.
    #[error("maze dimensions {rows}x{cols} are invalid, both must be at least 2")]
    InvalidDimensions { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
