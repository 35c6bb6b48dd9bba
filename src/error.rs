use thiserror::Error;

/// Errors surfaced by grid and generator operations.
///
/// All of these are local, synchronous failures; none represent a transient
/// condition worth retrying.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Grid construction was asked for a zero-sized dimension.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A coordinate (or a passage through an outer wall) outside the grid.
    #[error("coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },

    /// The generator was used before `init`.
    #[error("generator has not been started")]
    NotStarted,
}
