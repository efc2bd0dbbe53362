// External libraries
use thiserror::Error;

/// Recoverable failures of the automaton engine. Coordinates are never
/// silently clamped; misuse is reported to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid dimensions must be strictly positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },
}
