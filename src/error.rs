//! Error type shared by the engine and its callers.
//!
//! Two of these are integration errors (`OutOfBounds` should never happen if
//! the host clamps its input), the rest are expected outcomes of normal play
//! that the host surfaces as a message and moves on from. None of them leave
//! the engine in a partially mutated state.

use std::fmt;

/// Result of attempting an engine command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Tried to play on a non-empty intersection.
    Occupied { row: usize, col: usize },
    /// Tried to step back past the first turn.
    AtStart,
    /// Tried to step forward past the most recent turn.
    AtEnd,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds { row, col, size } => {
                write!(f, "({row}, {col}) is outside the {size}x{size} board")
            }
            GoError::Occupied { .. } => write!(f, "...that space is already taken..."),
            GoError::AtStart => write!(f, "...already on first move..."),
            GoError::AtEnd => write!(f, "...already on most recent move..."),
        }
    }
}

impl std::error::Error for GoError {}
