//! Turn history: an append-only sequence of board snapshots with a cursor.
//!
//! Every committed move freezes a `(grid, score)` pair; index 0 is the empty
//! board before any move, so the sequence is never empty. The cursor marks
//! the turn being displayed or edited and can sit anywhere in the sequence.
//! Navigation only moves the cursor. Committing a move while the cursor sits
//! behind the last record first discards everything after the cursor; there
//! is no redo tree, the abandoned branch is gone for good.

use crate::error::GoError;
use crate::grid::{Color, Grid};

/// Cumulative capture counts, credited to the capturing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn add(&mut self, color: Color, count: u32) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }

    /// Fold a per-move capture delta into the running totals.
    pub fn accumulate(&mut self, delta: Score) {
        self.black += delta.black;
        self.white += delta.white;
    }
}

/// One committed turn: the board after the move and the score at that point.
#[derive(Debug, Clone)]
pub struct TurnRecord {
    pub grid: Grid,
    pub score: Score,
}

/// Ordered turn records plus the cursor.
#[derive(Debug, Clone)]
pub struct GameHistory {
    records: Vec<TurnRecord>,
    cursor: usize,
}

impl GameHistory {
    /// Start a history with the empty board at index 0.
    pub fn new(size: usize) -> Self {
        Self {
            records: vec![TurnRecord {
                grid: Grid::new(size),
                score: Score::default(),
            }],
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records; at least 1, since index 0 always exists.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// The record at the cursor.
    pub fn current(&self) -> &TurnRecord {
        &self.records[self.cursor]
    }

    /// Commit a move: drop any records beyond the cursor, append the new
    /// snapshot, and advance the cursor onto it.
    pub fn apply_move(&mut self, grid: Grid, score: Score) {
        self.records.truncate(self.cursor + 1);
        self.records.push(TurnRecord { grid, score });
        self.cursor = self.records.len() - 1;
    }

    /// Move the cursor one turn back. Records are untouched.
    pub fn step_back(&mut self) -> Result<(), GoError> {
        if self.cursor == 0 {
            return Err(GoError::AtStart);
        }
        self.cursor -= 1;
        Ok(())
    }

    /// Move the cursor one turn forward, into a previously committed record.
    pub fn step_forward(&mut self) -> Result<(), GoError> {
        if self.cursor == self.records.len() - 1 {
            return Err(GoError::AtEnd);
        }
        self.cursor += 1;
        Ok(())
    }
}
