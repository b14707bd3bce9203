//! The engine facade the host drives.
//!
//! `GoEngine` owns the history and the active-color marker and exposes the
//! whole command surface: place a stone, pass, step backward and forward.
//! Hosts only ever see [`View`] snapshots; nothing they get back can reach
//! into the history. A command either applies completely or fails with no
//! observable change.

use crate::capture::apply_captures;
use crate::error::GoError;
use crate::grid::{Cell, Color, Grid};
use crate::history::{GameHistory, Score};
use crate::territory::{Territory, compute_territory};

/// Read-only snapshot of the engine state after a command, valid until the
/// next command.
#[derive(Debug, Clone)]
pub struct View {
    pub grid: Grid,
    pub black_score: u32,
    pub white_score: u32,
    pub black_territory: u32,
    pub white_territory: u32,
    pub turn_index: usize,
    pub active_color: Color,
}

/// A successful stone placement: the new view plus what the move captured.
#[derive(Debug, Clone)]
pub struct MoveReport {
    pub view: View,
    /// Stones captured by this move alone, credited to the capturing side.
    pub captured: Score,
}

/// The Go rules engine.
pub struct GoEngine {
    size: usize,
    handicap: usize,
    marker: Color,
    history: GameHistory,
}

impl GoEngine {
    /// Fresh game on an empty `size` x `size` board. Black moves first.
    pub fn new(size: usize, handicap: usize) -> Self {
        Self {
            size,
            handicap,
            marker: Color::Black,
            history: GameHistory::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The color to play, as reported to the host. While the turn index is
    /// within the handicap count this is forced to Black regardless of the
    /// normal alternation; actual handicap stones are not placed.
    pub fn active_color(&self) -> Color {
        if self.handicap > 0 && self.history.cursor() <= self.handicap {
            Color::Black
        } else {
            self.marker
        }
    }

    /// Snapshot the current turn. Territory is recomputed on every call and
    /// is zero at turn 0 by definition.
    pub fn view(&self) -> View {
        let record = self.history.current();
        let territory = if self.history.cursor() == 0 {
            Territory::default()
        } else {
            compute_territory(&record.grid)
        };
        View {
            grid: record.grid.clone(),
            black_score: record.score.black,
            white_score: record.score.white,
            black_territory: territory.black,
            white_territory: territory.white,
            turn_index: self.history.cursor(),
            active_color: self.active_color(),
        }
    }

    /// Play the active color at `(row, col)`.
    ///
    /// On success the move is committed to history (discarding any redo
    /// branch), captures are resolved and scored, and the marker flips. On
    /// `Occupied` or `OutOfBounds` nothing changes.
    pub fn place_stone(&mut self, row: usize, col: usize) -> Result<MoveReport, GoError> {
        let current = self.history.current();
        if current.grid.get(row, col)? != Cell::Empty {
            return Err(GoError::Occupied { row, col });
        }

        let color = self.active_color();
        let mut grid = current.grid.clone();
        grid.set(row, col, Cell::Stone(color))?;
        let captured = apply_captures(&mut grid, color);

        let mut score = current.score;
        score.accumulate(captured);
        self.history.apply_move(grid, score);
        self.marker = color.flip();

        Ok(MoveReport {
            view: self.view(),
            captured,
        })
    }

    /// Pass: flip the marker without committing a history record. Passes
    /// are not tracked as moves, so two passes in a row leave the board and
    /// the history exactly as they were.
    pub fn pass(&mut self) -> View {
        self.marker = self.active_color().flip();
        self.view()
    }

    /// Step the cursor one turn back, toggling the marker to match who was
    /// to move at that point. Fails with `AtStart` at turn 0, untouched.
    pub fn undo(&mut self) -> Result<View, GoError> {
        let color = self.active_color();
        self.history.step_back()?;
        self.marker = color.flip();
        Ok(self.view())
    }

    /// Step the cursor one turn forward into a committed record. Fails with
    /// `AtEnd` on the most recent turn, untouched.
    pub fn redo(&mut self) -> Result<View, GoError> {
        let color = self.active_color();
        self.history.step_forward()?;
        self.marker = color.flip();
        Ok(self.view())
    }
}
