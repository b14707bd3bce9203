//! Goban-Rust: the rules engine for the game of Go.
//!
//! This crate tracks board state across turns, applies moves, removes
//! captured groups, scores enclosed territory, and keeps a navigable move
//! history with a cursor. It deliberately stops there: no ko rule, no
//! game-end detection, no AI. A small console host drives it interactively.
//!
//! ## Modules
//!
//! - [`grid`] - Board storage and intersection states
//! - [`groups`] - Connected-component analysis (groups, liberties, borders)
//! - [`capture`] - Removal of zero-liberty groups after a move
//! - [`territory`] - Enclosed-area scoring
//! - [`history`] - Turn snapshots with undo/redo cursor
//! - [`engine`] - The command/query facade hosts talk to
//! - [`console`] - Text front end (coordinate parsing, board rendering)
//! - [`error`] - The shared error type
//!
//! ## Example
//!
//! ```
//! use goban_rust::engine::GoEngine;
//!
//! let mut game = GoEngine::new(9, 0);
//! game.place_stone(2, 2).unwrap(); // Black
//! game.place_stone(2, 3).unwrap(); // White
//!
//! let view = game.view();
//! assert_eq!(view.turn_index, 2);
//! ```

pub mod capture;
pub mod console;
pub mod engine;
pub mod error;
pub mod grid;
pub mod groups;
pub mod history;
pub mod territory;
