//! Capture detection and removal.
//!
//! After a stone lands, groups with no liberties come off the board. The
//! mover's own color is checked first, then the opponent's, with a fresh
//! group analysis between the passes so removals in the first pass open
//! liberties for the second. Checking the mover first means a play that
//! fills its own group's last liberty removes that group even when the same
//! play would have captured the opponent; there is no suicide special case.

use crate::grid::{Color, Grid};
use crate::groups::stone_groups;
use crate::history::Score;

/// Remove all zero-liberty groups created by a stone of `just_played`
/// landing on `grid`. Returns the capture counts from this move alone,
/// credited to the capturing side.
pub fn apply_captures(grid: &mut Grid, just_played: Color) -> Score {
    let mut delta = Score::default();
    remove_dead_groups(grid, just_played, &mut delta);
    remove_dead_groups(grid, just_played.flip(), &mut delta);
    delta
}

/// One pass: clear every `color` group without liberties, crediting the
/// opposing side with the stones taken. Always re-analyzes the grid as it
/// stands, so an earlier pass's removals are seen.
fn remove_dead_groups(grid: &mut Grid, color: Color, delta: &mut Score) {
    for group in stone_groups(grid, color) {
        if group.liberties.is_empty() {
            for &p in &group.members {
                grid.clear(p);
            }
            delta.add(color.flip(), group.size() as u32);
        }
    }
}
