//! Territory scoring.
//!
//! Territory is a derived value: it is recomputed from the current grid on
//! every query and never stored in history. An empty region counts for a
//! color only when every stone on its border is that color; regions with a
//! mixed border, or with no bordering stones at all, count for nobody.

use crate::grid::{Color, Grid};
use crate::groups::empty_regions;

/// Enclosed empty area per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Territory {
    pub black: u32,
    pub white: u32,
}

impl Territory {
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// Score the enclosed empty regions of `grid`.
///
/// The engine short-circuits this to zero at turn 0; given an actual empty
/// board the lone region has no border and contributes nothing anyway.
pub fn compute_territory(grid: &Grid) -> Territory {
    let mut tally = Territory::default();
    for region in empty_regions(grid) {
        if region.bordered_only_by(Color::Black) {
            tally.black += region.size() as u32;
        } else if region.bordered_only_by(Color::White) {
            tally.white += region.size() as u32;
        }
    }
    tally
}
