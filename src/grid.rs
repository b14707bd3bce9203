//! Board storage: a square grid of intersections.
//!
//! The grid is a pure value type. `set` is the only mutator and it does not
//! know anything about Go legality; occupancy checks, captures and history
//! belong to the layers above. Cloning a grid yields a fully independent
//! copy, which is what lets the history keep frozen snapshots.

use std::fmt;

use crate::error::GoError;

/// Stone colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// State of a single intersection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone(Color),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The stone color at this intersection, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Stone(c) => Some(c),
        }
    }
}

/// A point on the board as `(row, col)`, row 0 at the bottom.
pub type Point = (usize, usize);

/// Square board of side `size`, stored as a flat row-major vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn check(&self, row: usize, col: usize) -> Result<(), GoError> {
        if row >= self.size || col >= self.size {
            return Err(GoError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GoError> {
        self.check(row, col)?;
        Ok(self.cells[self.idx(row, col)])
    }

    /// Set an intersection. Does not validate game legality, only bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GoError> {
        self.check(row, col)?;
        let i = self.idx(row, col);
        self.cells[i] = cell;
        Ok(())
    }

    /// Indexed access for coordinates already known to be in bounds.
    pub(crate) fn at(&self, (row, col): Point) -> Cell {
        self.cells[self.idx(row, col)]
    }

    pub(crate) fn clear(&mut self, (row, col): Point) {
        let i = self.idx(row, col);
        self.cells[i] = Cell::Empty;
    }

    /// The 4-adjacent in-bounds neighbors of a point.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// All points of the board in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }
}

impl fmt::Display for Grid {
    /// Renders the top row first so the text matches the board orientation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.size).rev() {
            for col in 0..self.size {
                let ch = match self.at((row, col)) {
                    Cell::Stone(Color::Black) => 'X',
                    Cell::Stone(Color::White) => 'O',
                    Cell::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    /// Build a grid from rows listed top to bottom, one `X`/`O`/`.` token per
    /// intersection, matching the `Display` output.
    pub(crate) fn grid_from_rows(rows: &[&str]) -> Grid {
        let size = rows.len();
        let mut grid = Grid::new(size);
        for (i, line) in rows.iter().enumerate() {
            let row = size - 1 - i;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            assert_eq!(tokens.len(), size, "row {i} has wrong width");
            for (col, tok) in tokens.iter().enumerate() {
                let cell = match *tok {
                    "X" => Cell::Stone(Color::Black),
                    "O" => Cell::Stone(Color::White),
                    "." => Cell::Empty,
                    other => panic!("unknown cell token {other:?}"),
                };
                grid.set(row, col, cell).unwrap();
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(9);
        for p in grid.points() {
            assert_eq!(grid.at(p), Cell::Empty);
        }
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = Grid::new(9);
        grid.set(2, 3, Cell::Stone(Color::Black)).unwrap();
        assert_eq!(grid.get(2, 3).unwrap(), Cell::Stone(Color::Black));
        assert_eq!(grid.get(3, 2).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(9);
        assert_eq!(
            grid.get(9, 0),
            Err(GoError::OutOfBounds {
                row: 9,
                col: 0,
                size: 9
            })
        );
        let mut grid = grid;
        assert!(grid.set(0, 9, Cell::Empty).is_err());
    }

    #[test]
    fn test_set_does_not_check_occupancy() {
        // Legality is the engine's job, not the grid's.
        let mut grid = Grid::new(5);
        grid.set(1, 1, Cell::Stone(Color::Black)).unwrap();
        grid.set(1, 1, Cell::Stone(Color::White)).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), Cell::Stone(Color::White));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::new(5);
        let snapshot = grid.clone();
        grid.set(0, 0, Cell::Stone(Color::Black)).unwrap();
        assert_eq!(snapshot.get(0, 0).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let grid = Grid::new(9);
        assert_eq!(grid.neighbors((0, 0)).count(), 2);
        assert_eq!(grid.neighbors((8, 8)).count(), 2);
        assert_eq!(grid.neighbors((4, 4)).count(), 4);
        assert_eq!(grid.neighbors((0, 4)).count(), 3);
    }
}
