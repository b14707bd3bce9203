//! Connected-component analysis over the board.
//!
//! This is the one algorithm everything else leans on: captures run it over
//! stones of a color, territory runs it over empty intersections. Groups are
//! recomputed from scratch on each call; nothing here is cached or
//! incrementally maintained, so there is no stale-group state to defend.

use std::collections::HashSet;

use crate::grid::{Cell, Color, Grid, Point};

/// A maximal 4-connected set of intersections matching one predicate.
#[derive(Debug, Clone)]
pub struct Group {
    /// Member intersections, in discovery order.
    pub members: Vec<Point>,
    /// Empty intersections 4-adjacent to at least one member.
    pub liberties: HashSet<Point>,
    /// Distinct stone colors 4-adjacent to at least one member, outside the
    /// group itself.
    pub borders: HashSet<Color>,
}

impl Group {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// True if the border set is exactly the given single color.
    pub fn bordered_only_by(&self, color: Color) -> bool {
        self.borders.len() == 1 && self.borders.contains(&color)
    }
}

/// Partition the intersections matching `pred` into maximal 4-connected
/// groups, computing each group's liberties and border colors.
///
/// Every matching intersection lands in exactly one group; discovery order is
/// row-major from the bottom-left but callers should not rely on it.
pub fn find_groups<F>(grid: &Grid, pred: F) -> Vec<Group>
where
    F: Fn(Cell) -> bool,
{
    let size = grid.size();
    let mut visited = vec![false; size * size];
    let mut groups = Vec::new();

    let flat = |(row, col): Point| row * size + col;

    for start in grid.points() {
        if visited[flat(start)] || !pred(grid.at(start)) {
            continue;
        }

        // Flood fill from this seed.
        let mut members = Vec::new();
        let mut liberties = HashSet::new();
        let mut borders = HashSet::new();
        let mut stack = vec![start];
        visited[flat(start)] = true;

        while let Some(p) = stack.pop() {
            members.push(p);
            for n in grid.neighbors(p) {
                let cell = grid.at(n);
                if pred(cell) {
                    if !visited[flat(n)] {
                        visited[flat(n)] = true;
                        stack.push(n);
                    }
                } else {
                    match cell {
                        Cell::Empty => {
                            liberties.insert(n);
                        }
                        Cell::Stone(c) => {
                            borders.insert(c);
                        }
                    }
                }
            }
        }

        groups.push(Group {
            members,
            liberties,
            borders,
        });
    }

    groups
}

/// Groups of stones of one color.
pub fn stone_groups(grid: &Grid, color: Color) -> Vec<Group> {
    find_groups(grid, |cell| cell == Cell::Stone(color))
}

/// Maximal regions of empty intersections.
pub fn empty_regions(grid: &Grid) -> Vec<Group> {
    find_groups(grid, Cell::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests_support::grid_from_rows;

    #[test]
    fn test_groups_partition_matching_cells() {
        let grid = grid_from_rows(&[
            "X X . O .", //
            "X . O O .",
            ". . . . X",
            "X X . . X",
            ". X . . .",
        ]);
        for color in [Color::Black, Color::White] {
            let groups = stone_groups(&grid, color);
            let mut seen = HashSet::new();
            for g in &groups {
                for &p in &g.members {
                    assert!(seen.insert(p), "{p:?} appears in two groups");
                    assert_eq!(grid.at(p), Cell::Stone(color));
                }
            }
            let all: HashSet<Point> = grid
                .points()
                .filter(|&p| grid.at(p) == Cell::Stone(color))
                .collect();
            assert_eq!(seen, all, "groups must cover every {color:?} stone");
        }
    }

    #[test]
    fn test_diagonal_stones_are_separate_groups() {
        let grid = grid_from_rows(&[
            ". . .", //
            ". X .",
            "X . .",
        ]);
        let groups = stone_groups(&grid, Color::Black);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_single_stone_liberties() {
        let grid = grid_from_rows(&[
            ". . .", //
            ". X .",
            ". . .",
        ]);
        let groups = stone_groups(&grid, Color::Black);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].liberties.len(), 4);
        assert!(groups[0].borders.is_empty());
    }

    #[test]
    fn test_liberties_are_a_set() {
        // The pair touches five distinct empty points; no liberty is counted
        // twice even though both stones see some of them.
        let grid = grid_from_rows(&[
            ". . .", //
            "X X .",
            ". . .",
        ]);
        let groups = stone_groups(&grid, Color::Black);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].size(), 2);
        assert_eq!(groups[0].liberties.len(), 5);
    }

    #[test]
    fn test_surrounded_stone_has_no_liberties() {
        let grid = grid_from_rows(&[
            ". O .", //
            "O X O",
            ". O .",
        ]);
        let groups = stone_groups(&grid, Color::Black);
        assert_eq!(groups.len(), 1);
        assert!(groups[0].liberties.is_empty());
        assert_eq!(groups[0].borders, HashSet::from([Color::White]));
    }

    #[test]
    fn test_empty_region_border_colors() {
        let grid = grid_from_rows(&[
            "X X X", //
            "X . X",
            "X X X",
        ]);
        let regions = empty_regions(&grid);
        assert_eq!(regions.len(), 1);
        assert!(regions[0].bordered_only_by(Color::Black));
        assert!(!regions[0].bordered_only_by(Color::White));
    }

    #[test]
    fn test_empty_board_is_one_region_with_no_border() {
        let grid = Grid::new(5);
        let regions = empty_regions(&grid);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].size(), 25);
        assert!(regions[0].borders.is_empty());
    }
}
