mod bfs;

pub use bfs::solve_bfs;

use crate::{
    error::Result,
    maze::{Coord, GridMaze},
};

/// An ordered Start to End route through 4-adjacent cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        Path { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells on the path, both terminals included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Checks that the path runs from Start to End over traversable cells,
    /// each one a single axis-aligned step from the previous.
    pub fn is_valid_for(&self, maze: &GridMaze) -> bool {
        let (Some(&first), Some(&last)) = (self.cells.first(), self.cells.last()) else {
            return false;
        };
        let adjacent =
            |(a, b): (&Coord, &Coord)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1;

        first == maze.start()
            && last == maze.end()
            && self
                .cells
                .iter()
                .all(|&c| maze.is_traversable(c).unwrap_or(false))
            && self.cells.iter().zip(self.cells.iter().skip(1)).all(adjacent)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Shortest Start to End path through `maze`.
pub fn find_path(maze: &GridMaze) -> Result<Path> {
    solve_bfs(maze)
}
