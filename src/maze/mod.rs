pub mod cell;
mod grid;

use std::fmt;

pub use cell::Cell;
use grid::Grid;

use crate::error::{MazeError, Result};

/// A `(row, col)` grid coordinate.
pub type Coord = (usize, usize);

/// Axis-aligned step direction in row/column terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Neighbor enumeration order shared by the carver and the solver.
///
/// BFS breaks ties between equally short paths by discovery order, so changing
/// this order changes which shortest path is returned.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Moves `distance` cells from `coord`, or `None` when that would go below zero.
    /// The upper bound is not checked here.
    pub fn apply(self, (row, col): Coord, distance: usize) -> Option<Coord> {
        match self {
            Direction::Up => row.checked_sub(distance).map(|r| (r, col)),
            Direction::Down => row.checked_add(distance).map(|r| (r, col)),
            Direction::Left => col.checked_sub(distance).map(|c| (row, c)),
            Direction::Right => col.checked_add(distance).map(|c| (row, c)),
        }
    }
}

/// A rectangular maze with Start at the top-left corner and End at the
/// bottom-right corner.
pub struct GridMaze {
    grid: Grid,
}

impl GridMaze {
    /// Creates a fully walled maze.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] unless both dimensions are at least 2.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(GridMaze {
            grid: Grid::new(rows, cols, Cell::Wall),
        })
    }

    /// Builds a maze from rows of [`Cell::symbol`] characters.
    ///
    /// Unknown characters are read as walls. Rows shorter than the first one
    /// are padded with walls.
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.as_ref().chars().count());
        let mut maze = GridMaze::new(rows, cols)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().take(cols).enumerate() {
                let cell = match ch {
                    '.' => Cell::Passage,
                    'S' => Cell::Start,
                    'E' => Cell::End,
                    _ => Cell::Wall,
                };
                maze.grid[(row, col)] = cell;
            }
        }
        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn start(&self) -> Coord {
        (0, 0)
    }

    pub fn end(&self) -> Coord {
        (self.rows() - 1, self.cols() - 1)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.grid.data()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    fn check_bounds(&self, coord: Coord) -> Result<()> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<Cell> {
        self.check_bounds(coord)?;
        Ok(self.grid[coord])
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<()> {
        self.check_bounds(coord)?;
        self.grid[coord] = cell;
        Ok(())
    }

    pub fn is_traversable(&self, coord: Coord) -> Result<bool> {
        self.get(coord).map(Cell::is_traversable)
    }

    /// Resets every cell to `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.grid.fill(cell);
    }

    /// The cell `distance` steps from `coord` in `direction`, if it lies inside the grid.
    pub fn offset(&self, coord: Coord, direction: Direction, distance: usize) -> Option<Coord> {
        direction
            .apply(coord, distance)
            .filter(|&c| self.is_in_bounds(c))
    }

    /// In-bounds axis-aligned neighbors of `coord`, in [`DIRECTIONS`] order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |d| self.offset(coord, d, 1))
    }

    /// Writes Start and End onto their corners, overwriting whatever was there.
    pub fn mark_terminals(&mut self) {
        let (start, end) = (self.start(), self.end());
        self.grid[start] = Cell::Start;
        self.grid[end] = Cell::End;
    }

    /// Sets a cell without returning a bounds error. Panics on an invalid coordinate.
    pub(crate) fn put(&mut self, coord: Coord, cell: Cell) {
        self.grid[coord] = cell;
    }
}

impl std::ops::Index<Coord> for GridMaze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl fmt::Display for GridMaze {
    /// One line per row, terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells().chunks(self.cols()) {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_walled() {
        let maze = GridMaze::new(3, 5).unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.cols(), 5);
        assert!(maze.cells().iter().all(|c| *c == Cell::Wall));
        assert_eq!(maze.start(), (0, 0));
        assert_eq!(maze.end(), (2, 4));
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert_eq!(
            GridMaze::new(1, 5).err(),
            Some(MazeError::InvalidDimensions { rows: 1, cols: 5 })
        );
        assert!(GridMaze::new(4, 0).is_err());
        assert!(GridMaze::new(2, 2).is_ok());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut maze = GridMaze::new(4, 4).unwrap();
        maze.set((2, 3), Cell::Passage).unwrap();
        assert_eq!(maze.get((2, 3)), Ok(Cell::Passage));
        assert_eq!(maze[(2, 3)], Cell::Passage);

        let err = MazeError::OutOfBounds {
            coord: (4, 0),
            rows: 4,
            cols: 4,
        };
        assert_eq!(maze.get((4, 0)), Err(err.clone()));
        assert_eq!(maze.set((4, 0), Cell::Passage), Err(err));
        assert!(maze.is_traversable((0, 4)).is_err());
    }

    #[test]
    fn test_traversable() {
        let mut maze = GridMaze::new(2, 2).unwrap();
        assert_eq!(maze.is_traversable((0, 1)), Ok(false));
        maze.mark_terminals();
        assert_eq!(maze.is_traversable((0, 0)), Ok(true));
        assert_eq!(maze.is_traversable((1, 1)), Ok(true));
        assert_eq!(maze[(0, 0)], Cell::Start);
        assert_eq!(maze[(1, 1)], Cell::End);
    }

    #[test]
    fn test_neighbors_follow_direction_order() {
        let maze = GridMaze::new(3, 3).unwrap();
        let inner = maze.neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(inner, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);

        let corner = maze.neighbors((0, 0)).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);

        let far_corner = maze.neighbors((2, 2)).collect::<Vec<_>>();
        assert_eq!(far_corner, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_offset() {
        let maze = GridMaze::new(5, 5).unwrap();
        assert_eq!(maze.offset((0, 0), Direction::Down, 2), Some((2, 0)));
        assert_eq!(maze.offset((0, 0), Direction::Up, 2), None);
        assert_eq!(maze.offset((3, 3), Direction::Right, 2), None);
        assert_eq!(maze.offset((3, 3), Direction::Left, 2), Some((3, 1)));
        // apply itself does not know about the grid
        assert_eq!(Direction::Right.apply((3, 3), 2), Some((3, 5)));
        assert_eq!(Direction::Left.apply((3, 1), 2), None);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = ["S.#", "#..", "##E"];
        let maze = GridMaze::from_rows(&rows).unwrap();
        assert_eq!(maze[(0, 1)], Cell::Passage);
        assert_eq!(maze[(1, 0)], Cell::Wall);
        assert_eq!(maze[(2, 2)], Cell::End);
        assert_eq!(maze.to_string(), "S.#\n#..\n##E\n");
    }
}
