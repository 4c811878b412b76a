use crate::{
    generators::RandomSource,
    maze::{Cell, Coord, GridMaze},
};

/// Cells per random opening attempt made by [`braid`].
pub const BRAID_DIVISOR: usize = 4;

/// Opens random walls to add loops to a carved maze.
///
/// Makes `rows * cols / BRAID_DIVISOR` attempts, each at a uniformly random
/// cell. Attempts that land on a non-wall cell do nothing. Returns the number
/// of walls opened.
pub fn braid<R: RandomSource + ?Sized>(maze: &mut GridMaze, rng: &mut R) -> usize {
    let (rows, cols) = (maze.rows(), maze.cols());
    let attempts = rows * cols / BRAID_DIVISOR;

    let mut opened = 0;
    for _ in 0..attempts {
        let coord = rng.pick_coord(rows, cols);
        if maze[coord] == Cell::Wall {
            maze.put(coord, Cell::Passage);
            opened += 1;
        }
    }
    opened
}

/// The cells opened by [`force_openings`]: right of and below Start, left of
/// and above End.
pub fn forced_cells(maze: &GridMaze) -> [Coord; 4] {
    let (rows, cols) = (maze.rows(), maze.cols());
    [(0, 1), (1, 0), (rows - 1, cols - 2), (rows - 2, cols - 1)]
}

/// Unconditionally opens the cells next to both terminals so each has a first step.
pub fn force_openings(maze: &mut GridMaze) {
    for coord in forced_cells(maze) {
        maze.put(coord, Cell::Passage);
    }
}
