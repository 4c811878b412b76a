use rand::{Rng, SeedableRng, rngs::StdRng};

mod backtrack;
mod braid;

pub use backtrack::recursive_backtrack;
pub use braid::{BRAID_DIVISOR, braid, force_openings, forced_cells};

use crate::{
    error::Result,
    maze::{Coord, GridMaze},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The random choices maze generation needs.
///
/// Every [`rand::Rng`] is a `RandomSource`.
pub trait RandomSource {
    /// A uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// A uniform coordinate in a `rows` x `cols` grid, row drawn first.
    fn pick_coord(&mut self, rows: usize, cols: usize) -> Coord;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    fn pick_coord(&mut self, rows: usize, cols: usize) -> Coord {
        let row = self.random_range(0..rows);
        let col = self.random_range(0..cols);
        (row, col)
    }
}

/// Builds braided mazes that always have a Start to End route.
///
/// Generation runs four passes, each allowed to overwrite the previous ones:
/// backtracking carve, braiding, forced openings next to the terminals, and
/// finally the terminals themselves.
pub struct MazeGenerator<R = StdRng> {
    rng: R,
    braid: bool,
}

impl MazeGenerator<StdRng> {
    /// `None` draws the seed from the operating system.
    pub fn from_seed(seed: Option<u64>) -> Self {
        MazeGenerator::new(get_rng(seed))
    }
}

impl<R: RandomSource> MazeGenerator<R> {
    pub fn new(rng: R) -> Self {
        MazeGenerator { rng, braid: true }
    }

    /// Turns the braiding pass on or off. On by default.
    pub fn with_braiding(mut self, braid: bool) -> Self {
        self.braid = braid;
        self
    }

    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<GridMaze> {
        let mut maze = GridMaze::new(rows, cols)?;
        self.generate_into(&mut maze);
        Ok(maze)
    }

    /// Regenerates `maze` in place, keeping its dimensions.
    pub fn generate_into(&mut self, maze: &mut GridMaze) {
        let rooms = recursive_backtrack(maze, &mut self.rng);
        let braided = if self.braid {
            braid(maze, &mut self.rng)
        } else {
            0
        };
        force_openings(maze);
        maze.mark_terminals();

        tracing::debug!(
            rows = maze.rows(),
            cols = maze.cols(),
            rooms,
            braided,
            "[generate] maze carved"
        );
    }
}
