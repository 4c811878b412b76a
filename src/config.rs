use rand::rngs::StdRng;

use crate::{
    error::{MazeError, Result},
    generators::MazeGenerator,
    maze::GridMaze,
    solvers::{Path, find_path},
};

/// Parameters for one generate-and-solve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    braid: bool,
}

impl MazeConfig {
    /// Fails with [`MazeError::InvalidDimensions`] unless both dimensions are at least 2.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(MazeConfig {
            rows,
            cols,
            seed: None,
            braid: true,
        })
    }

    /// Fixing the seed makes both the maze and its path reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_braid(mut self, braid: bool) -> Self {
        self.braid = braid;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn braid(&self) -> bool {
        self.braid
    }

    pub fn generator(&self) -> MazeGenerator<StdRng> {
        MazeGenerator::from_seed(self.seed).with_braiding(self.braid)
    }
}

/// A generated maze together with its shortest path.
pub struct Solution {
    pub maze: GridMaze,
    pub path: Path,
}

/// Generates a maze for `config` and solves it.
pub fn solve(config: &MazeConfig) -> Result<Solution> {
    let maze = config.generator().generate(config.rows, config.cols)?;
    let path = find_path(&maze)?;
    tracing::info!(
        rows = config.rows,
        cols = config.cols,
        seed = ?config.seed,
        steps = path.steps(),
        "maze solved"
    );
    Ok(Solution { maze, path })
}
