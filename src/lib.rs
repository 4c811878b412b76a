//! Braided backtracking maze generation with breadth-first shortest-path solving.
//!
//! ```
//! use mazepath::{MazeConfig, solve};
//!
//! let config = MazeConfig::new(15, 21).unwrap().with_seed(Some(7));
//! let solution = solve(&config).unwrap();
//! assert!(solution.path.is_valid_for(&solution.maze));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod solvers;

pub use config::{MazeConfig, Solution, solve};
pub use error::{MazeError, Result};
pub use generators::{MazeGenerator, RandomSource};
pub use maze::{Cell, Coord, DIRECTIONS, Direction, GridMaze};
pub use solvers::{Path, find_path};
