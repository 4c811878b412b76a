use std::collections::VecDeque;

use super::Path;
use crate::{
    error::{MazeError, Result},
    maze::{Coord, GridMaze},
};

/// Finds the shortest Start to End path by breadth-first search.
///
/// Neighbors are explored in [`DIRECTIONS`](crate::maze::DIRECTIONS) order, so
/// among several equally short paths the one returned is fixed for a given grid.
pub fn solve_bfs(maze: &GridMaze) -> Result<Path> {
    let start = maze.start();
    let goal = maze.end();
    let cols = maze.cols();
    let index = |(row, col): Coord| row * cols + col;

    let mut visited = vec![false; maze.cells().len()];
    // Start keeps `None` as its parent
    let mut parents: Vec<Option<Coord>> = vec![None; maze.cells().len()];
    let mut queue = VecDeque::from([start]);
    visited[index(start)] = true;
    let mut explored = 0usize;

    while let Some(current) = queue.pop_front() {
        explored += 1;
        if current == goal {
            break;
        }
        for neighbor in maze.neighbors(current) {
            if visited[index(neighbor)] || !maze[neighbor].is_traversable() {
                continue;
            }
            visited[index(neighbor)] = true;
            parents[index(neighbor)] = Some(current);
            queue.push_back(neighbor);
        }
    }

    tracing::debug!(explored, reached = visited[index(goal)], "[bfs] search finished");

    let no_path = MazeError::NoPathFound { start, end: goal };
    if !visited[index(goal)] {
        return Err(no_path);
    }

    // Walk back from the goal, then reverse so the path runs Start to End
    let mut cells = vec![goal];
    let mut current = goal;
    while let Some(parent) = parents[index(current)] {
        cells.push(parent);
        current = parent;
    }
    if current != start {
        return Err(no_path);
    }
    cells.reverse();

    Ok(Path::new(cells))
}
