use crate::{
    generators::RandomSource,
    maze::{Cell, Coord, DIRECTIONS, GridMaze},
};

/// Rooms two steps away from `coord` that are in bounds and still walled,
/// in [`DIRECTIONS`] order.
fn unvisited_rooms(coord: Coord, maze: &GridMaze) -> Vec<Coord> {
    DIRECTIONS
        .into_iter()
        .filter_map(|d| maze.offset(coord, d, 2))
        .filter(|&c| maze[c] == Cell::Wall)
        .collect()
}

/// Carves a spanning tree over the even-indexed rooms with randomized
/// depth-first backtracking, starting from `(0, 0)`.
///
/// Every cell is reset to a wall first. Uses an explicit stack so large grids
/// do not exhaust the call stack. Returns the number of rooms opened.
pub fn recursive_backtrack<R: RandomSource + ?Sized>(maze: &mut GridMaze, rng: &mut R) -> usize {
    maze.fill(Cell::Wall);

    let start = (0, 0);
    maze.put(start, Cell::Passage);
    let mut opened = 1;

    // The stack only ever holds opened rooms
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = unvisited_rooms(cell, maze);
        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.pick_index(neighbors.len())];
        let connector = ((cell.0 + neighbor.0) / 2, (cell.1 + neighbor.1) / 2);
        maze.put(connector, Cell::Passage);
        maze.put(neighbor, Cell::Passage);
        opened += 1;
        stack.push(neighbor);
    }

    opened
}
