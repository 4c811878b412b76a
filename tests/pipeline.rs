use std::collections::VecDeque;

use mazepath::{
    Cell, Coord, GridMaze, MazeConfig, MazeError, MazeGenerator, RandomSource, find_path, solve,
};

/// Replays a fixed script of choices.
struct Scripted {
    picks: VecDeque<usize>,
    coords: VecDeque<Coord>,
}

impl RandomSource for Scripted {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.picks.pop_front().expect("script ran out of picks")
    }

    fn pick_coord(&mut self, _rows: usize, _cols: usize) -> Coord {
        self.coords.pop_front().expect("script ran out of coords")
    }
}

/// Brute force: shortest simple path length by exhaustive depth-first enumeration.
fn exhaustive_distance(maze: &GridMaze) -> Option<usize> {
    fn walk(
        maze: &GridMaze,
        at: Coord,
        depth: usize,
        seen: &mut Vec<bool>,
        best: &mut Option<usize>,
    ) {
        if best.is_some_and(|b| depth >= b) {
            return;
        }
        if at == maze.end() {
            *best = Some(depth);
            return;
        }
        for n in maze.neighbors(at).collect::<Vec<_>>() {
            let idx = n.0 * maze.cols() + n.1;
            if seen[idx] || !maze[n].is_traversable() {
                continue;
            }
            seen[idx] = true;
            walk(maze, n, depth + 1, seen, best);
            seen[idx] = false;
        }
    }

    let mut seen = vec![false; maze.cells().len()];
    seen[0] = true;
    let mut best = None;
    walk(maze, maze.start(), 0, &mut seen, &mut best);
    best
}

#[test]
fn solvable_across_a_thousand_seeds() {
    for seed in 0..1000u64 {
        let rows = 2 + (seed % 23) as usize;
        let cols = 2 + (seed / 23 % 19) as usize;
        let config = MazeConfig::new(rows, cols).unwrap().with_seed(Some(seed));
        let solution = solve(&config)
            .unwrap_or_else(|err| panic!("seed {seed} ({rows}x{cols}) failed: {err}"));

        assert_eq!(solution.maze[(0, 0)], Cell::Start);
        assert_eq!(solution.maze[(rows - 1, cols - 1)], Cell::End);
        assert!(solution.path.is_valid_for(&solution.maze), "seed {seed}");
    }
}

#[test]
fn unbraided_mazes_are_solvable_too() {
    for seed in 0..200u64 {
        let config = MazeConfig::new(8 + (seed % 5) as usize, 9)
            .unwrap()
            .with_seed(Some(seed))
            .with_braid(false);
        let solution = solve(&config).unwrap();
        assert!(solution.path.is_valid_for(&solution.maze));
    }
}

#[test]
fn path_cells_are_open_and_adjacent() {
    let solution = solve(&MazeConfig::new(41, 63).unwrap().with_seed(Some(123))).unwrap();
    let cells = solution.path.cells();
    assert_eq!(cells.first(), Some(&(0, 0)));
    assert_eq!(cells.last(), Some(&(40, 62)));
    for &c in cells {
        assert_ne!(solution.maze[c], Cell::Wall);
    }
    for pair in cells.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
    }
}

#[test]
fn bfs_matches_exhaustive_search_on_small_mazes() {
    let maze = GridMaze::from_rows(&["S.#..", "#.#.#", ".....", ".##..", "..##E"]).unwrap();
    assert_eq!(exhaustive_distance(&maze), Some(8));
    assert_eq!(find_path(&maze).unwrap().steps(), 8);

    for seed in 0..40u64 {
        let maze = MazeGenerator::from_seed(Some(seed)).generate(5, 5).unwrap();
        let path = find_path(&maze).unwrap();
        assert_eq!(Some(path.steps()), exhaustive_distance(&maze), "seed {seed}");
    }
}

#[test]
fn same_seed_same_maze_and_path() {
    let config = MazeConfig::new(33, 47).unwrap().with_seed(Some(987_654));
    let a = solve(&config).unwrap();
    let b = solve(&config).unwrap();
    assert_eq!(a.maze.to_string(), b.maze.to_string());
    assert_eq!(a.path, b.path);
}

#[test]
fn smallest_grid() {
    for seed in 0..20u64 {
        let solution = solve(&MazeConfig::new(2, 2).unwrap().with_seed(Some(seed))).unwrap();
        // Forced openings leave no wall in a 2x2 grid
        assert_eq!(solution.maze.to_string(), "S.\n.E\n");
        assert_eq!(solution.path.cells(), &[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(solution.path.steps(), 2);
    }
}

#[test]
fn walled_grid_reports_no_path() {
    let mut maze = GridMaze::new(6, 6).unwrap();
    maze.mark_terminals();
    assert_eq!(
        find_path(&maze),
        Err(MazeError::NoPathFound {
            start: (0, 0),
            end: (5, 5)
        })
    );
}

#[test]
fn golden_four_by_four() {
    let source = Scripted {
        picks: VecDeque::from([1, 0, 0]),
        coords: VecDeque::from([(3, 0), (0, 1), (1, 1), (3, 3)]),
    };
    let maze = MazeGenerator::new(source).generate(4, 4).unwrap();
    assert_eq!(maze.to_string(), "S..#\n...#\n....\n.#.E\n");
    assert_eq!(
        find_path(&maze).unwrap().cells(),
        &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (3, 2), (3, 3)]
    );
}
