use std::fmt;

/// State of a single grid cell.
///
/// `Wall` is the only variant that blocks movement.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Passage,
    /// The cell the solver starts from.
    Start,
    /// The cell the solver is looking for.
    End,
}

impl Cell {
    pub fn is_traversable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Plain single-character symbol used by the console printer.
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Passage => '.',
            Cell::Start => 'S',
            Cell::End => 'E',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_wall_blocks() {
        assert!(!Cell::Wall.is_traversable());
        assert!(Cell::Passage.is_traversable());
        assert!(Cell::Start.is_traversable());
        assert!(Cell::End.is_traversable());
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols = [Cell::Wall, Cell::Passage, Cell::Start, Cell::End].map(Cell::symbol);
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
