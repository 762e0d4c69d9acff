//! Types and utilities for working with 4-connected grid maps.

use enumset::{EnumSet, EnumSetType};

use crate::Grid;

#[derive(EnumSetType, Debug, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    pub fn backwards(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// Coordinate offset of one step in this direction. North is towards negative `y`.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
        }
    }

    pub fn step(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.offset();
        (x + dx, y + dy)
    }
}

/// Grid map where each traversable cell connects to its traversable orthogonal neighbours.
///
/// Every move costs 1.
#[derive(Clone, Debug)]
pub struct FourConnected {
    traversable: Grid<bool>,
}

impl FourConnected {
    /// Creates a map with every cell traversable.
    pub fn open(width: i32, height: i32) -> Self {
        FourConnected {
            traversable: Grid::new(width, height, |_, _| true),
        }
    }

    pub fn from_grid(traversable: Grid<bool>) -> Self {
        FourConnected { traversable }
    }

    /// Parses a map from rows of text, where `#` marks a blocked cell.
    ///
    /// # Panics
    /// Panics if the rows are not all the same length.
    #[track_caller]
    pub fn parse(map: &str) -> Self {
        let rows: Vec<&[u8]> = map
            .lines()
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(str::as_bytes)
            .collect();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == width),
            "map rows must have equal length"
        );
        FourConnected {
            traversable: Grid::new(width as i32, rows.len() as i32, |x, y| {
                rows[y as usize][x as usize] != b'#'
            }),
        }
    }

    pub fn width(&self) -> i32 {
        self.traversable.width()
    }

    pub fn height(&self) -> i32 {
        self.traversable.height()
    }

    pub fn is_traversable(&self, (x, y): (i32, i32)) -> bool {
        self.traversable.get(x, y).copied().unwrap_or(false)
    }

    #[track_caller]
    pub fn set_traversable(&mut self, cell: (i32, i32), traversable: bool) {
        self.traversable[cell] = traversable;
    }

    /// Directions in which a move from `cell` lands on a traversable cell.
    pub fn moves(&self, cell: (i32, i32)) -> EnumSet<Direction> {
        if !self.is_traversable(cell) {
            return EnumSet::empty();
        }
        EnumSet::<Direction>::all()
            .iter()
            .filter(|dir| self.is_traversable(dir.step(cell)))
            .collect()
    }

    /// Traversable neighbours of `cell`.
    pub fn successors(&self, cell: (i32, i32)) -> Vec<(i32, i32)> {
        self.moves(cell).iter().map(|dir| dir.step(cell)).collect()
    }
}

pub fn manhattan_distance(from: (i32, i32), to: (i32, i32)) -> f64 {
    ((from.0 - to.0).abs() + (from.1 - to.1).abs()) as f64
}
