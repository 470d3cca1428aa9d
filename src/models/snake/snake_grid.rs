//! Cells, directions and the grid the snake lives on.
use rand::Rng;

use super::snake_config::{Result, SnakeError};

/// A cell on the grid. `y` grows downward, like the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.value();
        Self {
            x: self.x + i64::from(dx),
            y: self.y + i64::from(dy),
        }
    }
}

/// Direction the snake is travelling in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Still,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const VARIANTS: &'static [Direction] = &[
        Self::Still,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// The `(x_dir, y_dir)` vector of the direction.
    #[must_use]
    pub fn value(self) -> (i8, i8) {
        match self {
            Direction::Still => (0, 0),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Looks up the direction for a raw vector.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidDirection`] for anything but the five unit moves.
    pub fn from_values(x: i8, y: i8) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|d| d.value() == (x, y))
            .ok_or(SnakeError::InvalidDirection((x, y)))
    }

    #[must_use]
    pub fn get_opposite(self) -> Direction {
        match self {
            Direction::Still => Direction::Still,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Bounds of the play area, `width × height` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` lies in `[0, width) × [0, height)`.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        let inside = |v: i64, max: usize| usize::try_from(v).is_ok_and(|v| v < max);
        inside(pos.x, self.width) && inside(pos.y, self.height)
    }

    /// The middle cell, rounded toward the origin.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(to_coord(self.width / 2), to_coord(self.height / 2))
    }

    /// A uniformly random cell.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        Position::new(
            to_coord(rng.gen_range(0..self.width)),
            to_coord(rng.gen_range(0..self.height)),
        )
    }
}

// grids are bounded by canvas pixels so they always fit
fn to_coord(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn offset_follows_direction_vector() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.offset(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.offset(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.offset(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.offset(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.offset(Direction::Still), pos);
    }

    #[test]
    fn from_values_only_accepts_unit_moves() {
        assert_eq!(Direction::from_values(-1, 0), Ok(Direction::Left));
        assert_eq!(Direction::from_values(0, 1), Ok(Direction::Down));
        assert_eq!(Direction::from_values(0, 0), Ok(Direction::Still));
        assert_eq!(
            Direction::from_values(1, 1),
            Err(SnakeError::InvalidDirection((1, 1)))
        );
    }

    #[test]
    fn contains_is_half_open() {
        let grid = Grid::new(32, 24);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(31, 23)));
        assert!(!grid.contains(Position::new(32, 0)));
        assert!(!grid.contains(Position::new(0, 24)));
        assert!(!grid.contains(Position::new(-1, 3)));
        assert!(!grid.contains(Position::new(3, -1)));
    }

    #[test]
    fn random_cells_stay_on_the_grid() {
        let grid = Grid::new(7, 3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(grid.contains(grid.random_cell(&mut rng)));
        }
    }

    #[test]
    fn center_of_default_grid() {
        assert_eq!(Grid::new(32, 24).center(), Position::new(16, 12));
    }
}
