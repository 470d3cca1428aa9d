//! Module for containing the snake itself.
use std::collections::VecDeque;

use log::debug;

use super::{
    snake_canvas::{CellPainter, SnakeBlock},
    snake_config::{Result, SnakeError},
    snake_grid::{Direction, Grid, Position},
};

/// The snake: its body, head first, and where it is heading.
#[derive(Clone, Debug)]
pub struct Snake {
    squares_taken: VecDeque<Position>,
    direction: Direction,
    pending_direction: Option<Direction>,
    shed_tail: Option<Position>,
}

impl Snake {
    /// Creates a one segment snake at `start`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut squares_taken = VecDeque::new();
        squares_taken.push_front(start);
        Self {
            squares_taken,
            direction,
            pending_direction: None,
            shed_tail: None,
        }
    }

    /// Creates a snake from its segments, head first.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::EmptySnake`] if `segments` is empty.
    pub fn from_segments(
        segments: impl IntoIterator<Item = Position>,
        direction: Direction,
    ) -> Result<Self> {
        let squares_taken: VecDeque<Position> = segments.into_iter().collect();
        if squares_taken.is_empty() {
            return Err(SnakeError::EmptySnake);
        }
        Ok(Self {
            squares_taken,
            direction,
            pending_direction: None,
            shed_tail: None,
        })
    }

    /// Buffers `direction` until the next [`Snake::update`].
    pub fn set_dir(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Buffers a raw `(x, y)` direction vector.
    ///
    /// # Errors
    ///
    /// Returns [`SnakeError::InvalidDirection`] if the vector is not a unit move.
    pub fn set_dir_values(&mut self, x: i8, y: i8) -> Result<()> {
        self.set_dir(Direction::from_values(x, y)?);
        Ok(())
    }

    /// Moves one cell: applies the pending direction, pushes the new head and
    /// drops the tail.
    pub fn update(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        let new_head = self.get_head().offset(self.direction);
        self.squares_taken.push_front(new_head);
        self.shed_tail = self.squares_taken.pop_back();
    }

    /// Keeps the tail dropped by the last [`Snake::update`], growing by one.
    pub fn grow(&mut self) {
        if let Some(tail) = self.shed_tail.take() {
            self.squares_taken.push_back(tail);
        } else {
            debug!("Asked to grow but no tail was dropped this tick");
        }
    }

    /// Whether the head is on `food`.
    #[must_use]
    pub fn eat(&self, food: Position) -> bool {
        self.get_head() == food
    }

    /// Whether the head left `grid` or ran into the body.
    #[must_use]
    pub fn end_game(&self, grid: &Grid) -> bool {
        let head = self.get_head();
        !grid.contains(head) || self.squares_taken.iter().skip(1).any(|s| *s == head)
    }

    /// Paints every segment, head last so it stays visible on a collision.
    pub fn show<P: CellPainter>(&self, painter: &mut P) {
        for segment in self.squares_taken.iter().skip(1) {
            painter.fill_cell(*segment, SnakeBlock::SnakeBody);
        }
        painter.fill_cell(self.get_head(), SnakeBlock::SnakeHead);
    }

    #[must_use]
    pub fn get_head(&self) -> Position {
        // never empty: both constructors push a segment and nothing shrinks the body
        self.squares_taken
            .front()
            .copied()
            .unwrap_or(Position::new(0, 0))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares_taken.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares_taken.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &VecDeque<Position> {
        &self.squares_taken
    }

    /// The direction applied at the last tick.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    #[must_use]
    pub fn x_dir(&self) -> i8 {
        self.direction.value().0
    }

    #[must_use]
    pub fn y_dir(&self) -> i8 {
        self.direction.value().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i64, y: i64) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn moves_without_growing() {
        let mut snake = Snake::new(pos(16, 12), Direction::Right);
        for _ in 0..3 {
            snake.update();
        }
        assert_eq!(snake.get_head(), pos(19, 12));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn new_head_is_old_head_plus_direction() {
        let mut snake =
            Snake::from_segments([pos(4, 4), pos(3, 4), pos(2, 4)], Direction::Right).unwrap();
        for direction in [Direction::Down, Direction::Left, Direction::Down, Direction::Right] {
            let before = snake.get_head();
            snake.set_dir(direction);
            snake.update();
            assert_eq!(snake.get_head(), before.offset(direction));
            assert_eq!(snake.len(), 3);
        }
    }

    #[test]
    fn pending_direction_waits_for_update() {
        let mut snake = Snake::new(pos(5, 5), Direction::Right);
        snake.set_dir(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
        assert_eq!((snake.x_dir(), snake.y_dir()), (1, 0));

        snake.update();
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.get_head(), pos(5, 4));
    }

    #[test]
    fn last_set_dir_before_a_tick_wins() {
        let mut snake = Snake::new(pos(5, 5), Direction::Right);
        snake.set_dir(Direction::Up);
        snake.set_dir(Direction::Down);
        snake.update();
        assert_eq!(snake.get_head(), pos(5, 6));
    }

    #[test]
    fn set_dir_values_rejects_diagonals() {
        let mut snake = Snake::new(pos(5, 5), Direction::Still);
        assert_eq!(
            snake.set_dir_values(1, -1),
            Err(SnakeError::InvalidDirection((1, -1)))
        );
        assert_eq!(snake.pending_direction(), None);
        assert!(snake.set_dir_values(0, -1).is_ok());
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
    }

    #[test]
    fn eating_withholds_tail_removal() {
        let food = pos(6, 5);
        let mut snake = Snake::new(pos(5, 5), Direction::Right);
        assert!(!snake.eat(food));
        snake.update();
        assert!(snake.eat(food));
        // eat is a pure query
        assert_eq!(snake.len(), 1);
        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments(), &VecDeque::from(vec![pos(6, 5), pos(5, 5)]));
    }

    #[test]
    fn grow_only_once_per_tick() {
        let mut snake = Snake::new(pos(5, 5), Direction::Right);
        snake.update();
        snake.grow();
        snake.grow();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn end_game_on_walls() {
        let grid = Grid::new(32, 24);
        let mut snake = Snake::new(pos(31, 0), Direction::Right);
        assert!(!snake.end_game(&grid));
        snake.update();
        assert!(snake.end_game(&grid));

        let mut snake = Snake::new(pos(0, 0), Direction::Up);
        snake.update();
        assert!(snake.end_game(&grid));
    }

    #[test]
    fn end_game_when_head_reenters_body() {
        let grid = Grid::new(32, 24);
        let mut snake = Snake::from_segments(
            [pos(0, 0), pos(1, 0), pos(2, 0), pos(3, 0), pos(4, 0)],
            Direction::Left,
        )
        .unwrap();
        for direction in [Direction::Down, Direction::Right] {
            snake.set_dir(direction);
            snake.update();
            assert!(!snake.end_game(&grid));
        }
        snake.set_dir(Direction::Up);
        snake.update();
        assert_eq!(snake.get_head(), pos(1, 0));
        assert!(snake.end_game(&grid));
    }

    #[test]
    fn following_the_tail_is_safe() {
        let grid = Grid::new(32, 24);
        let mut snake = Snake::from_segments(
            [pos(1, 1), pos(2, 1), pos(2, 2), pos(1, 2)],
            Direction::Left,
        )
        .unwrap();
        snake.set_dir(Direction::Down);
        snake.update();
        assert_eq!(snake.get_head(), pos(1, 2));
        assert!(!snake.end_game(&grid));
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(matches!(
            Snake::from_segments(Vec::new(), Direction::Still),
            Err(SnakeError::EmptySnake)
        ));
    }

    #[test]
    fn show_paints_body_and_head() {
        struct Recorder(Vec<(Position, SnakeBlock)>);
        impl CellPainter for Recorder {
            fn fill_cell(&mut self, cell: Position, block: SnakeBlock) {
                self.0.push((cell, block));
            }
        }

        let snake =
            Snake::from_segments([pos(2, 0), pos(1, 0), pos(0, 0)], Direction::Right).unwrap();
        let mut recorder = Recorder(Vec::new());
        snake.show(&mut recorder);
        assert_eq!(
            recorder.0,
            vec![
                (pos(1, 0), SnakeBlock::SnakeBody),
                (pos(0, 0), SnakeBlock::SnakeBody),
                (pos(2, 0), SnakeBlock::SnakeHead),
            ]
        );
    }
}
