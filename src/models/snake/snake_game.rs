use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

use super::{
    snake_canvas::{CellPainter, GridCanvas, SnakeBlock},
    snake_config::GameConfig,
    snake_grid::{Direction, Grid, Position},
    snake_input::accepts_turn,
    snake_player::Snake,
};

/// Whether the game still takes ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    GameOver,
}

/// What happened during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver,
    /// The game was already over; nothing moved.
    Halted,
}

/// Model of the Snake Game.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Position,
    score: u32,
    ticks: u64,
    phase: GamePhase,
    rng: StdRng,
}

impl SnakeGame {
    /// Starts a game with a still, one segment snake in the middle of the grid.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Like [`SnakeGame::new`] but with reproducible food placement.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = Grid::new(config.grid_width(), config.grid_height());
        let snake = Snake::new(grid.center(), Direction::Still);
        let food = grid.random_cell(&mut rng);
        debug!(
            "New {}x{} game, snake at {:?}, food at {:?}",
            grid.width(),
            grid.height(),
            snake.get_head(),
            food
        );
        Self {
            config,
            grid,
            snake,
            food,
            score: 0,
            ticks: 0,
            phase: GamePhase::Running,
            rng,
        }
    }

    /// Queues a turn for the next tick if the turn guard allows it.
    /// Returns whether the turn was queued.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase == GamePhase::GameOver {
            debug!("Ignoring {:?} after game over", direction);
            return false;
        }
        if !accepts_turn(self.snake.direction(), direction) {
            debug!(
                "Rejected turn {:?} while moving {:?}",
                direction,
                self.snake.direction()
            );
            return false;
        }
        self.snake.set_dir(direction);
        true
    }

    /// Advances the game by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome::Halted;
        }
        self.ticks += 1;
        self.snake.update();

        let mut outcome = TickOutcome::Moved;
        if self.snake.eat(self.food) {
            self.snake.grow();
            self.score += 1;
            self.put_random_food();
            debug!("Ate food. Score is now {}", self.score);
            outcome = TickOutcome::Ate;
        }

        if self.snake.end_game(&self.grid) {
            info!(
                "Game over after {} ticks. Final score: {}",
                self.ticks, self.score
            );
            self.phase = GamePhase::GameOver;
            return TickOutcome::GameOver;
        }
        outcome
    }

    fn put_random_food(&mut self) {
        self.food = self.grid.random_cell(&mut self.rng);
    }

    /// Paints food then snake onto `painter`.
    pub fn show<P: CellPainter>(&self, painter: &mut P) {
        painter.fill_cell(self.food, SnakeBlock::Food);
        self.snake.show(painter);
    }

    /// A freshly painted frame of the game.
    #[must_use]
    pub fn render(&self) -> GridCanvas {
        let mut canvas = GridCanvas::new(self.grid);
        self.show(&mut canvas);
        canvas
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    #[must_use]
    pub fn get_phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn get_ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn get_food(&self) -> Position {
        self.food
    }

    #[must_use]
    pub fn get_snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn get_grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn get_config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, snake: Snake, food: Position) {
        self.snake = snake;
        self.food = food;
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
