use iced::keyboard::{key::Named, Key};
use log::{debug, info, warn};

use crate::{
    app::Message,
    models::snake::{
        snake_canvas::GridCanvas,
        snake_config::GameConfig,
        snake_game::{SnakeGame, TickOutcome},
        snake_grid::Direction,
        snake_input::{InputMode, Label},
    },
    view_model::ViewModel,
    views::snake::{snake_game_screen::SnakeGameMessage, snake_mediator::SnakeMessage},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeParams {
    pub input_mode: InputMode,
    pub config: GameConfig,
}

/// Owns the running game and feeds it ticks and input.
#[derive(Debug)]
pub struct SnakeViewModel {
    params: SnakeParams,
    game: SnakeGame,
}

impl SnakeViewModel {
    #[must_use]
    pub fn new(params: SnakeParams) -> Self {
        debug!("New SnakeViewModel params: {:#?}", params);
        let game = SnakeGame::new(params.config.clone());
        Self { params, game }
    }

    #[must_use]
    pub fn with_game(params: SnakeParams, game: SnakeGame) -> Self {
        Self { params, game }
    }

    #[must_use]
    pub fn get_params(&self) -> SnakeParams {
        self.params.clone()
    }

    #[must_use]
    pub fn get_game(&self) -> &SnakeGame {
        &self.game
    }

    #[must_use]
    pub fn get_backing_grid(&self) -> GridCanvas {
        self.game.render()
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        self.params.config.millis_between_frames()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_over()
    }

    #[must_use]
    pub fn score_line(&self) -> String {
        if self.game_over() {
            format!("YOU LOSE. Final Score: {}", self.game.get_score())
        } else {
            format!("Score: {}", self.game.get_score())
        }
    }

    fn key_direction(key: &Key) -> Option<Direction> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(Direction::Up),
                Named::ArrowDown => Some(Direction::Down),
                Named::ArrowLeft => Some(Direction::Left),
                Named::ArrowRight => Some(Direction::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(Direction::Up),
                "s" | "S" => Some(Direction::Down),
                "a" | "A" => Some(Direction::Left),
                "d" | "D" => Some(Direction::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }

    fn handle_key(&mut self, key: &Key) -> Option<Message> {
        if self.game.is_over() {
            if matches!(key, Key::Named(Named::Space)) {
                return Some(Message::Snake(SnakeMessage::SnakeGameMessage(
                    SnakeGameMessage::Reset,
                )));
            }
            return None;
        }
        if self.params.input_mode != InputMode::Keyboard {
            return None;
        }
        if let Some(direction) = Self::key_direction(key) {
            self.game.steer(direction);
        }
        None
    }

    fn handle_label(&mut self, label: Label) {
        if self.params.input_mode != InputMode::ClassifierLabels {
            debug!("Ignoring label {label} outside classifier mode");
            return;
        }
        match label.direction() {
            Some(direction) => {
                if !self.game.steer(direction) {
                    debug!("Label {label} did not turn the snake");
                }
            }
            None => debug!("Label {label} does not steer"),
        }
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_message) = message;
        if let SnakeMessage::SnakeGameMessage(snake_game_message) = snake_message {
            match snake_game_message {
                SnakeGameMessage::Key(key) => self.handle_key(&key),
                SnakeGameMessage::Label(label) => {
                    self.handle_label(label);
                    None
                }
                SnakeGameMessage::Timer(_) => {
                    if self.game.tick() == TickOutcome::GameOver {
                        info!("{}", self.score_line());
                    }
                    None
                }
                SnakeGameMessage::Reset => {
                    debug!("Reset requested. Starting a new game");
                    Some(Message::Snake(SnakeMessage::SnakeGameScreenTransition(
                        self.params.clone(),
                    )))
                }
            }
        } else {
            warn!(
                "Non-SnakeGameMessage sent to SnakeViewModel: {:#?}",
                snake_message
            );
            None
        }
    }
}
