use log::{debug, warn};

use crate::{
    app::Message,
    models::snake::{
        snake_config::{GameConfig, Result, RESOLUTION, RESOLUTION_CHOICES},
        snake_input::InputMode,
    },
    view_model::ViewModel,
    views::snake::{snake_mediator::SnakeMessage, snake_selection_screen::SnakeSelectionMessage},
};

use super::snake_view_model::SnakeParams;

/// Choices made on the selection screen.
#[derive(Debug)]
pub struct SnakeSelectionViewModel {
    input_mode: InputMode,
    resolution: u32,
}

impl Default for SnakeSelectionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeSelectionViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Keyboard,
            resolution: RESOLUTION,
        }
    }

    #[must_use]
    pub fn get_input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn get_resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn get_resolution_choices(&self) -> &'static [u32] {
        &RESOLUTION_CHOICES
    }

    #[must_use]
    pub fn validate_resolution(&self, resolution: u32) -> bool {
        GameConfig::with_resolution(resolution).is_ok()
    }

    /// Describes the grid the current choices produce.
    #[must_use]
    pub fn grid_summary(&self) -> String {
        match GameConfig::with_resolution(self.resolution) {
            Ok(config) => format!("{} x {} cells", config.grid_width(), config.grid_height()),
            Err(e) => format!("Invalid choice: {e}"),
        }
    }

    /// Parameters for a game from the current choices.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::models::snake::snake_config::SnakeError`] if the
    /// chosen resolution does not make a valid game.
    pub fn make_params(&self) -> Result<SnakeParams> {
        Ok(SnakeParams {
            input_mode: self.input_mode,
            config: GameConfig::with_resolution(self.resolution)?,
        })
    }
}

impl ViewModel for SnakeSelectionViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_message) = message;
        let ssm = match snake_message {
            SnakeMessage::SnakeSelectionMessage(ssm) => ssm,
            other => {
                debug!("Received non snake selection message: {:#?}", other);
                return None;
            }
        };
        match ssm {
            SnakeSelectionMessage::InputModeSelected(input_mode) => {
                debug!("Selected input mode: {}", input_mode);
                self.input_mode = input_mode;
                None
            }
            SnakeSelectionMessage::ResolutionSelected(resolution) => {
                if self.validate_resolution(resolution) {
                    debug!("Selected resolution: {}", resolution);
                    self.resolution = resolution;
                } else {
                    warn!("Ignoring invalid resolution {}", resolution);
                }
                None
            }
            SnakeSelectionMessage::Submit => match self.make_params() {
                Ok(params) => {
                    debug!("Submitted snake params: {:#?}", params);
                    Some(Message::Snake(SnakeMessage::SnakeGameScreenTransition(
                        params,
                    )))
                }
                Err(e) => {
                    warn!("Cannot start game: {e}");
                    None
                }
            },
        }
    }
}
