use iced::{Element, Subscription};
use log::debug;

use crate::{
    app::Message,
    view::View,
    view_models::snake::snake_view_model::{SnakeParams, SnakeViewModel},
};

use super::{
    snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
    snake_selection_screen::{SnakeSelectionMessage, SnakeSelectionScreen},
};

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    SnakeGameScreenTransition(SnakeParams),
    SnakeSelectionScreenTransition,
    SnakeGameMessage(SnakeGameMessage),
    SnakeSelectionMessage(SnakeSelectionMessage),
}

#[derive(Debug)]
pub enum SnakeScreen {
    SnakeGameScreen(SnakeGameScreen),
    SnakeSelectionScreen(SnakeSelectionScreen),
}

impl View for SnakeScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.update(message),
            SnakeScreen::SnakeSelectionScreen(snake_selection_screen) => {
                snake_selection_screen.update(message)
            }
        }
    }

    fn view(&self) -> Element<Message> {
        match self {
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.view(),
            SnakeScreen::SnakeSelectionScreen(snake_selection_screen) => {
                snake_selection_screen.view()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            SnakeScreen::SnakeGameScreen(snake_game_screen) => snake_game_screen.subscription(),
            SnakeScreen::SnakeSelectionScreen(snake_selection_screen) => {
                snake_selection_screen.subscription()
            }
        }
    }
}

/// Owns whichever snake screen is showing and swaps screens on transitions.
#[derive(Debug)]
pub struct SnakeMediator {
    snake_screen: SnakeScreen,
}

impl Default for SnakeMediator {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeMediator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snake_screen: SnakeScreen::SnakeSelectionScreen(SnakeSelectionScreen::new()),
        }
    }

    #[must_use]
    pub fn get_screen(&self) -> &SnakeScreen {
        &self.snake_screen
    }
}

impl View for SnakeMediator {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_message) = message;
        match snake_message {
            SnakeMessage::SnakeGameScreenTransition(params) => {
                debug!("Transitioning to snake game screen");
                self.snake_screen =
                    SnakeScreen::SnakeGameScreen(SnakeGameScreen::new(SnakeViewModel::new(params)));
                None
            }
            SnakeMessage::SnakeSelectionScreenTransition => {
                debug!("Transitioning to snake selection screen");
                self.snake_screen = SnakeScreen::SnakeSelectionScreen(SnakeSelectionScreen::new());
                None
            }
            _ => match self.snake_screen.update(Message::Snake(snake_message)) {
                // the screens only hand back transitions, which the arms above consume
                Some(m) => self.update(m),
                None => None,
            },
        }
    }

    fn view(&self) -> Element<Message> {
        self.snake_screen.view()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.snake_screen.subscription()
    }
}

#[cfg(test)]
mod tests {
    use crate::models::snake::snake_input::InputMode;

    use super::*;

    #[test]
    fn submit_then_reset_then_back() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut mediator = SnakeMediator::new();
        assert!(matches!(
            mediator.get_screen(),
            SnakeScreen::SnakeSelectionScreen(_)
        ));

        let select = Message::Snake(SnakeMessage::SnakeSelectionMessage(
            SnakeSelectionMessage::InputModeSelected(InputMode::Keyboard),
        ));
        assert!(mediator.update(select).is_none());
        let submit = Message::Snake(SnakeMessage::SnakeSelectionMessage(
            SnakeSelectionMessage::Submit,
        ));
        assert!(mediator.update(submit).is_none());
        assert!(matches!(mediator.get_screen(), SnakeScreen::SnakeGameScreen(_)));

        let reset = Message::Snake(SnakeMessage::SnakeGameMessage(SnakeGameMessage::Reset));
        assert!(mediator.update(reset).is_none());
        assert!(matches!(mediator.get_screen(), SnakeScreen::SnakeGameScreen(_)));

        let back = Message::Snake(SnakeMessage::SnakeSelectionScreenTransition);
        assert!(mediator.update(back).is_none());
        assert!(matches!(
            mediator.get_screen(),
            SnakeScreen::SnakeSelectionScreen(_)
        ));
    }
}
