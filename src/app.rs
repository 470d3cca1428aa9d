use iced::{Element, Subscription};
use log::debug;

use crate::{
    view::View,
    views::snake::snake_mediator::{SnakeMediator, SnakeMessage},
};

// https://docs.rs/iced/latest/iced/#scaling-applications
pub struct State {
    screen: Screen,
}

#[derive(Debug)]
enum Screen {
    Snake(SnakeMediator),
}

impl Screen {
    pub fn new_snake() -> Self {
        Screen::Snake(SnakeMediator::new())
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeMessage),
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            Screen::Snake(screen) => screen.update(message),
        }
    }

    fn view(&self) -> Element<Message> {
        match self {
            Screen::Snake(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Snake(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::new_snake(),
        }
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            debug!("Unhandled message reached the app: {:#?}", next);
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
