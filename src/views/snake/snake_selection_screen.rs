use iced::{
    alignment,
    widget::{button, column, container, pick_list, row, text},
    Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::snake::snake_input::InputMode,
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_selection_view_model::SnakeSelectionViewModel,
};

use super::snake_mediator::SnakeMessage;

#[derive(Debug, Clone)]
pub enum SnakeSelectionMessage {
    InputModeSelected(InputMode),
    ResolutionSelected(u32),
    Submit,
}

#[derive(Debug)]
pub struct SnakeSelectionScreen {
    view_model: SnakeSelectionViewModel,
}

impl Default for SnakeSelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeSelectionScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_model: SnakeSelectionViewModel::new(),
        }
    }
}

impl View for SnakeSelectionScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<Message> {
        let input_picker = pick_list(
            InputMode::VALUES,
            Some(self.view_model.get_input_mode()),
            |mode| {
                Message::Snake(SnakeMessage::SnakeSelectionMessage(
                    SnakeSelectionMessage::InputModeSelected(mode),
                ))
            },
        );
        let resolution_picker = pick_list(
            self.view_model.get_resolution_choices(),
            Some(self.view_model.get_resolution()),
            |resolution| {
                Message::Snake(SnakeMessage::SnakeSelectionMessage(
                    SnakeSelectionMessage::ResolutionSelected(resolution),
                ))
            },
        );

        let submit_button = button(text("Start Game"))
            .on_press(Message::Snake(SnakeMessage::SnakeSelectionMessage(
                SnakeSelectionMessage::Submit,
            )))
            .width(Length::Shrink);

        let content = column![
            text("Snake").size(24),
            row![text("Input"), input_picker].spacing(10),
            row![text("Cell size (px)"), resolution_picker].spacing(10),
            text(self.view_model.grid_summary()),
            submit_button,
        ]
        .spacing(20)
        .align_x(alignment::Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
}
