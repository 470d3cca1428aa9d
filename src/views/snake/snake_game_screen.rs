use std::time::{Duration, Instant};

use iced::{
    keyboard::{self, Key},
    time,
    widget::{button, column, container, row, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    models::snake::{snake_canvas::SnakeBlock, snake_input::{InputMode, Label}},
    view::View,
    view_model::ViewModel,
    view_models::snake::{label_feed, snake_view_model::SnakeViewModel},
};

use super::snake_mediator::SnakeMessage;

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    Key(Key),
    Label(Label),
    Timer(Instant),
    Reset,
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }

    fn block_color(block: SnakeBlock, game_over: bool) -> Color {
        match block {
            SnakeBlock::Empty if game_over => Color::from_rgb8(255, 0, 0),
            SnakeBlock::Empty => Color::from_rgb8(220, 220, 220),
            SnakeBlock::Food => Color::from_rgb8(255, 0, 0),
            SnakeBlock::SnakeBody => Color::from_rgb8(0, 0, 0),
            SnakeBlock::SnakeHead => Color::from_rgb8(60, 60, 60),
        }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<Message> {
        let mut grid_view = Column::new();
        let resolution = self.view_model.get_params().config.resolution();
        let cell_size = u16::try_from(resolution).unwrap_or(u16::MAX);
        let game_over = self.view_model.game_over();

        let make_container = |color: Color| {
            container(text(" ").color(color)) // Empty text to preserve size
                .width(cell_size)
                .height(cell_size)
                .style(move |_: &_| container::Style {
                    background: Some(color.into()),
                    border: Border::default(),
                    ..container::Style::default()
                })
        };

        let canvas = self.view_model.get_backing_grid();
        for grid_row in canvas.rows() {
            let mut row = Row::new();
            for entry in grid_row {
                row = row.push(make_container(Self::block_color(*entry, game_over)));
            }
            grid_view = grid_view.push(row);
        }

        let back_button = button(text("Go back"))
            .on_press(Message::Snake(SnakeMessage::SnakeSelectionScreenTransition))
            .width(160)
            .height(40);
        let restart_button = button(text("Restart"))
            .on_press(Message::Snake(SnakeMessage::SnakeGameMessage(
                SnakeGameMessage::Reset,
            )))
            .width(80)
            .height(40);

        container(
            column![
                row![back_button, restart_button].spacing(10),
                grid_view,
                text(self.view_model.score_line()).size(20),
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard = keyboard::on_key_press(|key, _| {
            Some(Message::Snake(SnakeMessage::SnakeGameMessage(
                SnakeGameMessage::Key(key),
            )))
        });
        let mut subscriptions = vec![keyboard];
        // game over halts the loop
        if !self.view_model.game_over() {
            subscriptions.push(
                time::every(Duration::from_millis(
                    self.view_model.get_time_between_frames(),
                ))
                .map(SnakeGameMessage::Timer)
                .map(SnakeMessage::SnakeGameMessage)
                .map(Message::Snake),
            );
        }
        if self.view_model.get_params().input_mode == InputMode::ClassifierLabels {
            subscriptions.push(Subscription::run_with_id(
                label_feed::FEED_ID,
                label_feed::stdin_labels(),
            ));
        }
        Subscription::batch(subscriptions)
    }
}
