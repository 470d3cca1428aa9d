//! Turning player and classifier intents into directions.
use std::{fmt, str::FromStr};

use super::{snake_config::SnakeError, snake_grid::Direction};

/// Whether the snake may turn to `requested` while travelling `current`.
///
/// A horizontal turn needs no horizontal motion and a vertical turn needs no
/// vertical motion, which also rules out reversing on the spot.
#[must_use]
pub fn accepts_turn(current: Direction, requested: Direction) -> bool {
    let (x_dir, y_dir) = current.value();
    match requested {
        Direction::Left | Direction::Right => x_dir == 0,
        Direction::Up | Direction::Down => y_dir == 0,
        Direction::Still => false,
    }
}

/// Label emitted by a gesture classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Left,
    Right,
    Up,
    Down,
    Fire,
}

impl Label {
    /// The direction of the arrow key the label was trained with.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Label::Left => Some(Direction::Left),
            Label::Right => Some(Direction::Right),
            Label::Up => Some(Direction::Up),
            Label::Down => Some(Direction::Down),
            Label::Fire => None,
        }
    }
}

impl FromStr for Label {
    type Err = SnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Label::Left),
            "right" => Ok(Label::Right),
            "up" => Ok(Label::Up),
            "down" => Ok(Label::Down),
            "fire" => Ok(Label::Fire),
            _ => Err(SnakeError::UnknownLabel(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::Left => "left",
            Label::Right => "right",
            Label::Up => "up",
            Label::Down => "down",
            Label::Fire => "fire",
        };
        write!(f, "{name}")
    }
}

/// Where the directions for a game come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Keyboard,
    ClassifierLabels,
}

impl InputMode {
    pub const VALUES: [Self; 2] = [Self::Keyboard, Self::ClassifierLabels];
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Keyboard => write!(f, "Keyboard"),
            InputMode::ClassifierLabels => write!(f, "Classifier labels (stdin)"),
        }
    }
}
