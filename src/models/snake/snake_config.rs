//! Tunables and validated configuration for the snake game.
use std::fmt;

/// Default canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 640;
/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 480;
/// Default size of a single grid cell in pixels.
pub const RESOLUTION: u32 = 20;
/// Default number of ticks per second.
pub const FRAMES_PER_SECOND: u64 = 5;
/// Fastest tick rate accepted.
pub const MAX_FRAMES_PER_SECOND: u64 = 60;
/// Resolutions offered on the selection screen.
pub const RESOLUTION_CHOICES: [u32; 4] = [10, 16, 20, 40];

pub type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    InvalidResolution,
    CanvasTooSmall,
    InvalidFrameRate,
    EmptySnake,
    InvalidDirection((i8, i8)),
    UnknownLabel(String),
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::InvalidResolution => write!(f, "resolution must be greater than zero"),
            SnakeError::CanvasTooSmall => {
                write!(f, "canvas must be at least one cell wide and tall")
            }
            SnakeError::InvalidFrameRate => write!(
                f,
                "frames per second must be between 1 and {MAX_FRAMES_PER_SECOND}"
            ),
            SnakeError::EmptySnake => write!(f, "a snake needs at least one segment"),
            SnakeError::InvalidDirection((x, y)) => {
                write!(f, "({x}, {y}) is not a valid direction")
            }
            SnakeError::UnknownLabel(label) => write!(f, "unknown classifier label {label:?}"),
        }
    }
}

impl std::error::Error for SnakeError {}

/// Canvas geometry and tick rate of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    canvas_width: u32,
    canvas_height: u32,
    resolution: u32,
    frames_per_second: u64,
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`SnakeError`] if the resolution is zero, does not fit the
    /// canvas on both axes, or the frame rate is out of range.
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        resolution: u32,
        frames_per_second: u64,
    ) -> Result<Self> {
        if resolution == 0 {
            return Err(SnakeError::InvalidResolution);
        }
        if canvas_width < resolution || canvas_height < resolution {
            return Err(SnakeError::CanvasTooSmall);
        }
        if !(1..=MAX_FRAMES_PER_SECOND).contains(&frames_per_second) {
            return Err(SnakeError::InvalidFrameRate);
        }
        Ok(Self {
            canvas_width,
            canvas_height,
            resolution,
            frames_per_second,
        })
    }

    /// Default canvas and tick rate with a different cell size.
    ///
    /// # Errors
    ///
    /// See [`GameConfig::new`].
    pub fn with_resolution(resolution: u32) -> Result<Self> {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT, resolution, FRAMES_PER_SECOND)
    }

    #[must_use]
    pub fn grid_width(&self) -> usize {
        usize::try_from(self.canvas_width / self.resolution).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn grid_height(&self) -> usize {
        usize::try_from(self.canvas_height / self.resolution).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    #[must_use]
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    #[must_use]
    pub fn frames_per_second(&self) -> u64 {
        self.frames_per_second
    }

    /// Time between two ticks.
    #[must_use]
    pub fn millis_between_frames(&self) -> u64 {
        1000 / self.frames_per_second
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            resolution: RESOLUTION,
            frames_per_second: FRAMES_PER_SECOND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_32_by_24() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 32);
        assert_eq!(config.grid_height(), 24);
        assert_eq!(config.millis_between_frames(), 200);
    }

    #[test]
    fn grid_size_is_floored() {
        let config = GameConfig::new(650, 479, 20, 5).unwrap();
        assert_eq!(config.grid_width(), 32);
        assert_eq!(config.grid_height(), 23);
    }

    #[test]
    fn rejects_bad_configs() {
        assert_eq!(
            GameConfig::new(640, 480, 0, 5),
            Err(SnakeError::InvalidResolution)
        );
        assert_eq!(
            GameConfig::new(640, 10, 20, 5),
            Err(SnakeError::CanvasTooSmall)
        );
        assert_eq!(
            GameConfig::new(640, 480, 20, 0),
            Err(SnakeError::InvalidFrameRate)
        );
        assert_eq!(
            GameConfig::new(640, 480, 20, MAX_FRAMES_PER_SECOND + 1),
            Err(SnakeError::InvalidFrameRate)
        );
    }

    #[test]
    fn every_offered_resolution_is_valid() {
        for resolution in RESOLUTION_CHOICES {
            assert!(GameConfig::with_resolution(resolution).is_ok());
        }
    }
}
