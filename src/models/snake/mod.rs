pub mod snake_canvas;
pub mod snake_config;
pub mod snake_game;
pub mod snake_grid;
pub mod snake_input;
pub mod snake_player;
