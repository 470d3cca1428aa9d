pub mod snake_game_screen;
pub mod snake_mediator;
pub mod snake_selection_screen;
