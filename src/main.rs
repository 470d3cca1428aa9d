use knnsnake::{app::State, models::snake::snake_config::GameConfig};
use log::debug;

fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "knnsnake=debug");
    }
    env_logger::init();
    debug!("Debug on");
    let (width, height) = GameConfig::default().canvas_size();
    #[allow(clippy::cast_precision_loss)]
    let window = iced::Size::new(width as f32 + 160.0, height as f32 + 200.0);
    if let Err(e) = iced::application("KNN Snake", State::update, State::view)
        .window_size(window)
        .subscription(State::subscription)
        .run()
    {
        log::error!("Application exited with an error: {e}");
    }
}
