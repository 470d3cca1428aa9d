//! Classifier labels arriving on standard input, one per line.
//!
//! An external gesture classifier pipes its predictions into the game:
//! `classifier | knnsnake`. Each recognised label becomes a
//! [`SnakeGameMessage::Label`] delivered between ticks.
use iced::{
    futures::{channel::mpsc, SinkExt, Stream},
    stream,
};
use log::{debug, error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{
    app::Message,
    models::snake::snake_input::Label,
    views::snake::{snake_game_screen::SnakeGameMessage, snake_mediator::SnakeMessage},
};

/// Subscription id of the feed, kept across restarts so stdin is read once.
pub const FEED_ID: &str = "classifier-label-feed";
const CHANNEL_SIZE: usize = 100;

/// Stream of label messages read from this process' stdin.
pub fn stdin_labels() -> impl Stream<Item = Message> {
    stream::channel(CHANNEL_SIZE, |mut output| async move {
        let reader = BufReader::new(tokio::io::stdin());
        let forwarded = forward_labels(reader, &mut output).await;
        info!("Label feed ended after {forwarded} labels");
    })
}

/// Parses one line of classifier output. Blank and unknown lines give `None`.
#[must_use]
pub fn read_label(line: &str) -> Option<Label> {
    if line.trim().is_empty() {
        return None;
    }
    match line.parse::<Label>() {
        Ok(label) => Some(label),
        Err(e) => {
            warn!("Skipping classifier output: {e}");
            None
        }
    }
}

/// Forwards every label in `reader` to `output` until either side closes.
/// Returns how many labels were forwarded.
pub async fn forward_labels<R>(reader: R, output: &mut mpsc::Sender<Message>) -> usize
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut forwarded = 0;
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("Label source closed");
                break;
            }
            Err(e) => {
                error!("Problem reading classifier labels: {e}");
                break;
            }
        };
        let Some(label) = read_label(&line) else {
            continue;
        };
        debug!("Classifier label: {label}");
        let message = Message::Snake(SnakeMessage::SnakeGameMessage(SnakeGameMessage::Label(
            label,
        )));
        if let Err(e) = output.send(message).await {
            debug!("Problem sending label message: {e}");
            break;
        }
        forwarded += 1;
    }
    forwarded
}

#[cfg(test)]
mod tests {
    use iced::futures::StreamExt;

    use super::*;

    #[test]
    fn read_label_skips_noise() {
        let _ = env_logger::builder().is_test(true).try_init();
        assert_eq!(read_label("left"), Some(Label::Left));
        assert_eq!(read_label("  "), None);
        assert_eq!(read_label("jump"), None);
    }

    #[tokio::test]
    async fn forwards_known_labels_in_order() {
        let _ = env_logger::builder().is_test(true).try_init();
        let input: &[u8] = b"left\njump\n\nFire\nup\n";
        let (mut sender, receiver) = mpsc::channel::<Message>(CHANNEL_SIZE);

        let forwarded = forward_labels(input, &mut sender).await;
        drop(sender);
        assert_eq!(forwarded, 3);

        let labels: Vec<Label> = receiver
            .filter_map(|message| async move {
                match message {
                    Message::Snake(SnakeMessage::SnakeGameMessage(SnakeGameMessage::Label(
                        label,
                    ))) => Some(label),
                    _ => None,
                }
            })
            .collect()
            .await;
        assert_eq!(labels, vec![Label::Left, Label::Fire, Label::Up]);
    }
}
