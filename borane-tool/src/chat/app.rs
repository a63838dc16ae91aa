use std::time::{Duration, Instant};

use borane_widget::{ChatWidget, Message, WidgetEvent, WidgetState};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::layout::{Position, Rect};
use tracing::info;

#[cfg(feature = "backend")]
use borane_widget::backend::{BACKEND_ERROR_REPLY, BackendClient};
#[cfg(feature = "backend")]
use tokio::sync::oneshot;

use crate::config::Settings;

pub struct ChatApp {
    pub widget: ChatWidget<StdRng>,
    pub should_quit: bool,
    /// Screen area of the send control, recorded on every draw.
    pub send_button: Option<Rect>,

    #[cfg(feature = "backend")]
    backend: Option<BackendClient>,
    #[cfg(feature = "backend")]
    reply_rx: Vec<oneshot::Receiver<String>>,
}

impl ChatApp {
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            seed = ?settings.seed,
            backend = ?settings.backend_url,
            "Starting chat session"
        );

        Self {
            widget: ChatWidget::initialize(settings.widget, rng),
            should_quit: false,
            send_button: None,
            #[cfg(feature = "backend")]
            backend: settings.backend_url.map(BackendClient::new),
            #[cfg(feature = "backend")]
            reply_rx: Vec::new(),
        }
    }

    /// Passes an event to the widget and dispatches any committed message.
    pub fn handle(&mut self, event: WidgetEvent) {
        if let Some(message) = self.widget.handle_event(event, Instant::now()) {
            self.dispatch(message);
        }
    }

    pub fn is_send_button(&self, column: u16, row: u16) -> bool {
        self.send_button
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self.widget.state(), WidgetState::AwaitingReply(_))
    }

    /// How long the event loop may block before a reply falls due,
    /// capped at `max`.
    pub fn poll_timeout(&self, max: Duration) -> Duration {
        match self.widget.next_reply_due() {
            Some(due) => due.saturating_duration_since(Instant::now()).min(max),
            None => max,
        }
    }

    /// Fires due canned replies and collects finished backend replies.
    pub fn poll_replies(&mut self) {
        self.widget.tick(Instant::now());

        #[cfg(feature = "backend")]
        self.poll_backend();
    }

    #[cfg(not(feature = "backend"))]
    fn dispatch(&mut self, _message: Message) {}

    #[cfg(feature = "backend")]
    fn dispatch(&mut self, message: Message) {
        let Some(client) = self.backend.clone() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let reply = client.reply_or_error(message.text()).await;
            let _ = tx.send(reply);
        });
        self.reply_rx.push(rx);
    }

    #[cfg(feature = "backend")]
    fn poll_backend(&mut self) {
        let mut still_waiting = Vec::with_capacity(self.reply_rx.len());
        for mut rx in self.reply_rx.drain(..) {
            match rx.try_recv() {
                Ok(reply) => {
                    self.widget.deliver_reply(&reply);
                }
                Err(oneshot::error::TryRecvError::Empty) => still_waiting.push(rx),
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.widget.deliver_reply(BACKEND_ERROR_REPLY);
                }
            }
        }
        self.reply_rx = still_waiting;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Overrides, resolve_settings};
    use borane_widget::{KeyPress, Sender};

    fn test_app() -> ChatApp {
        let overrides = Overrides {
            seed: Some(7),
            delay_ms: Some(0),
            ..Overrides::default()
        };
        ChatApp::new(resolve_settings(Config::default(), overrides).unwrap())
    }

    #[test]
    fn send_then_reply_with_zero_delay() {
        let mut app = test_app();
        for c in "hello".chars() {
            app.handle(WidgetEvent::Key(KeyPress::Char(c)));
        }
        app.handle(WidgetEvent::Key(KeyPress::Enter));
        assert!(app.is_waiting());

        app.poll_replies();
        let senders: Vec<Sender> = app
            .widget
            .log()
            .messages()
            .iter()
            .map(|m| m.sender())
            .collect();
        assert_eq!(senders, [Sender::User, Sender::Bot]);
        assert!(!app.is_waiting());
    }

    #[test]
    fn poll_timeout_shrinks_for_due_reply() {
        let max = Duration::from_millis(50);
        let mut app = test_app();
        assert_eq!(app.poll_timeout(max), max);

        app.widget.input_mut().set("hi");
        app.handle(WidgetEvent::Key(KeyPress::Enter));
        assert_eq!(app.poll_timeout(max), Duration::ZERO);
    }

    #[test]
    fn send_button_hit_test() {
        let mut app = test_app();
        assert!(!app.is_send_button(0, 0));

        app.send_button = Some(Rect::new(70, 20, 10, 3));
        assert!(app.is_send_button(70, 20));
        assert!(app.is_send_button(79, 22));
        assert!(!app.is_send_button(80, 22));
        assert!(!app.is_send_button(69, 21));
    }
}
