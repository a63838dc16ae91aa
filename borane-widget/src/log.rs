use crate::message::Message;

/// Append-only message log backing the scrollable chat pane.
///
/// `scroll` counts lines up from the bottom of the view; 0 means the newest
/// message is visible.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: Vec<Message>,
    scroll: u16,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` and scrolls the view back to the end.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll = 0;
    }

    /// Messages in display order, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Caps the offset at `max`, the furthest the view can move up.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }
}
