use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Label shown in front of the message text.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "AI",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single chat-log entry.
///
/// The text is always non-empty after trimming; [`Message::new`] refuses
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    /// Builds a message from `text` with surrounding whitespace removed.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn new(sender: Sender, text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            sender,
            text: text.to_string(),
        })
    }

    pub fn user(text: impl AsRef<str>) -> Option<Self> {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl AsRef<str>) -> Option<Self> {
        Self::new(Sender::Bot, text)
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
