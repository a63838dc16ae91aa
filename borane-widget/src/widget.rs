use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, warn};

use crate::input::InputLine;
use crate::log::MessageLog;
use crate::message::Message;
use crate::pool::ResponsePool;
use crate::scheduler::ReplyScheduler;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// How bot replies are produced after a send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplyMode {
    /// Pick from the response pool once the reply delay has elapsed.
    #[default]
    Canned,
    /// Nothing is scheduled; the host supplies replies via
    /// [`ChatWidget::deliver_reply`].
    External,
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub pool: ResponsePool,
    pub reply_delay: Duration,
    pub reply_mode: ReplyMode,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            pool: ResponsePool::default(),
            reply_delay: DEFAULT_REPLY_DELAY,
            reply_mode: ReplyMode::Canned,
        }
    }
}

/// Keys the widget understands, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ScrollUp,
    ScrollDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Pointer activation of the send control.
    SendClicked,
    /// Key press while the input has focus.
    Key(KeyPress),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    /// Number of replies still outstanding.
    AwaitingReply(usize),
}

/// The chat widget: message log, input line and the reply machinery.
pub struct ChatWidget<R> {
    log: MessageLog,
    input: InputLine,
    pool: ResponsePool,
    rng: R,
    scheduler: ReplyScheduler,
    reply_delay: Duration,
    reply_mode: ReplyMode,
    external_pending: usize,
}

impl<R: Rng> ChatWidget<R> {
    /// Creates the widget with an empty log and input.
    pub fn initialize(config: WidgetConfig, rng: R) -> Self {
        debug!(
            replies = config.pool.len(),
            delay_ms = config.reply_delay.as_millis() as u64,
            mode = ?config.reply_mode,
            "Chat widget initialized"
        );
        Self {
            log: MessageLog::new(),
            input: InputLine::new(),
            pool: config.pool,
            rng,
            scheduler: ReplyScheduler::new(),
            reply_delay: config.reply_delay,
            reply_mode: config.reply_mode,
            external_pending: 0,
        }
    }

    /// Routes a host event. Returns the user message when the event
    /// committed one.
    pub fn handle_event(&mut self, event: WidgetEvent, now: Instant) -> Option<Message> {
        match event {
            WidgetEvent::SendClicked | WidgetEvent::Key(KeyPress::Enter) => {
                return self.handle_send(now);
            }
            WidgetEvent::Key(KeyPress::Char(c)) => self.input.insert(c),
            WidgetEvent::Key(KeyPress::Backspace) => self.input.backspace(),
            WidgetEvent::Key(KeyPress::Delete) => self.input.delete(),
            WidgetEvent::Key(KeyPress::Left) => self.input.left(),
            WidgetEvent::Key(KeyPress::Right) => self.input.right(),
            WidgetEvent::Key(KeyPress::Home) => self.input.home(),
            WidgetEvent::Key(KeyPress::End) => self.input.end(),
            WidgetEvent::Key(KeyPress::ScrollUp) => self.log.scroll_up(),
            WidgetEvent::Key(KeyPress::ScrollDown) => self.log.scroll_down(),
        }
        None
    }

    /// Commits the current input as a user message.
    ///
    /// Blank input is ignored and left as it is. Otherwise the trimmed text
    /// is appended, the input is cleared and a reply is scheduled.
    pub fn handle_send(&mut self, now: Instant) -> Option<Message> {
        let message = Message::user(self.input.text())?;
        self.input.clear();
        self.render_message(message.clone());

        match self.reply_mode {
            ReplyMode::Canned => {
                let id = self.scheduler.schedule(now, self.reply_delay);
                debug!(id, pending = self.scheduler.len(), "Reply scheduled");
            }
            ReplyMode::External => {
                self.external_pending += 1;
                debug!(pending = self.external_pending, "Awaiting external reply");
            }
        }

        Some(message)
    }

    /// Fires every canned reply whose due time has passed. Returns how many
    /// replies were appended.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.scheduler.take_due(now);
        for task in &due {
            let text = self.pool.pick(&mut self.rng).to_string();
            debug!(id = task.id, reply = %text, "Reply fired");
            if let Some(reply) = Message::bot(text) {
                self.render_message(reply);
            }
        }
        due.len()
    }

    /// Appends a reply produced outside the widget.
    ///
    /// Blank replies are dropped. Returns whether a message was appended.
    pub fn deliver_reply(&mut self, text: &str) -> bool {
        self.external_pending = self.external_pending.saturating_sub(1);
        match Message::bot(text) {
            Some(reply) => {
                self.render_message(reply);
                true
            }
            None => {
                warn!("Dropping blank reply");
                false
            }
        }
    }

    /// Appends `message` to the log and scrolls to it.
    pub fn render_message(&mut self, message: Message) {
        self.log.append(message);
    }

    /// Keeps the log view from scrolling past its first line. `max` is the
    /// offset at which the oldest rendered line sits at the top.
    pub fn clamp_scroll(&mut self, max: u16) {
        self.log.clamp_scroll(max);
    }

    pub fn state(&self) -> WidgetState {
        match self.scheduler.len() + self.external_pending {
            0 => WidgetState::Idle,
            n => WidgetState::AwaitingReply(n),
        }
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_reply_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn pool(&self) -> &ResponsePool {
        &self.pool
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn reply_mode(&self) -> ReplyMode {
        self.reply_mode
    }
}
