//! A small chat widget that answers with canned replies.
//!
//! The widget owns an append-only message log, a single-line input and a
//! list of deferred replies. A host (terminal UI, test harness) feeds it
//! events and the current time; nothing here touches a terminal or a clock.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use borane_widget::{ChatWidget, Sender, WidgetConfig};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut widget = ChatWidget::initialize(WidgetConfig::default(), StdRng::seed_from_u64(1));
//! let start = Instant::now();
//!
//! widget.input_mut().set("hello");
//! widget.handle_send(start);
//! assert_eq!(widget.input().text(), "");
//!
//! widget.tick(start + Duration::from_millis(1000));
//! let reply = widget.log().last().unwrap();
//! assert_eq!(reply.sender(), Sender::Bot);
//! assert!(widget.pool().contains(reply.text()));
//! ```

mod error;
mod input;
mod log;
mod message;
mod pool;
mod scheduler;
mod widget;

#[cfg(feature = "backend")]
pub mod backend;

pub use error::WidgetError;
pub use input::InputLine;
pub use log::MessageLog;
pub use message::{Message, Sender};
pub use pool::{DEFAULT_REPLIES, ResponsePool};
pub use scheduler::{PendingReply, ReplyId, ReplyScheduler};
pub use widget::{
    ChatWidget, DEFAULT_REPLY_DELAY, KeyPress, ReplyMode, WidgetConfig, WidgetEvent, WidgetState,
};
