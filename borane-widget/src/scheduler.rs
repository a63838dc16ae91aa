use std::time::{Duration, Instant};

/// Identifier handed out by [`ReplyScheduler::schedule`], unique per scheduler.
pub type ReplyId = u64;

/// A bot reply waiting for its due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub id: ReplyId,
    pub due: Instant,
}

/// Owned list of deferred replies.
///
/// Tasks cannot be cancelled; they only leave the list through
/// [`take_due`](Self::take_due).
#[derive(Debug, Default)]
pub struct ReplyScheduler {
    pending: Vec<PendingReply>,
    next_id: ReplyId,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a reply that becomes due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> ReplyId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(PendingReply {
            id,
            due: now + delay,
        });
        id
    }

    /// Removes and returns every task due at or before `now`.
    ///
    /// Tasks come back ordered by due time; equal due times keep
    /// scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<PendingReply> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;
        due.sort_by_key(|p| (p.due, p.id));
        due
    }

    /// Earliest due time among pending tasks.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
