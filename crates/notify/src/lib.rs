// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::collections::VecDeque;
use time::{Duration, OffsetDateTime};

/// Display duration applied when the enqueueing site does not choose one.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::milliseconds(3000);

/// Severity of a transient message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An operation completed as intended.
    Success,
    /// An operation failed.
    Error,
    /// Something completed with a caveat.
    Warning,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Converts this severity to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transient message owned by the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier unique within the process, assigned by the queue.
    pub id: u64,
    /// Message text.
    pub message: String,
    /// Severity, driving the display style.
    pub severity: Severity,
    /// How long the message stays visible once its timer is armed.
    pub duration: Duration,
}

/// Ordered, self-expiring collection of transient messages.
///
/// Expiry is strictly FIFO: a single timer is armed for the front entry,
/// and only when it elapses (or the front entry is dismissed) is a new
/// timer armed for the next entry. Entries therefore never expire out of
/// enqueue order, even when a later entry carries a shorter duration.
///
/// The host schedules the actual timer; the queue exposes the pending
/// deadline through [`Self::front_deadline`] and is driven by
/// [`Self::tick`]. There is at most one pending deadline at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    next_id: u64,
    armed_at: Option<OffsetDateTime>,
}

impl NotificationQueue {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            next_id: 1,
            armed_at: None,
        }
    }

    /// Appends a message and returns its identifier.
    ///
    /// If the queue was empty, the expiry timer is armed at `now` for
    /// the new entry.
    pub fn enqueue(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Duration,
        now: OffsetDateTime,
    ) -> u64 {
        let id: u64 = self.next_id;
        self.next_id += 1;
        if self.entries.is_empty() {
            self.armed_at = Some(now);
        }
        self.entries.push_back(Notification {
            id,
            message: message.into(),
            severity,
            duration,
        });
        id
    }

    /// Enqueues a Success message with the default duration.
    pub fn success(&mut self, message: impl Into<String>, now: OffsetDateTime) -> u64 {
        self.enqueue(message, Severity::Success, DEFAULT_DISPLAY_DURATION, now)
    }

    /// Enqueues an Error message with the default duration.
    pub fn error(&mut self, message: impl Into<String>, now: OffsetDateTime) -> u64 {
        self.enqueue(message, Severity::Error, DEFAULT_DISPLAY_DURATION, now)
    }

    /// Enqueues a Warning message with the default duration.
    pub fn warning(&mut self, message: impl Into<String>, now: OffsetDateTime) -> u64 {
        self.enqueue(message, Severity::Warning, DEFAULT_DISPLAY_DURATION, now)
    }

    /// Enqueues an Info message with the default duration.
    pub fn info(&mut self, message: impl Into<String>, now: OffsetDateTime) -> u64 {
        self.enqueue(message, Severity::Info, DEFAULT_DISPLAY_DURATION, now)
    }

    /// Removes a message immediately, regardless of elapsed time.
    ///
    /// Dismissing the front entry cancels the pending timer and re-arms
    /// it at `now` for the next entry, if any. Returns whether a message
    /// was removed.
    pub fn dismiss(&mut self, id: u64, now: OffsetDateTime) -> bool {
        let Some(position) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let _removed: Option<Notification> = self.entries.remove(position);
        if position == 0 {
            self.armed_at = if self.entries.is_empty() {
                None
            } else {
                Some(now)
            };
        }
        true
    }

    /// The deadline of the single pending timer, if any.
    #[must_use]
    pub fn front_deadline(&self) -> Option<OffsetDateTime> {
        let armed_at: OffsetDateTime = self.armed_at?;
        self.entries.front().map(|front| armed_at + front.duration)
    }

    /// Expires the front entry if its deadline has passed.
    ///
    /// Only the front entry is considered; the next timer is armed at
    /// the moment the previous one fired, so a burst of overdue entries
    /// drains one deadline at a time. Returns the expired entry, or
    /// `None` when nothing was due.
    pub fn tick(&mut self, now: OffsetDateTime) -> Option<Notification> {
        let deadline: OffsetDateTime = self.front_deadline()?;
        if now < deadline {
            return None;
        }
        let expired: Notification = self.entries.pop_front()?;
        self.armed_at = if self.entries.is_empty() {
            None
        } else {
            Some(deadline)
        };
        Some(expired)
    }

    /// Expires every entry whose chained deadline has passed, in
    /// enqueue order.
    pub fn drain_expired(&mut self, now: OffsetDateTime) -> Vec<Notification> {
        let mut expired: Vec<Notification> = Vec::new();
        while let Some(notification) = self.tick(now) {
            expired.push(notification);
        }
        expired
    }

    /// The queued messages, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn start() -> OffsetDateTime {
        datetime!(2024-06-15 12:00 UTC)
    }

    fn ms(milliseconds: i64) -> Duration {
        Duration::milliseconds(milliseconds)
    }

    #[test]
    fn test_enqueue_assigns_unique_identifiers() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let first: u64 = queue.success("Property saved", start());
        let second: u64 = queue.error("Property could not be saved", start());

        assert_ne!(first, second);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_expiry_follows_enqueue_order_not_duration_order() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        let first: u64 = queue.enqueue("first", Severity::Info, ms(100), t0);
        let second: u64 = queue.enqueue("second", Severity::Info, ms(50), t0);
        let third: u64 = queue.enqueue("third", Severity::Info, ms(200), t0);

        // The second entry's shorter duration does not let it jump the
        // queue: timers chain strictly front to back.
        let expired: Vec<Notification> = queue.drain_expired(t0 + ms(1000));
        let order: Vec<u64> = expired.iter().map(|n| n.id).collect();
        assert_eq!(order, vec![first, second, third]);
    }

    #[test]
    fn test_timers_chain_from_previous_deadline() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        queue.enqueue("first", Severity::Info, ms(100), t0);
        queue.enqueue("second", Severity::Info, ms(50), t0);
        queue.enqueue("third", Severity::Info, ms(200), t0);

        assert!(queue.tick(t0 + ms(99)).is_none());
        assert_eq!(queue.tick(t0 + ms(100)).map(|n| n.message), Some(String::from("first")));
        // The second timer armed at t0+100 and runs 50ms.
        assert!(queue.tick(t0 + ms(149)).is_none());
        assert_eq!(queue.tick(t0 + ms(150)).map(|n| n.message), Some(String::from("second")));
        // The third timer armed at t0+150 and runs 200ms.
        assert!(queue.tick(t0 + ms(349)).is_none());
        assert_eq!(queue.tick(t0 + ms(350)).map(|n| n.message), Some(String::from("third")));
        assert!(queue.is_empty());
        assert_eq!(queue.front_deadline(), None);
    }

    #[test]
    fn test_tick_expires_at_most_one_entry() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        queue.enqueue("first", Severity::Info, ms(10), t0);
        queue.enqueue("second", Severity::Info, ms(10), t0);

        // Far past both deadlines, but a single fire removes only the
        // front entry.
        let expired: Option<Notification> = queue.tick(t0 + ms(1000));
        assert_eq!(expired.map(|n| n.message), Some(String::from("first")));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss_front_rearms_timer_at_dismissal_time() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        let first: u64 = queue.enqueue("first", Severity::Info, ms(100), t0);
        queue.enqueue("second", Severity::Info, ms(50), t0);

        assert!(queue.dismiss(first, t0 + ms(30)));
        // The second entry's timer starts at the dismissal, not at t0.
        assert_eq!(queue.front_deadline(), Some(t0 + ms(80)));
    }

    #[test]
    fn test_dismiss_mid_queue_leaves_timer_alone() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        queue.enqueue("first", Severity::Info, ms(100), t0);
        let second: u64 = queue.enqueue("second", Severity::Info, ms(50), t0);

        assert!(queue.dismiss(second, t0 + ms(30)));
        assert_eq!(queue.front_deadline(), Some(t0 + ms(100)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss_unknown_identifier_is_a_no_op() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        queue.enqueue("first", Severity::Info, ms(100), t0);
        let before: NotificationQueue = queue.clone();

        assert!(!queue.dismiss(999, t0 + ms(10)));
        assert_eq!(queue, before);
    }

    #[test]
    fn test_dismiss_last_entry_disarms_timer() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        let only: u64 = queue.enqueue("only", Severity::Warning, ms(100), t0);

        assert!(queue.dismiss(only, t0 + ms(10)));
        assert!(queue.is_empty());
        assert_eq!(queue.front_deadline(), None);
    }

    #[test]
    fn test_enqueue_into_drained_queue_rearms_from_enqueue_time() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        queue.enqueue("first", Severity::Info, ms(100), t0);
        assert!(queue.tick(t0 + ms(100)).is_some());
        assert!(queue.is_empty());

        let later: OffsetDateTime = t0 + ms(500);
        queue.enqueue("second", Severity::Info, ms(100), later);
        assert_eq!(queue.front_deadline(), Some(later + ms(100)));
    }

    #[test]
    fn test_severity_helpers_use_default_duration() {
        let mut queue: NotificationQueue = NotificationQueue::new();
        let t0: OffsetDateTime = start();
        queue.info("Advanced filters are under development", t0);

        let front: &Notification = queue.iter().next().unwrap();
        assert_eq!(front.severity, Severity::Info);
        assert_eq!(front.duration, DEFAULT_DISPLAY_DURATION);
        assert_eq!(queue.front_deadline(), Some(t0 + DEFAULT_DISPLAY_DURATION));
    }
}
