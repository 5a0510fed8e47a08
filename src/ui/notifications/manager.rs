// SPDX-License-Identifier: MPL-2.0
//! Toast queue: at most [`MAX_VISIBLE`] on screen, the rest wait.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(key = notification.key(), "warning toast"),
            Severity::Error => tracing::error!(key = notification.key(), "error toast"),
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.key(), "toast");
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote(now);
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts and promotes queued ones into their slots.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote(now);
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, Instant::now());
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the app should keep delivering ticks.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut next) = self.queue.pop_front() else {
                break;
            };
            next.shown(now);
            self.visible.push_back(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn fourth_toast_is_queued() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::info(format!("toast-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn newest_toast_is_listed_first() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::info("second"));
        let keys: Vec<_> = manager.visible().map(Notification::key).collect();
        assert_eq!(keys, ["second", "first"]);
    }

    #[test]
    fn dismiss_promotes_queued_toast() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let id = first.id();
        manager.push(first);
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::error(format!("more-{i}")));
        }
        assert!(manager.dismiss(id, Instant::now()));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(id, Instant::now()));
    }

    #[test]
    fn tick_expires_info_but_keeps_errors() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-profile-coming-soon"));
        manager.push(Notification::error("notification-config-io-error"));
        manager.tick(Instant::now() + Duration::from_secs(10));
        assert_eq!(manager.visible_count(), 1);
        let remaining = manager.visible().next().map(Notification::key);
        assert_eq!(remaining, Some("notification-config-io-error"));
    }

    #[test]
    fn promoted_toast_gets_a_fresh_timer() {
        let mut manager = Manager::new();
        let start = Instant::now();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("early-{i}")));
        }
        manager.push(Notification::info("late"));

        let later = start + Duration::from_secs(4);
        manager.tick(later);
        assert_eq!(manager.visible_count(), 1);
        manager.tick(later + Duration::from_secs(1));
        assert_eq!(manager.visible_count(), 1, "late toast restarted its timer");
    }
}
