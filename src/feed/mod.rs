//! Notification Feed
//!
//! Most-recent-first sequence of accepted notifications plus the per-channel
//! counter bank that moves in lockstep with it. Feed order is acceptance
//! order: the order events were handed to the session's delivery worker,
//! regardless of originating channel or each event's own timestamp.
//!
//! The feed is unbounded by default; long-lived dashboard sessions should
//! set a capacity so the oldest entries are evicted instead of accumulating
//! for the lifetime of the session.

pub mod counters;

use std::collections::VecDeque;

use crate::events::Notification;

// Re-export main types for convenience
pub use counters::{CounterBank, Counters};

/// Ordered notification feed, most recent first
#[derive(Debug, Default)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
    capacity: Option<usize>,
}

impl NotificationFeed {
    /// Create an unbounded feed
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a feed that keeps at most `capacity` notifications
    ///
    /// When full, prepending evicts the oldest entry. Surviving entries are
    /// never reordered by eviction. A capacity of zero keeps nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Prepend a notification as the new most-recent entry
    pub fn prepend(&mut self, notification: Notification) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.entries.len() >= capacity {
                self.entries.pop_back();
            }
        }
        self.entries.push_front(notification);
    }

    /// Snapshot of the feed, most recent first
    pub fn list(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    /// The most recently accepted notification, if any
    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    /// Number of notifications currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the feed holds no notifications
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity bound, if any
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
