//! Session Delivery Statistics
//!
//! Rejected events are invisible on the feed and counters, so these tallies
//! are the operability window into what the session actually saw.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Statistics for one feed session's delivery path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Events that passed normalization and reached counters and feed
    pub events_accepted: u64,

    /// Events dropped by normalization (unknown channel, bad kind, bad payload)
    pub events_rejected: u64,

    /// Receipt time of the most recently accepted event
    pub last_event_at: Option<SystemTime>,
}

impl SessionStats {
    /// Record an accepted event
    pub(crate) fn record_accepted(&mut self, received_at: SystemTime) {
        self.events_accepted += 1;
        self.last_event_at = Some(received_at);
    }

    /// Record a rejected event
    pub(crate) fn record_rejected(&mut self) {
        self.events_rejected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_tally_independently() {
        let mut stats = SessionStats::default();
        let now = SystemTime::now();

        stats.record_accepted(now);
        stats.record_accepted(now);
        stats.record_rejected();

        assert_eq!(stats.events_accepted, 2);
        assert_eq!(stats.events_rejected, 1);
        assert_eq!(stats.last_event_at, Some(now));
    }

    #[test]
    fn test_rejection_does_not_touch_last_event_time() {
        let mut stats = SessionStats::default();
        stats.record_rejected();
        assert_eq!(stats.last_event_at, None);
    }
}
