//! Per-Channel Counter Bank
//!
//! Advisory live counters, one per tracked channel. The surrounding CRUD
//! layer owns authoritative totals; these counters start from caller-supplied
//! values and move by exactly one per accepted event, so there is no
//! decrement operation.

use serde::{Deserialize, Serialize};

use crate::events::Channel;

/// Point-in-time counter snapshot, one value per tracked channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    counts: [u64; Channel::COUNT],
}

impl Counters {
    /// Create a snapshot with all channels at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial value for one channel
    pub fn with(mut self, channel: Channel, value: u64) -> Self {
        self.counts[channel.index()] = value;
        self
    }

    /// Current value for a channel
    pub fn get(&self, channel: Channel) -> u64 {
        self.counts[channel.index()]
    }

    /// Sum across all tracked channels
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Monotonically-updated counter bank backing a session's live counters
///
/// Mutated only inside the session's per-event critical section; callers
/// observe it through [`Counters`] snapshots.
#[derive(Debug)]
pub struct CounterBank {
    counts: [u64; Channel::COUNT],
}

impl CounterBank {
    /// Create a bank seeded with caller-supplied initial values
    pub fn new(initial: Counters) -> Self {
        Self {
            counts: initial.counts,
        }
    }

    /// Increment one channel's counter by exactly one, returning the new count
    pub fn increment(&mut self, channel: Channel) -> u64 {
        let slot = &mut self.counts[channel.index()];
        *slot += 1;
        *slot
    }

    /// Point-in-time snapshot of all counters
    pub fn snapshot(&self) -> Counters {
        Counters {
            counts: self.counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_builder() {
        let counters = Counters::new()
            .with(Channel::Jobs, 5)
            .with(Channel::Applications, 42);

        assert_eq!(counters.get(Channel::Jobs), 5);
        assert_eq!(counters.get(Channel::Applications), 42);
        assert_eq!(counters.get(Channel::Interviews), 0);
        assert_eq!(counters.total(), 47);
    }

    #[test]
    fn test_increment_returns_new_count() {
        let mut bank = CounterBank::new(Counters::new().with(Channel::Jobs, 5));

        assert_eq!(bank.increment(Channel::Jobs), 6);
        assert_eq!(bank.increment(Channel::Jobs), 7);
        assert_eq!(bank.snapshot().get(Channel::Jobs), 7);
    }

    #[test]
    fn test_increment_leaves_other_channels_untouched() {
        let initial = Counters::new()
            .with(Channel::Interviews, 8)
            .with(Channel::Placements, 12);
        let mut bank = CounterBank::new(initial);

        bank.increment(Channel::Interviews);

        let snapshot = bank.snapshot();
        assert_eq!(snapshot.get(Channel::Interviews), 9);
        assert_eq!(snapshot.get(Channel::Placements), 12);
        assert_eq!(snapshot.get(Channel::Jobs), 0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut bank = CounterBank::new(Counters::new());
        let before = bank.snapshot();
        bank.increment(Channel::Jobs);

        assert_eq!(before.get(Channel::Jobs), 0);
        assert_eq!(bank.snapshot().get(Channel::Jobs), 1);
    }
}
