//! In-Memory Channel Registry
//!
//! Loopback transport for this process: one tokio broadcast channel per
//! tracked channel, with a forwarding task per subscription that invokes the
//! registered handler for each delivered event. Used by demos and tests; the
//! core itself only sees the [`ChannelRegistry`] trait.

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::events::{Channel, Payload, RawEvent};
use crate::transport::error::TransportResult;
use crate::transport::{BroadcastOutcome, ChannelRegistry, EventHandler, SubscriptionHandle};

/// Default per-channel buffer size for in-flight events
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// In-process loopback implementation of [`ChannelRegistry`]
pub struct InMemoryChannelRegistry {
    senders: [broadcast::Sender<RawEvent>; Channel::COUNT],
}

impl InMemoryChannelRegistry {
    /// Create a registry with the default per-channel capacity
    pub fn new() -> Self {
        Self::with_channel_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a registry with a custom per-channel capacity
    ///
    /// A subscriber that falls more than `capacity` events behind loses the
    /// oldest ones; the transport promises at-least-once only for keeping-up
    /// subscribers.
    pub fn with_channel_capacity(capacity: usize) -> Self {
        // tokio broadcast requires a non-zero buffer
        let capacity = capacity.max(1);
        Self {
            senders: Channel::ALL.map(|_| broadcast::channel(capacity).0),
        }
    }

    fn sender(&self, channel: Channel) -> &broadcast::Sender<RawEvent> {
        &self.senders[channel.index()]
    }
}

impl Default for InMemoryChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChannelRegistry for InMemoryChannelRegistry {
    async fn subscribe(
        &self,
        channel: Channel,
        handler: EventHandler,
    ) -> TransportResult<SubscriptionHandle> {
        let mut receiver = self.sender(channel).subscribe();
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => break,
                    result = receiver.recv() => match result {
                        Ok(raw) => handler(raw),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(
                                "Subscriber on channel '{}' lagged, {} events dropped",
                                channel, skipped
                            );
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            }
            debug!("Delivery task for channel '{}' stopped", channel);
        });

        debug!("Subscribed handler to channel '{}'", channel);
        Ok(SubscriptionHandle::new(channel, cancel))
    }

    async fn broadcast(
        &self,
        channel: Channel,
        kind: &str,
        payload: Payload,
    ) -> TransportResult<BroadcastOutcome> {
        let raw = RawEvent::new(channel, kind, payload);

        // A send with no live subscribers is a successful broadcast that
        // reached nobody, not a transport failure.
        let receivers = self.sender(channel).send(raw).unwrap_or(0);

        debug!(
            "Broadcast '{}' on channel '{}' to {} receiver(s)",
            kind, channel, receivers
        );
        Ok(BroadcastOutcome { channel, receivers })
    }
}
