//! Channel Registry Boundary
//!
//! The publish/subscribe transport is an external collaborator: the core only
//! depends on the [`ChannelRegistry`] trait defined here. An in-process
//! loopback implementation backed by tokio broadcast channels is provided for
//! demos and tests; a real deployment can supply its own registry behind the
//! same trait.
//!
//! # Architecture
//!
//! - **ChannelRegistry**: subscribe/broadcast primitives per tracked channel
//! - **SubscriptionHandle**: per-channel handle whose `unsubscribe` stops
//!   further delivery (safe to call more than once)
//! - **InMemoryChannelRegistry**: loopback transport for this process

pub mod error;
pub mod memory;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::events::{Channel, Payload, RawEvent};

// Re-export main types for convenience
pub use error::{TransportError, TransportResult};
pub use memory::InMemoryChannelRegistry;

/// Callback invoked by the transport for every event delivered on a
/// subscribed channel
///
/// Handlers must not block; delivery paths treat each invocation as an
/// atomic, non-suspending unit of work.
pub type EventHandler = Arc<dyn Fn(RawEvent) + Send + Sync>;

/// Outcome of a broadcast: how wide the fan-out was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastOutcome {
    /// Channel the event was published on
    pub channel: Channel,
    /// Number of live subscribers the event was handed to
    pub receivers: usize,
}

/// Named-channel publish/subscribe registry
///
/// Loopback delivery is expected: a broadcast reaches this process's own
/// handlers, since consumer and simulated producer share the same channels.
#[async_trait]
pub trait ChannelRegistry: Send + Sync {
    /// Register `handler` for every event delivered on `channel`
    ///
    /// Returns a handle whose [`SubscriptionHandle::unsubscribe`] stops
    /// further delivery to the handler.
    async fn subscribe(
        &self,
        channel: Channel,
        handler: EventHandler,
    ) -> TransportResult<SubscriptionHandle>;

    /// Publish an event to all current subscribers of `channel`
    async fn broadcast(
        &self,
        channel: Channel,
        kind: &str,
        payload: Payload,
    ) -> TransportResult<BroadcastOutcome>;
}

/// Handle for one channel subscription
///
/// At most one teardown happens per handle: `active` transitions true to
/// false exactly once, and repeated `unsubscribe` calls are no-ops.
#[derive(Debug)]
pub struct SubscriptionHandle {
    channel: Channel,
    active: AtomicBool,
    cancel: CancellationToken,
}

impl SubscriptionHandle {
    /// Create a handle whose delivery path observes `cancel`
    pub fn new(channel: Channel, cancel: CancellationToken) -> Self {
        Self {
            channel,
            active: AtomicBool::new(true),
            cancel,
        }
    }

    /// Channel this subscription delivers from
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Whether the subscription still delivers events
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Stop further delivery; safe to call more than once
    pub fn unsubscribe(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            self.cancel.cancel();
            debug!("Unsubscribed from channel '{}'", self.channel);
        }
    }
}
