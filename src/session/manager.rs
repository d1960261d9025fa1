//! Subscription Lifecycle Manager
//!
//! Orchestrates one activation-to-deactivation lifetime of the dashboard
//! feed aggregator. Activation subscribes to every tracked channel and wires
//! deliveries into a single-consumer queue drained by one worker task, which
//! preserves acceptance order across channels without a lock around the
//! queue itself. Deactivation flips the session's liveness flag before any
//! subscription handle is released, so an event in flight at teardown time
//! can never mutate session state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::events::{Channel, EventNormalizer, Notification, RawEvent};
use crate::feed::{CounterBank, Counters, NotificationFeed};
use crate::session::config::SessionConfig;
use crate::session::error::{ActivationError, ActivationResult};
use crate::session::stats::SessionStats;
use crate::transport::{ChannelRegistry, EventHandler, SubscriptionHandle};

/// Creates feed sessions against a channel registry
pub struct SessionManager {
    registry: Arc<dyn ChannelRegistry>,
    config: SessionConfig,
}

impl SessionManager {
    /// Create a manager with the default session configuration
    pub fn new(registry: Arc<dyn ChannelRegistry>) -> Self {
        Self::with_config(registry, SessionConfig::default())
    }

    /// Create a manager with a custom session configuration
    pub fn with_config(registry: Arc<dyn ChannelRegistry>, config: SessionConfig) -> Self {
        Self { registry, config }
    }

    /// Activate a session, subscribing to every tracked channel
    ///
    /// Counters start from the caller-supplied values; the core never invents
    /// initial counts. Activation is atomic: if any subscribe call fails,
    /// subscriptions established earlier in the attempt are released and the
    /// error is returned instead of an Active session with a subset of
    /// channels wired.
    pub async fn activate(&self, initial_counters: Counters) -> ActivationResult<FeedSession> {
        let session_id = Uuid::new_v4();

        let feed = match self.config.feed_capacity {
            Some(capacity) => NotificationFeed::with_capacity(capacity),
            None => NotificationFeed::new(),
        };

        let shared = Arc::new(SessionShared {
            live: AtomicBool::new(true),
            normalizer: EventNormalizer::new(),
            state: Mutex::new(SessionState {
                counters: CounterBank::new(initial_counters),
                feed,
                stats: SessionStats::default(),
            }),
        });

        let (queue, receiver) = mpsc::unbounded_channel();
        let worker = tokio::spawn(deliver_loop(Arc::clone(&shared), receiver));

        let mut subscriptions = Vec::with_capacity(Channel::COUNT);
        for channel in Channel::ALL {
            let handler = delivery_handler(Arc::clone(&shared), queue.clone());
            match self.registry.subscribe(channel, handler).await {
                Ok(handle) => subscriptions.push(handle),
                Err(source) => {
                    warn!(
                        "Activation of session {} failed on channel '{}': {}",
                        session_id, channel, source
                    );
                    shared.live.store(false, Ordering::SeqCst);
                    for handle in &subscriptions {
                        handle.unsubscribe();
                    }
                    worker.abort();
                    return Err(ActivationError::Subscription { channel, source });
                }
            }
        }

        info!(
            "Activated feed session {} across {} channels",
            session_id,
            subscriptions.len()
        );

        Ok(FeedSession {
            id: session_id,
            shared,
            subscriptions,
            worker,
        })
    }
}

/// Build the per-channel delivery callback handed to the transport
///
/// The liveness check here is the synchronous gate for deliveries racing
/// teardown: a handler invoked after the flag flips enqueues nothing.
fn delivery_handler(
    shared: Arc<SessionShared>,
    queue: mpsc::UnboundedSender<RawEvent>,
) -> EventHandler {
    Arc::new(move |raw| {
        if !shared.live.load(Ordering::SeqCst) {
            return;
        }
        // The worker side checks liveness again; a send error just means the
        // session is already gone.
        let _ = queue.send(raw);
    })
}

/// Single-consumer delivery worker
///
/// One worker per session drains the queue in arrival order, which is what
/// makes feed order equal acceptance order across all four channels.
async fn deliver_loop(shared: Arc<SessionShared>, mut receiver: mpsc::UnboundedReceiver<RawEvent>) {
    while let Some(raw) = receiver.recv().await {
        if !shared.live.load(Ordering::SeqCst) {
            break;
        }
        shared.ingest(raw);
    }
    debug!("Session delivery worker stopped");
}

/// State shared between the session handle, its delivery handlers, and the
/// worker task
struct SessionShared {
    live: AtomicBool,
    normalizer: EventNormalizer,
    state: Mutex<SessionState>,
}

struct SessionState {
    counters: CounterBank,
    feed: NotificationFeed,
    stats: SessionStats,
}

impl SessionShared {
    /// Process one delivered event to completion
    ///
    /// Runs as a single critical section so counters and feed stay mutually
    /// consistent per event: counter first, then feed, so a consumer polling
    /// both never observes a feed entry without its counter increment.
    fn ingest(&self, raw: RawEvent) {
        let mut state = self.state.lock();
        match self.normalizer.normalize(&raw) {
            Ok(notification) => {
                let count = state.counters.increment(notification.channel);
                debug!(
                    "Accepted {} on channel '{}' (count now {})",
                    notification.id, notification.channel, count
                );
                state.stats.record_accepted(raw.received_at);
                state.feed.prepend(notification);
            }
            Err(reason) => {
                warn!("Dropped event on channel '{}': {}", raw.channel, reason);
                state.stats.record_rejected();
            }
        }
    }
}

/// One activation-to-deactivation lifetime of the feed aggregator
///
/// Owns the per-session counters, feed, statistics, and channel
/// subscriptions. Dropping the session deactivates it.
pub struct FeedSession {
    id: Uuid,
    shared: Arc<SessionShared>,
    subscriptions: Vec<SubscriptionHandle>,
    worker: JoinHandle<()>,
}

impl std::fmt::Debug for FeedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSession")
            .field("id", &self.id)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl FeedSession {
    /// Unique identifier for this session
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the session still accepts deliveries
    pub fn is_active(&self) -> bool {
        self.shared.live.load(Ordering::SeqCst)
    }

    /// Tear the session down; idempotent
    ///
    /// The liveness flag flips before any handle is released, so deliveries
    /// that were in flight at teardown cannot mutate counters or feed.
    /// Mutations applied before the flip are never retracted.
    pub fn deactivate(&self) {
        if !self.shared.live.swap(false, Ordering::SeqCst) {
            debug!("Session {} already torn down", self.id);
            return;
        }
        for handle in &self.subscriptions {
            handle.unsubscribe();
        }
        self.worker.abort();
        info!("Deactivated feed session {}", self.id);
    }

    /// Point-in-time snapshot of the per-channel counters
    pub fn counters(&self) -> Counters {
        self.shared.state.lock().counters.snapshot()
    }

    /// Point-in-time snapshot of the feed, most recent first
    pub fn feed(&self) -> Vec<Notification> {
        self.shared.state.lock().feed.list()
    }

    /// Point-in-time snapshot of the delivery statistics
    pub fn stats(&self) -> SessionStats {
        self.shared.state.lock().stats.clone()
    }
}

impl Drop for FeedSession {
    fn drop(&mut self) {
        self.deactivate();
    }
}
