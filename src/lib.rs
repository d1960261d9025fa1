//! Realtime Event Aggregation for the Placement Dashboard
//!
//! A library that subscribes to the portal's independently-evolving event
//! channels (job postings, applications, interviews, placements), normalizes
//! their heterogeneous payloads into uniform notification records, maintains
//! running per-channel counters, and keeps a most-recent-first notification
//! feed with a clean subscribe/unsubscribe lifecycle.
//!
//! # Architecture
//!
//! - **transport**: the channel registry boundary (subscribe/broadcast),
//!   with an in-process loopback implementation
//! - **events**: channels, raw events, the typed payload union, and the
//!   normalizer that turns raw events into notifications
//! - **feed**: per-channel counter bank and the bounded notification feed
//! - **session**: the subscription lifecycle manager; one session owns its
//!   counters, feed, and subscriptions from activation to teardown
//! - **simulate**: producer-side facade for synthesizing events in demos
//!   and tests
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use placefeed::events::Channel;
//! use placefeed::feed::Counters;
//! use placefeed::session::SessionManager;
//! use placefeed::simulate::EventSimulator;
//! use placefeed::transport::InMemoryChannelRegistry;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(InMemoryChannelRegistry::new());
//!
//! // Counters start from the dashboard's authoritative totals
//! let manager = SessionManager::new(registry.clone());
//! let session = manager
//!     .activate(Counters::new().with(Channel::Jobs, 5))
//!     .await?;
//!
//! let simulator = EventSimulator::new(registry);
//! simulator
//!     .emit_job_posted("Frontend Developer", "Tech Innovations")
//!     .await?;
//!
//! println!("jobs counter: {}", session.counters().get(Channel::Jobs));
//! println!("latest: {:?}", session.feed().first());
//!
//! session.deactivate();
//! # Ok(())
//! # }
//! ```

pub mod events;
pub mod feed;
pub mod session;
pub mod simulate;
pub mod transport;

// Re-export the consumer-facing surface for convenience
pub use events::{Channel, Notification, NotificationId, RawEvent};
pub use feed::Counters;
pub use session::{ActivationError, FeedSession, SessionConfig, SessionManager, SessionStats};
pub use simulate::EventSimulator;
pub use transport::{ChannelRegistry, InMemoryChannelRegistry, SubscriptionHandle};
