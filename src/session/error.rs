//! Session Error Types

use thiserror::Error;

use crate::events::Channel;
use crate::transport::TransportError;

/// Result type for session activation
pub type ActivationResult<T> = Result<T, ActivationError>;

/// Errors that can occur while activating a feed session
///
/// Activation is atomic: by the time one of these is returned, any
/// subscriptions established earlier in the attempt have been released.
#[derive(Debug, Error)]
pub enum ActivationError {
    /// The channel registry failed to establish a subscription
    #[error("failed to subscribe to channel '{channel}': {source}")]
    Subscription {
        channel: Channel,
        #[source]
        source: TransportError,
    },
}
