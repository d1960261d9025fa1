//! Transport Error Types
//!
//! Errors surfaced at the channel registry boundary. Per-event handler
//! failures never travel through here; the transport only reports problems
//! with establishing subscriptions or publishing broadcasts.

use thiserror::Error;

use crate::events::Channel;

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur at the channel registry boundary
#[derive(Debug, Error, Clone)]
pub enum TransportError {
    /// The underlying channel is closed and can no longer deliver
    #[error("channel '{channel}' is closed")]
    ChannelClosed { channel: Channel },

    /// Generic transport operation failure
    #[error("transport operation failed: {message}")]
    OperationFailed { message: String },
}

impl TransportError {
    /// Create an operation failed error
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display() {
        let error = TransportError::ChannelClosed {
            channel: Channel::Jobs,
        };
        assert_eq!(error.to_string(), "channel 'jobs' is closed");

        let error = TransportError::operation_failed("registry unreachable");
        assert_eq!(
            error.to_string(),
            "transport operation failed: registry unreachable"
        );
    }
}
