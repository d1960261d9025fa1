//! Event Normalization Error Types
//!
//! A rejection is a recoverable, per-event outcome: the event is dropped and
//! reported, the session stays active, and no counter or feed state changes.

use thiserror::Error;

use crate::events::Channel;

/// Result type for event normalization
pub type NormalizeResult<T> = Result<T, RejectReason>;

/// Reasons a raw event is rejected during normalization
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Event tagged with a channel outside the tracked set
    #[error("channel '{channel}' is not tracked")]
    UnknownChannel { channel: String },

    /// Event kind does not match the one kind expected on its channel
    #[error("unexpected kind '{kind}' on channel '{channel}' (expected '{expected}')")]
    UnexpectedKind {
        channel: Channel,
        kind: String,
        expected: &'static str,
    },

    /// Payload is missing a field required by the channel's message template
    #[error("payload field '{field}' missing or not a string for '{channel}' event")]
    MissingField {
        channel: Channel,
        field: &'static str,
    },
}

impl RejectReason {
    /// Create an unknown channel rejection
    pub fn unknown_channel(channel: impl Into<String>) -> Self {
        Self::UnknownChannel {
            channel: channel.into(),
        }
    }

    /// Create an unexpected kind rejection
    pub fn unexpected_kind(channel: Channel, kind: impl Into<String>) -> Self {
        Self::UnexpectedKind {
            channel,
            kind: kind.into(),
            expected: channel.expected_kind(),
        }
    }

    /// Create a missing field rejection
    pub fn missing_field(channel: Channel, field: &'static str) -> Self {
        Self::MissingField { channel, field }
    }
}
