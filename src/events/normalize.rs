//! Event Normalizer
//!
//! Maps raw transport events into canonical [`Notification`] records. The
//! normalizer validates the channel tag, the event kind, and the payload's
//! required fields, then renders the channel-specific message and assigns a
//! session-unique id.
//!
//! Normalization has no side effects beyond id allocation: it never touches
//! counters or the feed, so it stays unit-testable in isolation. Counter and
//! feed updates belong to the delivery worker that calls it.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::events::error::{NormalizeResult, RejectReason};
use crate::events::{Channel, DomainEvent, Notification, NotificationId, Payload, RawEvent};

/// Normalizes raw events and allocates notification ids
///
/// Ids come from a monotonic per-session sequence, not wall-clock time, so
/// events arriving within the same clock tick still get distinct ids.
#[derive(Debug, Default)]
pub struct EventNormalizer {
    next_id: AtomicU64,
}

impl EventNormalizer {
    /// Create a normalizer with its id sequence starting at zero
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(0),
        }
    }

    /// Normalize a raw event into a notification, or reject it
    ///
    /// Rejection carries the reason so the caller can report it; the caller
    /// is responsible for ensuring a rejected event causes no state change.
    pub fn normalize(&self, raw: &RawEvent) -> NormalizeResult<Notification> {
        let channel = Channel::parse(&raw.channel)
            .ok_or_else(|| RejectReason::unknown_channel(raw.channel.clone()))?;

        if raw.kind != channel.expected_kind() {
            return Err(RejectReason::unexpected_kind(channel, raw.kind.clone()));
        }

        let event = decode_payload(channel, &raw.payload)?;

        Ok(Notification {
            id: self.allocate_id(),
            channel,
            message: event.message(),
            occurred_at: raw.received_at,
        })
    }

    fn allocate_id(&self) -> NotificationId {
        NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

/// Decode the required fields for a channel's event kind
fn decode_payload(channel: Channel, payload: &Payload) -> NormalizeResult<DomainEvent> {
    let field = |name: &'static str| -> NormalizeResult<String> {
        payload
            .get(name)
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or(RejectReason::missing_field(channel, name))
    };

    let event = match channel {
        Channel::Jobs => DomainEvent::JobPosted {
            title: field("title")?,
            company: field("company")?,
        },
        Channel::Applications => DomainEvent::ApplicationSubmitted {
            applicant: field("applicant")?,
            job_title: field("job_title")?,
        },
        Channel::Interviews => DomainEvent::InterviewScheduled {
            candidate: field("candidate")?,
            company: field("company")?,
        },
        Channel::Placements => DomainEvent::PlacementConfirmed {
            student: field("student")?,
            company: field("company")?,
        },
    };

    Ok(event)
}
