//! Placement Event Model
//!
//! Defines the tracked event channels, the wire-level raw event delivered by
//! the transport, the typed payload union for the tracked event kinds, and
//! the canonical notification record consumed by the dashboard feed.
//!
//! # Architecture
//!
//! - **Channel**: closed set of tracked event streams (jobs, applications,
//!   interviews, placements)
//! - **RawEvent**: transport-delivered event, opaque apart from channel and kind
//! - **DomainEvent**: typed payload union, one variant per tracked kind
//! - **Notification**: immutable, displayable record produced by normalization

pub mod error;
pub mod normalize;

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

// Re-export main types for convenience
pub use error::{NormalizeResult, RejectReason};
pub use normalize::EventNormalizer;

/// Wire-level event payload as produced by the transport
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Tracked event channels
///
/// The set is fixed at process start; events tagged with any other channel
/// name are rejected during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Job postings
    Jobs,
    /// Submitted applications
    Applications,
    /// Scheduled interviews
    Interviews,
    /// Confirmed placements
    Placements,
}

impl Channel {
    /// All tracked channels, in subscription order
    pub const ALL: [Channel; 4] = [
        Channel::Jobs,
        Channel::Applications,
        Channel::Interviews,
        Channel::Placements,
    ];

    /// Number of tracked channels
    pub const COUNT: usize = Self::ALL.len();

    /// Stable wire name used by the transport
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Jobs => "jobs",
            Channel::Applications => "applications",
            Channel::Interviews => "interviews",
            Channel::Placements => "placements",
        }
    }

    /// Parse a wire name back into a tracked channel
    pub fn parse(name: &str) -> Option<Channel> {
        match name {
            "jobs" => Some(Channel::Jobs),
            "applications" => Some(Channel::Applications),
            "interviews" => Some(Channel::Interviews),
            "placements" => Some(Channel::Placements),
            _ => None,
        }
    }

    /// The single event kind accepted on this channel
    pub fn expected_kind(&self) -> &'static str {
        match self {
            Channel::Jobs => "new-job",
            Channel::Applications => "new-application",
            Channel::Interviews => "new-interview",
            Channel::Placements => "new-placement",
        }
    }

    /// Dense index, used for per-channel counter storage
    pub(crate) fn index(&self) -> usize {
        match self {
            Channel::Jobs => 0,
            Channel::Applications => 1,
            Channel::Interviews => 2,
            Channel::Placements => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw inbound event as delivered by the transport
///
/// The channel field carries the wire-level channel name rather than a parsed
/// [`Channel`]; resolving it is the normalizer's first step, which keeps
/// mislabeled deliveries representable as rejections instead of panics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    /// Wire name of the originating channel
    pub channel: String,
    /// Event kind tag (e.g. `"new-job"`)
    pub kind: String,
    /// Arbitrary payload map, interpreted only during normalization
    pub payload: Payload,
    /// When the transport handed the event to this process
    pub received_at: SystemTime,
}

impl RawEvent {
    /// Create a raw event stamped with the current time
    pub fn new(channel: Channel, kind: impl Into<String>, payload: Payload) -> Self {
        Self {
            channel: channel.name().to_string(),
            kind: kind.into(),
            payload,
            received_at: SystemTime::now(),
        }
    }
}

/// Typed payload union over the tracked event kinds
///
/// One variant per channel, each with that channel's fixed required-field
/// set. Anything that does not decode into one of these variants is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    /// A job was posted (`jobs` / `new-job`)
    JobPosted { title: String, company: String },
    /// An application was submitted (`applications` / `new-application`)
    ApplicationSubmitted { applicant: String, job_title: String },
    /// An interview was scheduled (`interviews` / `new-interview`)
    InterviewScheduled { candidate: String, company: String },
    /// A placement was confirmed (`placements` / `new-placement`)
    PlacementConfirmed { student: String, company: String },
}

impl DomainEvent {
    /// The channel this event belongs to
    pub fn channel(&self) -> Channel {
        match self {
            DomainEvent::JobPosted { .. } => Channel::Jobs,
            DomainEvent::ApplicationSubmitted { .. } => Channel::Applications,
            DomainEvent::InterviewScheduled { .. } => Channel::Interviews,
            DomainEvent::PlacementConfirmed { .. } => Channel::Placements,
        }
    }

    /// Human-readable feed message for this event
    pub fn message(&self) -> String {
        match self {
            DomainEvent::JobPosted { title, company } => {
                format!("New job posted: {} at {}", title, company)
            }
            DomainEvent::ApplicationSubmitted { applicant, job_title } => {
                format!("New application: {} applied for {}", applicant, job_title)
            }
            DomainEvent::InterviewScheduled { candidate, company } => {
                format!("Interview scheduled: {} with {}", candidate, company)
            }
            DomainEvent::PlacementConfirmed { student, company } => {
                format!("Placement confirmed: {} placed at {}", student, company)
            }
        }
    }
}

/// Opaque notification identifier, unique within one session
///
/// Allocated from a monotonic per-session sequence rather than wall-clock
/// time, so two events arriving within the same clock tick still get
/// distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(pub(crate) u64);

impl NotificationId {
    /// Raw sequence value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n-{}", self.0)
    }
}

/// Canonical, displayable notification record
///
/// Created exclusively by the normalizer and immutable afterwards; the feed
/// only reorders notifications by prepending, never mutates them in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Session-unique identifier
    pub id: NotificationId,
    /// Originating channel
    pub channel: Channel,
    /// Rendered feed message
    pub message: String,
    /// When the underlying event occurred (the transport receipt time)
    pub occurred_at: SystemTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_wire_names_round_trip() {
        for channel in Channel::ALL {
            assert_eq!(Channel::parse(channel.name()), Some(channel));
        }
        assert_eq!(Channel::parse("workshops"), None);
    }

    #[test]
    fn test_channel_indices_are_dense() {
        let mut seen = [false; Channel::COUNT];
        for channel in Channel::ALL {
            assert!(!seen[channel.index()]);
            seen[channel.index()] = true;
        }
    }

    #[test]
    fn test_domain_event_messages() {
        let event = DomainEvent::JobPosted {
            title: "Frontend Developer".to_string(),
            company: "Tech Innovations".to_string(),
        };
        assert_eq!(event.channel(), Channel::Jobs);
        assert_eq!(
            event.message(),
            "New job posted: Frontend Developer at Tech Innovations"
        );

        let event = DomainEvent::PlacementConfirmed {
            student: "Priya Sharma".to_string(),
            company: "Acme Corp".to_string(),
        };
        assert_eq!(event.channel(), Channel::Placements);
        assert_eq!(
            event.message(),
            "Placement confirmed: Priya Sharma placed at Acme Corp"
        );
    }

    #[test]
    fn test_raw_event_stamps_wire_name() {
        let raw = RawEvent::new(Channel::Interviews, "new-interview", Payload::new());
        assert_eq!(raw.channel, "interviews");
        assert_eq!(raw.kind, "new-interview");
    }
}
