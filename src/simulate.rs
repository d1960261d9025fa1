//! Simulation/Broadcast Facade
//!
//! Producer-side convenience for demos and tests: synthesizes events onto a
//! channel through the registry's broadcast primitive. Entirely decoupled
//! from the consumer-side session state; a failed broadcast is reported to
//! the caller and never touches any active session.

use std::sync::Arc;

use log::warn;
use serde_json::json;

use crate::events::{Channel, Payload};
use crate::transport::{BroadcastOutcome, ChannelRegistry, TransportResult};

/// Synthesizes placement-portal events onto tracked channels
pub struct EventSimulator {
    registry: Arc<dyn ChannelRegistry>,
}

impl EventSimulator {
    /// Create a simulator publishing through the given registry
    pub fn new(registry: Arc<dyn ChannelRegistry>) -> Self {
        Self { registry }
    }

    /// Publish an arbitrary event onto a channel
    pub async fn emit(
        &self,
        channel: Channel,
        kind: &str,
        payload: Payload,
    ) -> TransportResult<BroadcastOutcome> {
        match self.registry.broadcast(channel, kind, payload).await {
            Ok(outcome) => Ok(outcome),
            Err(error) => {
                warn!("Failed to broadcast '{}' on '{}': {}", kind, channel, error);
                Err(error)
            }
        }
    }

    /// Publish a job posting event
    pub async fn emit_job_posted(
        &self,
        title: &str,
        company: &str,
    ) -> TransportResult<BroadcastOutcome> {
        self.emit(
            Channel::Jobs,
            Channel::Jobs.expected_kind(),
            object(json!({ "title": title, "company": company })),
        )
        .await
    }

    /// Publish an application submission event
    pub async fn emit_application_submitted(
        &self,
        applicant: &str,
        job_title: &str,
    ) -> TransportResult<BroadcastOutcome> {
        self.emit(
            Channel::Applications,
            Channel::Applications.expected_kind(),
            object(json!({ "applicant": applicant, "job_title": job_title })),
        )
        .await
    }

    /// Publish an interview scheduling event
    pub async fn emit_interview_scheduled(
        &self,
        candidate: &str,
        company: &str,
    ) -> TransportResult<BroadcastOutcome> {
        self.emit(
            Channel::Interviews,
            Channel::Interviews.expected_kind(),
            object(json!({ "candidate": candidate, "company": company })),
        )
        .await
    }

    /// Publish a placement confirmation event
    pub async fn emit_placement_confirmed(
        &self,
        student: &str,
        company: &str,
    ) -> TransportResult<BroadcastOutcome> {
        self.emit(
            Channel::Placements,
            Channel::Placements.expected_kind(),
            object(json!({ "student": student, "company": company })),
        )
        .await
    }
}

fn object(value: serde_json::Value) -> Payload {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Payload::new(),
    }
}
