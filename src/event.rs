use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::SequenceNumber;

/// An `EventEnvelope` contains the payload (the original event) alongside the event's metadata.
///
/// Envelopes are handed to the [`crate::EventHandler`]s right after the event is applied and are dropped
/// afterwards: nothing keeps them around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope<Event> {
    /// Uniquely identifies an event among all events emitted from all aggregates.
    pub id: Uuid,
    /// The aggregate instance that emitted the event.
    pub aggregate_id: Uuid,
    /// The original, emitted, event.
    pub payload: Event,
    /// The timestamp of when the event was applied.
    pub occurred_on: DateTime<Utc>,
    /// The sequence number of the event, within its specific aggregate instance.
    pub sequence_number: SequenceNumber,
}

impl<Event> EventEnvelope<Event> {
    pub fn new(aggregate_id: Uuid, payload: Event, sequence_number: SequenceNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            aggregate_id,
            payload,
            occurred_on: Utc::now(),
            sequence_number,
        }
    }

    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }

    pub const fn payload(&self) -> &Event {
        &self.payload
    }
}
