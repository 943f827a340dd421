use uuid::Uuid;

use crate::types::SequenceNumber;

/// The internal state for an Aggregate.
/// It contains:
/// - an id uniquely representing the aggregate,
/// - an incremental sequence number,
/// - a state defined by the user of this library.
#[derive(Debug, Clone)]
pub struct AggregateState<S> {
    id: Uuid,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S: Default> Default for AggregateState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Default> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with a new unique id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a new instance of an [`AggregateState`] with the given aggregate id.
    pub fn with_id(id: impl Into<Uuid>) -> Self {
        Self::with_inner(id, S::default())
    }
}

impl<S> AggregateState<S> {
    /// Creates a new instance of an [`AggregateState`] with the given aggregate id and a custom starting state.
    pub fn with_inner(id: impl Into<Uuid>, inner: S) -> Self {
        Self {
            id: id.into(),
            sequence_number: 0,
            inner,
        }
    }

    /// Consumes the payloads and applies them one by one with the given function, bumping the sequence
    /// number for each of them. Returns the sequence numbers the payloads were assigned.
    pub fn apply_events<E>(
        &mut self,
        events: Vec<E>,
        mut function: impl FnMut(S, E) -> S,
    ) -> Vec<(SequenceNumber, E)>
    where
        S: Default,
        E: Clone,
    {
        let mut applied: Vec<(SequenceNumber, E)> = Vec::with_capacity(events.len());

        for event in events {
            let sequence_number: SequenceNumber = self.next_sequence_number();
            let inner: S = std::mem::take(&mut self.inner);
            self.inner = function(inner, event.clone());
            self.sequence_number = sequence_number;
            applied.push((sequence_number, event));
        }

        applied
    }

    /// Returns an Uuid representing the aggregate id
    pub const fn id(&self) -> &Uuid {
        &self.id
    }

    /// Returns the internal state
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the internal sequence number incremented by 1.
    pub const fn next_sequence_number(&self) -> SequenceNumber {
        self.sequence_number + 1
    }

    /// Returns the internal sequence number
    pub const fn sequence_number(&self) -> &SequenceNumber {
        &self.sequence_number
    }
}
