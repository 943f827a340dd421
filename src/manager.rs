use crate::{Aggregate, AggregateState, EventEnvelope, EventHandler};

/// The AggregateManager is responsible for coupling the Aggregate with its event handlers, so that every
/// handled command is applied onto the given state and the resulting events are dispatched.
///
/// Nothing is persisted: the caller owns the [`AggregateState`] and the envelopes are handed back to it
/// once every handler has seen them.
pub struct AggregateManager<A>
where
    A: Aggregate,
{
    event_handlers: Vec<Box<dyn EventHandler<A>>>,
}

impl<A> Default for AggregateManager<A>
where
    A: Aggregate,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> AggregateManager<A>
where
    A: Aggregate,
{
    /// Creates a new instance of an [`AggregateManager`] without any handler.
    pub fn new() -> Self {
        Self { event_handlers: vec![] }
    }

    /// Set event handlers list
    pub fn with_event_handlers(mut self, event_handlers: Vec<Box<dyn EventHandler<A>>>) -> Self {
        self.event_handlers = event_handlers;
        self
    }

    /// Add a single event handler
    pub fn add_event_handler(mut self, event_handler: impl EventHandler<A> + 'static) -> Self {
        self.event_handlers.push(Box::new(event_handler));
        self
    }
}

impl<A> AggregateManager<A>
where
    A: Aggregate,
    A::Event: Clone,
{
    /// Validates and handles the command onto the given state, applies the resulting events and passes them to
    /// the event handlers.
    ///
    /// If the command is rejected the state is left untouched and no handler is run.
    #[tracing::instrument(skip_all, fields(aggregate = A::NAME, aggregate_id = %aggregate_state.id()), err)]
    pub fn handle_command(
        &self,
        aggregate_state: &mut AggregateState<A::State>,
        command: A::Command,
    ) -> Result<Vec<EventEnvelope<A::Event>>, A::Error> {
        let events: Vec<A::Event> = A::handle_command(aggregate_state.inner(), command)?;
        let aggregate_id = *aggregate_state.id();

        let envelopes: Vec<EventEnvelope<A::Event>> = aggregate_state
            .apply_events(events, A::apply_event)
            .into_iter()
            .map(|(sequence_number, event)| EventEnvelope::new(aggregate_id, event, sequence_number))
            .collect();

        for envelope in &envelopes {
            for event_handler in &self.event_handlers {
                let span = tracing::debug_span!(
                    "event_handler",
                    event_id = %envelope.id,
                    aggregate_id = %envelope.aggregate_id,
                    event_handler = event_handler.name()
                );
                let _e = span.enter();

                event_handler.handle(envelope);
            }
        }

        Ok(envelopes)
    }
}
