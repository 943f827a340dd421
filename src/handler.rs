use std::ops::Deref;

use crate::{Aggregate, EventEnvelope};

/// This trait is used to implement an `EventHandler`. An event handler is intended to be an entity
/// which can update a read side or perform side effects, like writing a report.
///
/// All the errors should be handled from within the `EventHandler` and it shouldn't panic.
pub trait EventHandler<A>
where
    A: Aggregate,
{
    /// Handle an event and perform an action.
    fn handle(&self, event: &EventEnvelope<A::Event>);

    /// The name of the event handler. By default, this is the type name of the event handler,
    /// but it can be overridden to provide a custom name. This name is used as
    /// part of tracing spans, to identify the event handler being run.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<A, Q, T> EventHandler<A> for T
where
    A: Aggregate,
    Q: EventHandler<A> + ?Sized,
    T: Deref<Target = Q>,
{
    /// Deref call to [`EventHandler::handle`].
    fn handle(&self, event: &EventEnvelope<A::Event>) {
        self.deref().handle(event);
    }

    /// Deref call to [`EventHandler::name`].
    fn name(&self) -> &'static str {
        self.deref().name()
    }
}
