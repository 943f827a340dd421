use banded_account::{AggregateManager, AggregateState, EventHandler};

use crate::aggregate::{SequenceRecorder, TestAggregate, TestAggregateState, TestCommand, TestEventHandler};

#[test]
fn handle_command_test() {
    let manager: AggregateManager<TestAggregate> = AggregateManager::new();
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new();

    manager.handle_command(&mut aggregate_state, TestCommand::Single).unwrap();
    assert_eq!(aggregate_state.inner().count, 2);
    assert_eq!(aggregate_state.sequence_number(), &1);

    manager.handle_command(&mut aggregate_state, TestCommand::Single).unwrap();
    assert_eq!(aggregate_state.inner().count, 3);
    assert_eq!(aggregate_state.sequence_number(), &2);

    manager.handle_command(&mut aggregate_state, TestCommand::Multi).unwrap();
    assert_eq!(aggregate_state.inner().count, 5);
    assert_eq!(aggregate_state.sequence_number(), &4);
}

#[test]
fn event_handlers_see_every_event_in_order() {
    let event_handler = TestEventHandler::default();
    let recorder = SequenceRecorder::default();

    let manager: AggregateManager<TestAggregate> = AggregateManager::new()
        .add_event_handler(event_handler.clone())
        .add_event_handler(recorder.clone());
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new();

    manager.handle_command(&mut aggregate_state, TestCommand::Multi).unwrap();
    manager.handle_command(&mut aggregate_state, TestCommand::Single).unwrap();

    assert_eq!(*event_handler.total.lock().unwrap(), 3);
    assert_eq!(*recorder.sequence_numbers.lock().unwrap(), vec![1, 2, 3]);
    assert_eq!(recorder.name(), "sequence_recorder");
}

#[test]
fn rejected_command_is_not_applied() {
    let event_handler = TestEventHandler::default();
    let manager: AggregateManager<TestAggregate> = AggregateManager::new().add_event_handler(event_handler.clone());
    let mut aggregate_state: AggregateState<TestAggregateState> =
        AggregateState::with_inner(uuid::Uuid::new_v4(), TestAggregateState { count: 0 });

    let result = manager.handle_command(&mut aggregate_state, TestCommand::Reset);

    assert!(result.is_err());
    assert_eq!(aggregate_state.inner().count, 0);
    assert_eq!(aggregate_state.sequence_number(), &0);
    assert_eq!(*event_handler.total.lock().unwrap(), 0);
}

#[test]
fn returned_envelopes_belong_to_the_aggregate() {
    let manager: AggregateManager<TestAggregate> = AggregateManager::new();
    let mut aggregate_state: AggregateState<TestAggregateState> = AggregateState::new();

    let envelopes = manager.handle_command(&mut aggregate_state, TestCommand::Multi).unwrap();

    assert_eq!(envelopes.len(), 2);
    assert!(envelopes.iter().all(|e| &e.aggregate_id == aggregate_state.id()));
    assert_ne!(envelopes[0].id, envelopes[1].id);
    assert_eq!(envelopes[1].sequence_number(), &2);
    assert_eq!(envelopes[1].sequence_number(), aggregate_state.sequence_number());
}
