use std::sync::{Arc, Mutex};

use banded_account::{EventEnvelope, EventHandler};

use crate::aggregate::{TestAggregate, TestEvent};

#[derive(Clone, Default)]
pub struct TestEventHandler {
    pub total: Arc<Mutex<i32>>,
}

impl EventHandler<TestAggregate> for TestEventHandler {
    fn handle(&self, event: &EventEnvelope<TestEvent>) {
        let mut guard = self.total.lock().unwrap();
        *guard += event.payload.add;
    }
}

#[derive(Clone, Default)]
pub struct SequenceRecorder {
    pub sequence_numbers: Arc<Mutex<Vec<i32>>>,
}

impl EventHandler<TestAggregate> for SequenceRecorder {
    fn handle(&self, event: &EventEnvelope<TestEvent>) {
        self.sequence_numbers.lock().unwrap().push(event.sequence_number);
    }

    fn name(&self) -> &'static str {
        "sequence_recorder"
    }
}
