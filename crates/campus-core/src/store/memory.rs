use campus_domain::Event;

use super::EventStore;
use crate::change::ChangeRecord;

/// Almacén en memoria de proceso: la colección vive lo que vive la sesión.
pub struct InMemoryEventStore {
    pub events: Vec<Event>,
    pub last_change: Option<ChangeRecord>,
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self { events: Vec::new(), last_change: None }
    }
}

impl EventStore for InMemoryEventStore {
    fn events(&self) -> Vec<Event> {
        self.events.clone()
    }
    fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }
    fn last_change(&self) -> Option<ChangeRecord> {
        self.last_change.clone()
    }
    fn set_last_change(&mut self, record: ChangeRecord) {
        self.last_change = Some(record);
    }
    fn clear_last_change(&mut self) {
        self.last_change = None;
    }
}
