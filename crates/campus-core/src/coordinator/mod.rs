//! Coordinator module for the change/undo orchestrator
//!
//! Provides the stateful coordinator that applies semantic change
//! requests, keeps the single-slot undo record and drives the
//! notification surface and the registered view callbacks.

pub mod core;

pub use core::ChangeCoordinator;

pub use crate::change::{ApplyOutcome, ChangeAction, ChangeRecord, ChangeRequest};
pub use crate::notify::{Notifier, Toast};
pub use crate::store::{EventStore, InMemoryEventStore};
pub use crate::view::ViewContext;

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::Event;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Notificador de prueba que acumula los toasts mostrados
    #[derive(Default)]
    struct RecordingNotifier {
        toasts: Vec<Toast>,
    }

    impl Notifier for RecordingNotifier {
        fn show(&mut self, toast: Toast) {
            self.toasts.push(toast);
        }
        fn hide(&mut self) {}
    }

    fn dt(d: u32, h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    fn sample(id: &str, name: &str) -> Event {
        Event::new(id, name, "📌", dt(6, 9, 0), dt(6, 10, 0), "", "", "").unwrap()
    }

    #[test]
    fn test_create_notifies_and_persists() {
        let mut coordinator = ChangeCoordinator::new(InMemoryEventStore::default(), RecordingNotifier::default());

        let outcome = coordinator.create_event("calendar", sample("e1", "Standup"), ViewContext::new());
        assert_eq!(outcome, ApplyOutcome::Applied);
        assert_eq!(coordinator.events().len(), 1);

        // El toast ofrece deshacer y lleva el mensaje de alta
        let toast = coordinator.notifier().toasts.last().unwrap();
        assert_eq!(toast.message, "Event created");
        assert!(toast.offers_undo);
    }

    #[test]
    fn test_view_callback_receives_updated_collection() {
        let mut coordinator = ChangeCoordinator::new(InMemoryEventStore::default(), RecordingNotifier::default());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_callback = seen.clone();
        let view = ViewContext::new().on_change(move |events, record| {
            assert_eq!(record.action, ChangeAction::Create);
            seen_by_callback.borrow_mut().push(events.len());
        });

        coordinator.create_event("map", sample("e1", "Standup"), view);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_reschedule_invite_falls_back_to_before() {
        let mut coordinator = ChangeCoordinator::new(InMemoryEventStore::default(), RecordingNotifier::default());

        let before = Event::new("e1", "Standup", "📌", dt(6, 9, 0), dt(6, 10, 0), "", "", "Alice").unwrap();
        coordinator.create_event("calendar", before.clone(), ViewContext::new());

        // after sin invitados: la notificación usa los de before
        let after = Event::new("e1", "Standup", "📌", dt(7, 9, 0), dt(7, 10, 0), "", "", "").unwrap();
        coordinator.reschedule_event("calendar", before, after, ViewContext::new());

        let toast = coordinator.notifier().toasts.last().unwrap();
        assert_eq!(toast.invite, "Alice");
    }
}
