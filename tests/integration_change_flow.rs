use campus_adapters::{build_location_choices, validate_location_value, CampusDataStore};
use campus_core::{ChangeCoordinator, EventStore, NullNotifier, ViewContext};
use campus_domain::{new_event_id, Event};
use chrono::Duration;
use std::cell::RefCell;
use std::rc::Rc;

fn seeded_coordinator() -> ChangeCoordinator<CampusDataStore, NullNotifier> {
    let store = CampusDataStore::with_bundled_seed().expect("bundled seed should load");
    ChangeCoordinator::new(store, NullNotifier)
}

#[test]
fn view_snapshot_stays_consistent_through_change_and_undo() {
    let mut coordinator = seeded_coordinator();
    let base = coordinator.events().len();

    // vista simulada: mantiene su propia copia de la colección vía callbacks
    let calendar_view: Rc<RefCell<Vec<Event>>> = Rc::new(RefCell::new(coordinator.events()));

    let start = campus_adapters::fixed_now();
    let created = Event::new(&new_event_id(), "Coffee Chat", "☕", start, start + Duration::hours(1), "Student Center", "", "Alice").unwrap();

    let on_change = calendar_view.clone();
    let on_undo = calendar_view.clone();
    coordinator.create_event(
        "calendar",
        created.clone(),
        ViewContext::new()
            .on_change(move |events, _| *on_change.borrow_mut() = events.to_vec())
            .on_undo(move |events, _| *on_undo.borrow_mut() = events.to_vec()),
    );

    // la vista vio la colección nueva, igual a la del store
    assert_eq!(calendar_view.borrow().len(), base + 1);
    assert_eq!(*calendar_view.borrow(), coordinator.events());

    coordinator.undo_last_change();
    assert_eq!(calendar_view.borrow().len(), base);
    assert_eq!(*calendar_view.borrow(), coordinator.events());
}

#[test]
fn undo_after_two_views_mutate_reverts_only_the_last_change() {
    let mut coordinator = seeded_coordinator();
    let original_first = coordinator.events()[0].clone();

    // el mapa crea un evento nuevo
    let start = campus_adapters::fixed_now();
    let from_map = Event::new(&new_event_id(), "Club Meetup", "🎲", start, start + Duration::hours(2), "Game Room, Student Center", "", "").unwrap();
    coordinator.create_event("map", from_map.clone(), ViewContext::new());

    // después el calendario edita el primer evento de la colección
    let edited = Event::new(original_first.id(), "Renamed", "📚", original_first.start(), original_first.end(), original_first.location(), "", "").unwrap();
    coordinator.edit_event("calendar", original_first.clone(), edited, ViewContext::new());

    // el deshacer revierte solo la edición; el alta del mapa queda
    assert!(coordinator.undo_last_change());
    let events = coordinator.events();
    assert_eq!(events[0], original_first);
    assert!(events.iter().any(|e| e.id() == from_map.id()));

    // y el slot quedó vacío
    assert!(!coordinator.undo_last_change());
}

#[test]
fn store_reflects_new_collection_before_notification_fires() {
    // notificador que captura el tamaño del store en el momento del show
    struct ProbeNotifier {
        seen: Rc<RefCell<Vec<usize>>>,
        store_len: Rc<RefCell<usize>>,
    }
    impl campus_core::Notifier for ProbeNotifier {
        fn show(&mut self, _toast: campus_core::Toast) {
            self.seen.borrow_mut().push(*self.store_len.borrow());
        }
        fn hide(&mut self) {}
    }

    let seen = Rc::new(RefCell::new(Vec::new()));
    let store_len = Rc::new(RefCell::new(0usize));

    let mut coordinator = ChangeCoordinator::new(
        CampusDataStore::new(),
        ProbeNotifier { seen: seen.clone(), store_len: store_len.clone() },
    );

    // el callback de vista corre antes del toast y ve el store ya actualizado
    let len_probe = store_len.clone();
    let start = campus_adapters::fixed_now();
    let created = Event::new("e1", "Standup", "📣", start, start + Duration::minutes(30), "", "", "").unwrap();
    coordinator.create_event(
        "calendar",
        created,
        ViewContext::new().on_change(move |events, _| *len_probe.borrow_mut() = events.len()),
    );

    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn seeded_event_locations_validate_against_building_choices() {
    let store = CampusDataStore::with_bundled_seed().unwrap();
    let choices = build_location_choices(&store.buildings());

    for event in EventStore::events(&store) {
        // las ubicaciones de los eventos de muestra o validan contra el
        // dataset de edificios o son espacios abiertos sin edificio
        let check = validate_location_value(event.location(), &choices);
        if !check.valid {
            assert!(["Main Quad"].contains(&event.location()), "ubicación inesperada: {}", event.location());
        }
    }
}
