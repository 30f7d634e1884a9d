use campus_domain::{new_event_id, Building, BuildingLocation, BuildingMap, Event};
use chrono::NaiveDate;

fn dt(d: u32, h: u32, m: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap().and_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_event_title_composition() {
    // Title is always "{emoji} {name}"
    let ev = Event::new("e1", "Standup", "📣", dt(6, 9, 0), dt(6, 9, 30), "", "", "").unwrap();
    assert_eq!(ev.title(), "📣 Standup");
    assert_eq!(ev.name(), "Standup");
    assert_eq!(ev.emoji(), "📣");
}

#[test]
fn test_event_rejects_empty_id() {
    let res = Event::new("  ", "Standup", "📣", dt(6, 9, 0), dt(6, 9, 30), "", "", "");
    assert!(res.is_err());
}

#[test]
fn test_event_rejects_empty_name() {
    let res = Event::new("e1", "", "📣", dt(6, 9, 0), dt(6, 9, 30), "", "", "");
    assert!(res.is_err());
}

#[test]
fn test_event_rejects_inverted_time_range() {
    // end must be strictly after start
    let res = Event::new("e1", "Standup", "📣", dt(6, 10, 0), dt(6, 9, 0), "", "", "");
    assert!(res.is_err());
    let res = Event::new("e1", "Standup", "📣", dt(6, 9, 0), dt(6, 9, 0), "", "", "");
    assert!(res.is_err());
}

#[test]
fn test_with_times_preserves_other_fields() {
    let ev = Event::new("e2", "Lunch", "🍜", dt(6, 12, 0), dt(6, 13, 0), "Cafe", "team lunch", "Alice, Bob").unwrap();
    let moved = ev.with_times(dt(7, 12, 0), dt(7, 13, 0));
    assert_eq!(moved.id(), "e2");
    assert_eq!(moved.location(), "Cafe");
    assert_eq!(moved.description(), "team lunch");
    assert_eq!(moved.invite(), "Alice, Bob");
    assert_eq!(moved.title(), ev.title());
    assert_eq!(moved.start(), dt(7, 12, 0));
    assert_eq!(moved.end(), dt(7, 13, 0));
}

#[test]
fn test_new_event_id_shape() {
    let id = new_event_id();
    assert!(id.starts_with("evt_"));
    assert_eq!(id.len(), "evt_".len() + 8);
    // Two generated ids should not collide
    assert_ne!(id, new_event_id());
}

#[test]
fn test_building_map_preserves_insertion_order() {
    let mut map = BuildingMap::new();
    for name in ["Science Hall", "Library", "Student Center"] {
        map.insert(
            name.to_string(),
            Building {
                name: name.to_string(),
                address: None,
                closing_time: None,
                image: None,
                locations: vec![BuildingLocation { name: format!("{} Lobby", name), kind: Some("lobby".to_string()) }],
            },
        );
    }
    let keys: Vec<String> = map.keys().cloned().collect();
    assert_eq!(keys, vec!["Science Hall", "Library", "Student Center"]);
}
