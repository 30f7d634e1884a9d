use campus_adapters::{build_location_choices, validate_location_value, CampusDataStore, UiConfig};
use campus_core::notify::text::format_invitee_notification;
use campus_core::{ChangeCoordinator, Notifier, Toast, ViewContext};
use campus_domain::{new_event_id, Event};

/// Snackbar de terminal: imprime cada toast como lo mostraría la UI, con la
/// línea de invitados notificados y el botón Deshacer cuando corresponde.
struct TerminalSnackbar {
    auto_hide_ms: u64,
}

impl TerminalSnackbar {
    fn from_env() -> Self {
        Self { auto_hide_ms: UiConfig::from_env().snackbar_auto_hide_ms }
    }
}

impl Notifier for TerminalSnackbar {
    fn show(&mut self, toast: Toast) {
        let mut line = format!("[snackbar] {}", toast.message);
        let invited = format_invitee_notification(&toast.invite);
        if !invited.is_empty() {
            line.push_str(&format!(" | {}", invited));
        }
        if toast.offers_undo {
            line.push_str(" | [Undo]");
        }
        println!("{} (auto-hide {} ms)", line, self.auto_hide_ms);
    }

    fn hide(&mut self) {
        println!("[snackbar] (oculto)");
    }
}

fn seeded_coordinator() -> ChangeCoordinator<CampusDataStore, TerminalSnackbar> {
    let store = CampusDataStore::with_bundled_seed().expect("el seed empaquetado debe cargar");
    ChangeCoordinator::new(store, TerminalSnackbar::from_env())
}

/// Validación: el seed empaquetado carga todas las colecciones.
fn run_seed_validation() {
    let store = CampusDataStore::with_bundled_seed().expect("el seed empaquetado debe cargar");
    let events = campus_core::EventStore::events(&store);
    assert!(!events.is_empty(), "seed: debe haber eventos de muestra");
    assert!(!store.threads().is_empty(), "seed: debe haber hilos de DMs");
    assert!(!store.friends().is_empty(), "seed: debe haber amigos");
    assert!(!store.buildings().is_empty(), "seed: debe haber edificios");
    println!("seed: {} eventos, {} hilos, {} amigos, {} edificios",
             events.len(),
             store.threads().len(),
             store.friends().len(),
             store.buildings().len());
}

/// Validación: alta de un evento nuevo y deshacer de un solo nivel.
fn run_create_undo_validation() {
    let mut coordinator = seeded_coordinator();
    let base = coordinator.events().len();

    let start = campus_adapters::fixed_now();
    let end = start + chrono::Duration::hours(1);
    let created = Event::new(&new_event_id(), "Coffee Chat", "☕", start, end, "Student Center", "", "Alice").unwrap();

    coordinator.create_event("map", created, ViewContext::new());
    assert_eq!(coordinator.events().len(), base + 1, "create: debe agregar al final");

    assert!(coordinator.undo_last_change(), "undo: debe revertir el alta");
    assert_eq!(coordinator.events().len(), base);

    // deshacer sin registro pendiente es un no-op silencioso
    assert!(!coordinator.undo_last_change(), "undo doble: no-op");
    println!("create/undo: OK");
}

/// Validación: reprogramar conserva el resto de campos del evento.
fn run_reschedule_validation() {
    let mut coordinator = seeded_coordinator();
    let before = coordinator.events()[0].clone();

    let after = before.with_times(before.start() + chrono::Duration::days(1), before.end() + chrono::Duration::days(1));
    coordinator.reschedule_event("calendar", before.clone(), after, ViewContext::new());

    let stored = coordinator.events()[0].clone();
    assert_eq!(stored.start(), before.start() + chrono::Duration::days(1));
    assert_eq!(stored.location(), before.location(), "reschedule: location intacta");
    assert_eq!(stored.title(), before.title(), "reschedule: title intacto");
    println!("reschedule: OK");
}

/// Validación: borrar y deshacer reinserta al final de la colección.
fn run_delete_restore_validation() {
    let mut coordinator = seeded_coordinator();
    let victim = coordinator.events()[1].clone();
    let base = coordinator.events().len();

    coordinator.delete_event("calendar", victim.clone(), ViewContext::new());
    assert_eq!(coordinator.events().len(), base - 1);

    assert!(coordinator.undo_last_change());
    let restored = coordinator.events();
    assert_eq!(restored.len(), base);
    assert_eq!(restored.last().unwrap().id(), victim.id(), "undo delete: reinserta al final");
    println!("delete/restore: OK");
}

/// Validación: opciones de ubicación y validación de texto libre.
fn run_location_validation() {
    let store = CampusDataStore::with_bundled_seed().unwrap();
    let choices = build_location_choices(&store.buildings());
    assert!(!choices.is_empty());

    assert!(validate_location_value("Library", &choices).valid);
    assert!(!validate_location_value("Moon Base", &choices).valid);
    println!("locations: {} opciones, validación OK", choices.len());
}

fn main() {
    campus_adapters::config::init_dotenv();
    println!("== campusflow main-core: validaciones ==");

    run_seed_validation();
    run_create_undo_validation();
    run_reschedule_validation();
    run_delete_restore_validation();
    run_location_validation();

    println!("Validaciones completadas OK");
}
