//! campus-core: Núcleo de cambios y deshacer sobre la colección compartida
//! de eventos (crear/editar/borrar/reprogramar + deshacer de un nivel).
pub mod change;
pub mod coordinator;
pub mod notify;
pub mod store;
pub mod view;

pub use change::{apply_change, apply_undo, ApplyOutcome, ChangeAction, ChangeRecord, ChangeRequest};
pub use coordinator::ChangeCoordinator;
pub use notify::{NullNotifier, Notifier, Toast};
pub use store::{EventStore, InMemoryEventStore};
pub use view::ViewContext;
