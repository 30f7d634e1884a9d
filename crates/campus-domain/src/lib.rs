// campus-domain library entry point
pub mod event;
pub mod thread;
pub mod friend;
pub mod building;
pub mod error;
pub use event::{new_event_id, Event};
pub use thread::{DirectThread, ThreadMessage};
pub use friend::Friend;
pub use building::{Building, BuildingLocation, BuildingMap};
pub use error::DomainError;
