//! Tipos de cambio y funciones de aplicación (directa e inversa).

mod types;
mod apply;

pub use types::{ChangeAction, ChangeRecord, ChangeRequest};
pub use apply::{apply_change, apply_undo, ApplyOutcome};
