//! Tipos del registro de cambios: acción semántica, registro para deshacer
//! y petición tal como la entregan las vistas.
//!
//! Rol en el flujo:
//! - Toda mutación de la colección de eventos llega como `ChangeRequest`.
//! - El coordinador construye un `ChangeRecord` por cada cambio aplicado;
//!   es el único registro retenido (deshacer de un solo nivel), y el
//!   siguiente cambio lo sobreescribe.
use campus_domain::Event;
use serde::{Deserialize, Serialize};

/// Acciones semánticas soportadas sobre la colección de eventos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Edit,
    Delete,
    Reschedule,
}

/// Registro del último cambio aplicado. `before` y `after` son snapshots
/// completos del evento (ausentes en create/delete respectivamente);
/// `source` nombra la vista de origen, solo con fines de diagnóstico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub action: ChangeAction,
    pub before: Option<Event>,
    pub after: Option<Event>,
    pub source: Option<String>,
}

/// Petición de cambio entregada por una vista. `invite` es la lista de
/// invitados ya unida por comas que mostrará la notificación.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub action: ChangeAction,
    pub before: Option<Event>,
    pub after: Option<Event>,
    pub invite: String,
    pub source: Option<String>,
}
