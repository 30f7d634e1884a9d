//! Funciones puras de aplicación de cambios sobre la colección de eventos.
//!
//! Deterministas, sin efectos ni I/O. `apply_undo` satisface la ley de ida
//! y vuelta para las cuatro acciones, con una desviación aceptada: el
//! deshacer de delete reinserta al final, no en la posición original.
//! `create` y el deshacer de delete son las únicas operaciones que alteran
//! el orden (siempre append); el resto lo conserva.

use campus_domain::Event;

use super::ChangeAction;

/// Clasificación del resultado de aplicar un cambio. En los casos `Noop*`
/// la colección devuelta es idéntica a la de entrada; ninguno se presenta
/// al usuario como error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// El id referido no existe en la colección.
    NoopMissingTarget,
    /// Falta el snapshot requerido (p. ej. create sin `after`).
    NoopMissingPayload,
}

// ante ids duplicados (error del llamador) se toca solo la primera ocurrencia
fn position_of(events: &[Event], id: &str) -> Option<usize> {
    events.iter().position(|m| m.id() == id)
}

/// Aplica la acción hacia adelante y devuelve la colección resultante.
///
/// - `create`: agrega `after` al final (`before`, si viene, se ignora).
/// - `edit`: reemplaza el elemento cuyo id coincide con `after.id`.
/// - `delete`: quita el elemento cuyo id coincide con `before.id`.
/// - `reschedule`: sustituye solo `start`/`end` del elemento almacenado,
///   conservando el resto de sus campos (no los de `after`).
pub fn apply_change(
    action: ChangeAction,
    before: Option<&Event>,
    after: Option<&Event>,
    events: &[Event],
) -> (Vec<Event>, ApplyOutcome) {
    let mut current: Vec<Event> = events.to_vec();
    match action {
        ChangeAction::Create => {
            let Some(after) = after else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            current.push(after.clone());
            (current, ApplyOutcome::Applied)
        }
        ChangeAction::Edit => {
            let Some(after) = after else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            match position_of(&current, after.id()) {
                Some(pos) => {
                    current[pos] = after.clone();
                    (current, ApplyOutcome::Applied)
                }
                None => (current, ApplyOutcome::NoopMissingTarget),
            }
        }
        ChangeAction::Delete => {
            let Some(before) = before else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            match position_of(&current, before.id()) {
                Some(pos) => {
                    current.remove(pos);
                    (current, ApplyOutcome::Applied)
                }
                None => (current, ApplyOutcome::NoopMissingTarget),
            }
        }
        ChangeAction::Reschedule => {
            let Some(after) = after else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            match position_of(&current, after.id()) {
                Some(pos) => {
                    current[pos] = current[pos].with_times(after.start(), after.end());
                    (current, ApplyOutcome::Applied)
                }
                None => (current, ApplyOutcome::NoopMissingTarget),
            }
        }
    }
}

/// Inversa de `apply_change` para el mismo triple `(action, before, after)`.
///
/// - `create`: quita el elemento con `after.id`.
/// - `edit`: restaura el snapshot `before`.
/// - `delete`: reinserta `before` al final (desviación aceptada: no se
///   restaura la posición original).
/// - `reschedule`: restaura `start`/`end` desde `before`.
pub fn apply_undo(
    action: ChangeAction,
    before: Option<&Event>,
    after: Option<&Event>,
    events: &[Event],
) -> (Vec<Event>, ApplyOutcome) {
    let mut current: Vec<Event> = events.to_vec();
    match action {
        ChangeAction::Create => {
            let Some(after) = after else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            match position_of(&current, after.id()) {
                Some(pos) => {
                    current.remove(pos);
                    (current, ApplyOutcome::Applied)
                }
                None => (current, ApplyOutcome::NoopMissingTarget),
            }
        }
        ChangeAction::Edit => {
            let Some(before) = before else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            match position_of(&current, before.id()) {
                Some(pos) => {
                    current[pos] = before.clone();
                    (current, ApplyOutcome::Applied)
                }
                None => (current, ApplyOutcome::NoopMissingTarget),
            }
        }
        ChangeAction::Delete => {
            let Some(before) = before else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            current.push(before.clone());
            (current, ApplyOutcome::Applied)
        }
        ChangeAction::Reschedule => {
            let Some(before) = before else {
                return (current, ApplyOutcome::NoopMissingPayload);
            };
            match position_of(&current, before.id()) {
                Some(pos) => {
                    current[pos] = current[pos].with_times(before.start(), before.end());
                    (current, ApplyOutcome::Applied)
                }
                None => (current, ApplyOutcome::NoopMissingTarget),
            }
        }
    }
}
