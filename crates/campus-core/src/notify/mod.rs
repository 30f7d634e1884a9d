//! Superficie de notificación (snackbar) y sus textos.

pub mod text;

/// Payload que el coordinador entrega a la superficie de notificación.
///
/// `offers_undo` indica si la superficie debe ofrecer el botón Deshacer; al
/// pulsarlo, la superficie invoca `ChangeCoordinator::undo_last_change`,
/// que siempre opera sobre el registro escrito justo antes de mostrarse el
/// toast. El auto-descarte temporizado es responsabilidad de la
/// implementación concreta, no del core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub invite: String,
    pub offers_undo: bool,
}

/// Colaborador externo que muestra confirmaciones de cambio con opción de
/// deshacer. Nunca se usa para reportar errores.
pub trait Notifier {
    fn show(&mut self, toast: Toast);
    fn hide(&mut self);
}

/// Implementación nula para tests y ejecución sin UI.
#[derive(Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn show(&mut self, _toast: Toast) {}
    fn hide(&mut self) {}
}
