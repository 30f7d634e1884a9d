//! Registro por llamada de los callbacks de vista.

use campus_domain::Event;

use crate::change::ChangeRecord;

/// Callback invocado tras aplicar un cambio o su deshacer, con la
/// colección resultante y el registro actuante.
pub type ViewCallback = Box<dyn FnMut(&[Event], &ChangeRecord)>;

/// Par de callbacks opcionales que una vista entrega en cada llamada
/// mutadora. El coordinador retiene solo el registro más reciente: una
/// llamada posterior reemplaza en silencio los hooks de la vista anterior
/// (no es una lista de suscriptores).
#[derive(Default)]
pub struct ViewContext {
    pub apply_after_change: Option<ViewCallback>,
    pub apply_after_undo: Option<ViewCallback>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra el hook post-cambio y devuelve el contexto (estilo builder).
    pub fn on_change(mut self, callback: impl FnMut(&[Event], &ChangeRecord) + 'static) -> Self {
        self.apply_after_change = Some(Box::new(callback));
        self
    }

    /// Registra el hook post-deshacer.
    pub fn on_undo(mut self, callback: impl FnMut(&[Event], &ChangeRecord) + 'static) -> Self {
        self.apply_after_undo = Some(Box::new(callback));
        self
    }
}
