//! Core ChangeCoordinator implementation

use campus_domain::Event;

use crate::change::{apply_change, apply_undo, ApplyOutcome, ChangeAction, ChangeRecord, ChangeRequest};
use crate::notify::{text, Notifier, Toast};
use crate::store::EventStore;
use crate::view::ViewContext;

/// Orquestador de cambios sobre la colección compartida de eventos.
///
/// Responsable de aplicar la petición semántica vía las funciones puras de
/// `change::apply`, persistir el resultado en el store inyectado, registrar
/// el cambio en el slot único de deshacer y notificar a la vista registrada
/// y a la superficie de notificación, en ese orden.
pub struct ChangeCoordinator<S, N>
where
    S: EventStore,
    N: Notifier,
{
    store: S,
    notifier: N,
    view_context: ViewContext,
}

impl<S, N> ChangeCoordinator<S, N>
where
    S: EventStore,
    N: Notifier,
{
    /// Crea un coordinador con el store y el notificador inyectados. No hay
    /// estado global: quien compone la aplicación es dueño de la instancia.
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier, view_context: ViewContext::new() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Copia de la colección actual de eventos.
    pub fn events(&self) -> Vec<Event> {
        self.store.events()
    }

    /// Aplica una petición de cambio y muestra el snackbar con Deshacer.
    ///
    /// Garantías: al retornar hay exactamente un `ChangeRecord` vivo (el de
    /// esta llamada, que sobreescribe cualquier anterior) y el store ya
    /// refleja la colección nueva cuando se dispara la notificación, por lo
    /// que un deshacer desde el toast siempre opera sobre este registro.
    pub fn apply_change(&mut self, request: ChangeRequest, view: ViewContext) -> ApplyOutcome {
        let ChangeRequest { action, before, after, invite, source } = request;

        let events = self.store.events();
        let (updated, outcome) = apply_change(action, before.as_ref(), after.as_ref(), &events);

        self.store.set_events(updated.clone());

        let record = ChangeRecord { action, before, after, source };
        self.store.set_last_change(record.clone());
        self.view_context = view;

        if let Some(callback) = self.view_context.apply_after_change.as_mut() {
            callback(&updated, &record);
        }

        let message = text::snackbar_message(action, record.after.as_ref());
        self.notifier.show(Toast { message, invite, offers_undo: true });

        outcome
    }

    /// Deshace el último cambio registrado y notifica sin ofrecer deshacer
    /// (deshacer no es a su vez deshacible). Sin registro pendiente es un
    /// no-op silencioso que devuelve `false`: deshacer dos veces seguidas,
    /// o tras un arranque limpio, no tiene ningún efecto observable.
    pub fn undo_last_change(&mut self) -> bool {
        let Some(record) = self.store.last_change() else {
            return false;
        };

        let events = self.store.events();
        let (reverted, _outcome) = apply_undo(record.action, record.before.as_ref(), record.after.as_ref(), &events);

        self.store.set_events(reverted.clone());

        if let Some(callback) = self.view_context.apply_after_undo.as_mut() {
            callback(&reverted, &record);
        }

        self.store.clear_last_change();
        self.view_context = ViewContext::new();

        self.notifier.show(Toast { message: text::UNDO_MESSAGE.to_string(), invite: String::new(), offers_undo: false });

        true
    }

    // los cuatro wrappers solo moldean argumentos; no agregan contrato

    /// Alta de un evento nuevo creado desde una vista.
    pub fn create_event(&mut self, source: &str, data: Event, view: ViewContext) -> ApplyOutcome {
        let invite = data.invite().to_string();
        self.apply_change(
            ChangeRequest {
                action: ChangeAction::Create,
                before: None,
                after: Some(data),
                invite,
                source: Some(source.to_string()),
            },
            view,
        )
    }

    /// Edición completa: reemplaza el evento almacenado por `after`.
    pub fn edit_event(&mut self, source: &str, before: Event, after: Event, view: ViewContext) -> ApplyOutcome {
        let invite = after.invite().to_string();
        self.apply_change(
            ChangeRequest {
                action: ChangeAction::Edit,
                before: Some(before),
                after: Some(after),
                invite,
                source: Some(source.to_string()),
            },
            view,
        )
    }

    /// Baja del evento `before`.
    pub fn delete_event(&mut self, source: &str, before: Event, view: ViewContext) -> ApplyOutcome {
        let invite = before.invite().to_string();
        self.apply_change(
            ChangeRequest {
                action: ChangeAction::Delete,
                before: Some(before),
                after: None,
                invite,
                source: Some(source.to_string()),
            },
            view,
        )
    }

    /// Reprogramación: solo cambian `start`/`end`. Los invitados del toast
    /// salen de `after` y, si está vacío, de `before`.
    pub fn reschedule_event(&mut self, source: &str, before: Event, after: Event, view: ViewContext) -> ApplyOutcome {
        let invite = if after.invite().is_empty() { before.invite().to_string() } else { after.invite().to_string() };
        self.apply_change(
            ChangeRequest {
                action: ChangeAction::Reschedule,
                before: Some(before),
                after: Some(after),
                invite,
                source: Some(source.to_string()),
            },
            view,
        )
    }
}
