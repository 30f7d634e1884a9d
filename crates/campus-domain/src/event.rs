use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;
use std::fmt;

/// Evento agendado: la entidad central que comparten mapa, calendario y
/// mensajes. El `title` se compone siempre como "{emoji} {name}".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    title: String,
    name: String,
    emoji: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    location: String,
    description: String,
    invite: String,
}

impl Event {
    /// Constructor validante. El orden temporal (end > start) se controla
    /// aquí porque este es el borde equivalente al formulario de la UI; el
    /// coordinador nunca vuelve a validar.
    pub fn new(
        id: &str,
        name: &str,
        emoji: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: &str,
        description: &str,
        invite: &str,
    ) -> Result<Self, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError("event id must not be empty".to_string()));
        }
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("event name must not be empty".to_string()));
        }
        if end <= start {
            return Err(DomainError::ValidationError("event end must be after start".to_string()));
        }
        Ok(Event {
            id: id.to_string(),
            title: format!("{} {}", emoji, name),
            name: name.to_string(),
            emoji: emoji.to_string(),
            start,
            end,
            location: location.to_string(),
            description: description.to_string(),
            invite: invite.to_string(),
        })
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn name(&self) -> &str { &self.name }
    pub fn emoji(&self) -> &str { &self.emoji }
    pub fn start(&self) -> NaiveDateTime { self.start }
    pub fn end(&self) -> NaiveDateTime { self.end }
    pub fn location(&self) -> &str { &self.location }
    pub fn description(&self) -> &str { &self.description }
    pub fn invite(&self) -> &str { &self.invite }

    /// Copia del evento con nuevas horas; todo el resto de campos queda
    /// intacto. Lo usa la operación reschedule, que por contrato conserva
    /// los campos del elemento almacenado.
    pub fn with_times(&self, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event { start, end, ..self.clone() }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<event {}: {}>", self.id, self.title)
    }
}

/// Genera un id de evento con prefijo `evt_` y sufijo aleatorio corto.
pub fn new_event_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("evt_{}", &suffix[..8])
}
