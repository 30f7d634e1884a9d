use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Mensaje individual dentro de un hilo de DMs. Los mensajes de tipo
/// invitación llevan el id del evento y una copia del payload del evento
/// tal como lo renderiza la página de mensajes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    pub author: String,
    pub text: String,
    pub kind: Option<String>,
    pub event_id: Option<String>,
    pub event: Option<serde_json::Value>,
    pub timestamp: NaiveDateTime,
    pub response: Option<String>,
    pub response_time: Option<NaiveDateTime>,
}

/// Conversación directa (usuario o grupo) de la página de mensajes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectThread {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub avatar: String,
    pub status: String,
    pub members: Vec<String>,
    pub last_message: String,
    pub last_message_time: NaiveDateTime,
    pub messages: Vec<ThreadMessage>,
}
