use serde::{Deserialize, Serialize};

/// Amigo disponible en el selector de invitados del modal de eventos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub status: String,
}
