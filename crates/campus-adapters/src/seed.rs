//! Procesamiento de los datos de muestra empaquetados.
//!
//! Transforma los payloads crudos del dataset del prototipo en tipos de
//! dominio. Las funciones asumen lo mínimo: los campos de fecha de los
//! eventos vienen por partes (año/mes/día/hora) y los timestamps de los
//! mensajes son offsets en milisegundos relativos al reloj fijo del
//! prototipo.

use campus_domain::{BuildingMap, DirectThread, Event, Friend, ThreadMessage};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

// EL PROTOTIPO CONGELA LA FECHA AL 6 DE OCTUBRE DE 2025 (9:00 para los
// offsets del seed, 9:30 como "ahora" de los formularios), igual que el
// prototipo vertical original.
static SEED_CLOCK: Lazy<NaiveDateTime> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2025, 10, 6).unwrap().and_hms_opt(9, 0, 0).unwrap());
static FIXED_NOW: Lazy<NaiveDateTime> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2025, 10, 6).unwrap().and_hms_opt(9, 30, 0).unwrap());

/// Reloj base para los offsets del dataset.
pub fn seed_clock() -> NaiveDateTime {
    *SEED_CLOCK
}

/// "Ahora" fijo que usan los valores por defecto de los formularios.
pub fn fixed_now() -> NaiveDateTime {
    *FIXED_NOW
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed json: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("seed event {index}: invalid date parts")]
    BadDate { index: usize },
    #[error("seed event {index}: {reason}")]
    InvalidEvent { index: usize, reason: String },
}

/// Evento del dataset, con la fecha por partes. El campo `month` es base 0
/// (herencia del prototipo); aquí se corrige al construir la fecha.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventSeed {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    pub emoji: String,
    pub name: String,
    pub location: String,
    pub invite: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawThreadMessageSeed {
    pub author: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event: Option<serde_json::Value>,
    pub timestamp_offset: i64,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub response_time_offset: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawThreadSeed {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub avatar: String,
    pub status: String,
    pub members: Vec<String>,
    pub last_message: String,
    pub last_message_time_offset: i64,
    pub messages: Vec<RawThreadMessageSeed>,
}

fn seed_date(index: usize, year: i32, month0: u32, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime, SeedError> {
    NaiveDate::from_ymd_opt(year, month0 + 1, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .ok_or(SeedError::BadDate { index })
}

/// Convierte los eventos del dataset al formato de la colección. Los ids
/// asignados son estables por posición (`sample_evt_{index}`).
pub fn events_from_seed(seeds: &[RawEventSeed]) -> Result<Vec<Event>, SeedError> {
    seeds
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let start = seed_date(index, seed.year, seed.month, seed.day, seed.start_hour, seed.start_minute)?;
            let end = seed_date(index, seed.year, seed.month, seed.day, seed.end_hour, seed.end_minute)?;
            Event::new(
                &format!("sample_evt_{}", index),
                &seed.name,
                &seed.emoji,
                start,
                end,
                &seed.location,
                &seed.description,
                &seed.invite,
            )
            .map_err(|e| SeedError::InvalidEvent { index, reason: e.to_string() })
        })
        .collect()
}

/// Convierte los hilos de DMs resolviendo offsets contra el reloj fijo.
pub fn threads_from_seed(seeds: &[RawThreadSeed]) -> Vec<DirectThread> {
    let now = seed_clock();

    seeds
        .iter()
        .map(|dm| {
            let messages = dm
                .messages
                .iter()
                .map(|message| ThreadMessage {
                    author: message.author.clone(),
                    text: message.text.clone(),
                    kind: message.kind.clone(),
                    event_id: message.event_id.clone(),
                    event: message.event.clone(),
                    timestamp: now + Duration::milliseconds(message.timestamp_offset),
                    response: message.response.clone(),
                    response_time: message.response_time_offset.map(|offset| now + Duration::milliseconds(offset)),
                })
                .collect();

            DirectThread {
                id: dm.id.clone(),
                name: dm.name.clone(),
                kind: dm.kind.clone(),
                avatar: dm.avatar.clone(),
                status: dm.status.clone(),
                members: dm.members.clone(),
                last_message: dm.last_message.clone(),
                last_message_time: now + Duration::milliseconds(dm.last_message_time_offset),
                messages,
            }
        })
        .collect()
}

/// Colecciones iniciales ya convertidas a tipos de dominio.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub events: Vec<Event>,
    pub threads: Vec<DirectThread>,
    pub friends: Vec<Friend>,
    pub buildings: BuildingMap,
}

/// Carga el dataset empaquetado en el crate (assets/).
pub fn load_bundled() -> Result<SeedData, SeedError> {
    let raw_events: Vec<RawEventSeed> = serde_json::from_str(include_str!("../assets/sample-events.json"))?;
    let raw_threads: Vec<RawThreadSeed> = serde_json::from_str(include_str!("../assets/sample-messages.json"))?;
    let friends: Vec<Friend> = serde_json::from_str(include_str!("../assets/sample-friends.json"))?;
    // los edificios y amigos ya vienen en el formato esperado
    let buildings: BuildingMap = serde_json::from_str(include_str!("../assets/sample-buildings.json"))?;

    Ok(SeedData {
        events: events_from_seed(&raw_events)?,
        threads: threads_from_seed(&raw_threads),
        friends,
        buildings,
    })
}
