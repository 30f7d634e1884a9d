//! Almacén de presentación de toda la aplicación.
//!
//! Equivalente al almacén global del prototipo: sobrevive a los cambios de
//! página pero se reinicia con el proceso. Implementa el `EventStore` del
//! core con paridad exacta respecto al backend en memoria y agrega las
//! colecciones auxiliares que consumen las vistas (hilos de mensajes,
//! amigos, edificios). Lecturas y escrituras trabajan sobre copias para
//! que ningún llamador pueda aliasar el estado interno.

use campus_core::{ChangeRecord, EventStore};
use campus_domain::{BuildingMap, DirectThread, Event, Friend};
use log::debug;

use crate::seed::{load_bundled, SeedError};

#[derive(Default)]
pub struct CampusDataStore {
    events: Vec<Event>,
    threads: Vec<DirectThread>,
    friends: Vec<Friend>,
    buildings: BuildingMap,
    last_change: Option<ChangeRecord>,
}

impl CampusDataStore {
    /// Almacén vacío (sin datos de muestra).
    pub fn new() -> Self {
        Self::default()
    }

    /// Almacén poblado con el dataset empaquetado.
    pub fn with_bundled_seed() -> Result<Self, SeedError> {
        let seed = load_bundled()?;
        debug!(
            "seed cargado: {} eventos, {} hilos, {} amigos, {} edificios",
            seed.events.len(),
            seed.threads.len(),
            seed.friends.len(),
            seed.buildings.len()
        );
        Ok(Self {
            events: seed.events,
            threads: seed.threads,
            friends: seed.friends,
            buildings: seed.buildings,
            last_change: None,
        })
    }

    pub fn threads(&self) -> Vec<DirectThread> {
        self.threads.clone()
    }

    pub fn set_threads(&mut self, threads: Vec<DirectThread>) {
        self.threads = threads;
    }

    pub fn friends(&self) -> Vec<Friend> {
        self.friends.clone()
    }

    pub fn buildings(&self) -> BuildingMap {
        self.buildings.clone()
    }
}

impl EventStore for CampusDataStore {
    fn events(&self) -> Vec<Event> {
        self.events.clone()
    }
    fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }
    fn last_change(&self) -> Option<ChangeRecord> {
        self.last_change.clone()
    }
    fn set_last_change(&mut self, record: ChangeRecord) {
        self.last_change = Some(record);
    }
    fn clear_last_change(&mut self) {
        self.last_change = None;
    }
}
