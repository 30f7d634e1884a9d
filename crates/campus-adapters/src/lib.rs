//! campus-adapters: Capa de adaptación entre el mundo exterior y el core.
//!
//! Este crate provee:
//! - Procesamiento de los datos de muestra empaquetados (seed) hacia los
//!   tipos de dominio, con el reloj fijo del prototipo.
//! - `CampusDataStore`: el almacén de presentación de toda la aplicación,
//!   que implementa el `EventStore` del core y agrega las colecciones
//!   auxiliares (hilos de mensajes, amigos, edificios).
//! - Configuración de UI desde variables de entorno.
//! - Helpers puros de ubicaciones (opciones y validación) compartidos por
//!   las vistas.

pub mod config;
pub mod locations;
pub mod seed;
pub mod store;

pub use config::UiConfig;
pub use locations::{build_location_choices, validate_location_value, LocationChoice, LocationValidation};
pub use seed::{fixed_now, seed_clock, SeedData, SeedError};
pub use store::CampusDataStore;
