use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Punto de interés dentro de un edificio (aula, laboratorio, cafetería).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingLocation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Edificio del campus con los datos que muestra el sidebar del mapa.
/// Los nombres serializados siguen el dataset original (camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub name: String,
    pub address: Option<String>,
    pub closing_time: Option<String>,
    pub image: Option<String>,
    pub locations: Vec<BuildingLocation>,
}

/// Colección de edificios indexada por nombre. Se usa IndexMap para
/// conservar el orden de inserción del dataset al poblar dropdowns.
pub type BuildingMap = IndexMap<String, Building>;
