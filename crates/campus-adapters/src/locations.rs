//! Opciones de ubicación y validación de texto libre contra ellas.
//!
//! Helpers puros sobre el dataset de edificios, compartidos por el modal de
//! eventos de todas las vistas: cada edificio aporta una opción propia más
//! una por cada ubicación interior.

use campus_domain::BuildingMap;

/// Opción del dropdown de ubicaciones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationChoice {
    pub label: String,
    pub location_name: String,
    pub building_name: String,
    pub kind: String,
}

/// Resultado de validar una ubicación escrita a mano.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationValidation {
    pub valid: bool,
    pub message: String,
}

impl LocationValidation {
    fn ok() -> Self {
        Self { valid: true, message: String::new() }
    }
}

/// Aplana el mapa de edificios en la lista de opciones, conservando el
/// orden del dataset.
pub fn build_location_choices(buildings: &BuildingMap) -> Vec<LocationChoice> {
    let mut choices = Vec::new();

    for (key, building) in buildings {
        let building_name = if building.name.is_empty() { key.clone() } else { building.name.clone() };

        choices.push(LocationChoice {
            label: building_name.clone(),
            location_name: building_name.clone(),
            building_name: building_name.clone(),
            kind: "building".to_string(),
        });

        for loc in &building.locations {
            choices.push(LocationChoice {
                label: loc.name.clone(),
                location_name: loc.name.clone(),
                building_name: building_name.clone(),
                kind: loc.kind.clone().unwrap_or_else(|| "location".to_string()),
            });
        }
    }

    choices
}

/// Valida una ubicación de texto libre contra las opciones conocidas.
/// Acepta el nombre exacto de una ubicación o edificio, o el formato
/// "ubicación, edificio". Vacío siempre pasa (otros validadores se ocupan).
pub fn validate_location_value(raw_location: &str, choices: &[LocationChoice]) -> LocationValidation {
    let value = raw_location.trim();

    if value.is_empty() {
        return LocationValidation::ok();
    }

    if choices.is_empty() {
        return LocationValidation::ok();
    }

    let lower = value.to_lowercase();

    // admite el formato "[ubicación], [edificio]"
    let (location_part, building_part) = match lower.find(',') {
        Some(comma) => (lower[..comma].trim().to_string(), lower[comma + 1..].trim().to_string()),
        None => (lower.clone(), String::new()),
    };
    let has_comma = lower.contains(',');

    let matched = choices.iter().any(|choice| {
        let loc_name = choice.location_name.to_lowercase();
        let building_name = choice.building_name.to_lowercase();

        if lower == loc_name || lower == building_name {
            return true;
        }

        if has_comma {
            return loc_name == location_part && building_name == building_part;
        }

        false
    });

    if matched {
        return LocationValidation::ok();
    }

    LocationValidation {
        valid: false,
        message: format!("{} is not a valid location. Please choose a location from the list.", raw_location),
    }
}
