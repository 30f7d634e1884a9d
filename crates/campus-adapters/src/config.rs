//! Carga de configuración de UI desde variables de entorno.
//! Convención `SNACKBAR_AUTO_HIDE_MS`, con el default del prototipo.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Milisegundos hasta el auto-descarte del snackbar.
    pub snackbar_auto_hide_ms: u64,
}

impl UiConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let snackbar_auto_hide_ms = env::var("SNACKBAR_AUTO_HIDE_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(10_000);
        Self { snackbar_auto_hide_ms }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
