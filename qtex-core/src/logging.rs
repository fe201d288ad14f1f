//! Inicialização do subscriber de tracing

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Instala o subscriber fmt global filtrado por `QTEX_LOG`.
///
/// Retorna `false` quando já havia um subscriber instalado.
pub fn init_tracing() -> bool {
    if INITIALISED.set(()).is_err() {
        return false;
    }

    let filter = EnvFilter::try_new(crate::config::log_filter())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
