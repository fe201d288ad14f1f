//! Configuração carregada de arquivos .env
//!
//! Lê os parâmetros do renderer de `.env` ou de variáveis de ambiente.

use std::env;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// Carrega o .env no primeiro acesso ao módulo
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Garante que o ambiente foi carregado
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Mínimo de células de saída para o renderer CPU rodar em paralelo
/// Padrão: 4096 células (superfície 64×64, 12 qubits)
pub fn parallel_threshold() -> usize {
    ensure_loaded();
    env::var("QTEX_PARALLEL_THRESHOLD")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
}

/// Tamanho de um pool rayon dedicado
/// Padrão: ausente (pool global)
pub fn num_threads() -> Option<usize> {
    ensure_loaded();
    env::var("QTEX_THREADS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n| n > 0)
}

/// Diretiva de filtro do tracing
/// Padrão: "info"
pub fn log_filter() -> String {
    ensure_loaded();
    env::var("QTEX_LOG").unwrap_or_else(|_| "info".to_string())
}

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Valores em cache
pub static PARALLEL_THRESHOLD: Lazy<usize> = Lazy::new(parallel_threshold);
pub static NUM_THREADS: Lazy<Option<usize>> = Lazy::new(num_threads);

/// Configuração do renderer CPU
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Células de saída a partir das quais o mapa roda em paralelo
    pub parallel_threshold: usize,
    /// Pool dedicado (None = pool global do rayon)
    pub num_threads: Option<usize>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            num_threads: None,
        }
    }
}

impl RendererConfig {
    /// Lê a configuração do ambiente (valores em cache)
    pub fn from_env() -> Self {
        Self {
            parallel_threshold: *PARALLEL_THRESHOLD,
            num_threads: *NUM_THREADS,
        }
    }

    /// Sempre serial
    pub fn serial() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            num_threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: RendererConfig = serde_json::from_str(r#"{ "num_threads": 2 }"#).unwrap();
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert_eq!(config.num_threads, Some(2));
    }

    #[test]
    fn test_from_env_is_stable() {
        assert_eq!(RendererConfig::from_env(), RendererConfig::from_env());
    }
}
