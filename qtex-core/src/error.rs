//! Tipos de erro para qtex-core

use thiserror::Error;

use crate::renderer::KernelId;
use crate::surface::SurfaceFormat;

/// Resultado customizado para operações de pipeline
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Erros síncronos levantados antes de qualquer célula ser escrita
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid control mask: value {value:#x} has bits outside mask {mask:#x}")]
    InvalidControlMask { mask: u64, value: u64 },

    #[error("Unsupported surface format: expected {expected:?}, got {actual:?}")]
    UnsupportedSurfaceFormat {
        expected: SurfaceFormat,
        actual: SurfaceFormat,
    },

    #[error("Kernel {kernel} failed to compile: {reason}")]
    KernelCompile { kernel: KernelId, reason: String },

    #[error("Thread pool: {0}")]
    ThreadPool(String),
}

impl PipelineError {
    pub(crate) fn shape(detail: impl Into<String>) -> Self {
        Self::ShapeMismatch(detail.into())
    }
}
