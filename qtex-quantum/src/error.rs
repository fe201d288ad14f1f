//! Tipos de erro para qtex-quantum

use qtex_core::PipelineError;
use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer no pipeline quântico
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Invalid control mask: value {value:#x} has bits outside mask {mask:#x}")]
    InvalidControlMask { mask: u64, value: u64 },

    #[error("Conflicting controls on qubit {bit}")]
    ConflictingControls { bit: u32 },

    #[error("Qubit {qubit} out of range for a {qubit_count}-qubit surface")]
    QubitOutOfRange { qubit: u32, qubit_count: u32 },

    #[error("Qubit {qubit} used more than once")]
    OverlappingQubits { qubit: u32 },

    #[error("Density matrix must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },
}
