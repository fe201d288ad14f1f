//! # ⚛️ qtex-quantum: Registrador quântico em superfícies
//!
//! API tipada do pipeline: máscaras de controle, operações de um qubit,
//! swap, probabilidades condicionais e matrizes densidade, todas executadas
//! como kernels por célula num [`Renderer`](qtex_core::Renderer).
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumKernels<R: Renderer>            │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  ControlMask → superfície de controle     │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Matrix2x2 / Operation → QubitOperation   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  SurfacePair → reduções em vários passos  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use num_complex::Complex32;
//! use qtex_core::Surface;
//! use qtex_quantum::{ControlMask, Matrix2x2, QuantumKernels};
//!
//! let qk = QuantumKernels::cpu();
//! let mut state = Surface::new(2, 1).unwrap();
//! let mut control = Surface::new(2, 1).unwrap();
//! let mut out = Surface::new(2, 1).unwrap();
//!
//! qk.fill_classical_state(&mut state, 0).unwrap();
//! qk.build_mask(&mut control, ControlMask::NO_CONTROLS).unwrap();
//!
//! let one = Complex32::new(1.0, 0.0);
//! let zero = Complex32::new(0.0, 0.0);
//! let not = Matrix2x2::new(zero, one, one, zero);
//! qk.apply_qubit_operation(&mut out, &state, &not, 0, &control).unwrap();
//!
//! assert_eq!(out.cell(1), Some([1.0, 0.0, 0.0, 0.0]));
//! ```

pub mod buffers;
pub mod control;
pub mod density;
pub mod error;
pub mod kernels;
pub mod matrix;

pub use buffers::SurfacePair;
pub use control::ControlMask;
pub use density::DensityMatrix;
pub use error::{QuantumError, QuantumResult};
pub use kernels::QuantumKernels;
pub use matrix::{GateMatrix, Matrix2x2, Operation};
