//! # 🧊 QTEX-Core
//!
//! Registradores quânticos como superfícies 2-D de células de 4 canais.
//!
//! ## O Modelo
//!
//! 1. Uma superfície `W×H` (potências de 2) tem `W·H` células
//! 2. A célula `(col, row)` tem endereço `row·W + col`
//! 3. O qubit `i` é o bit `i` do endereço
//! 4. Um kernel é uma **função pura por célula**: lê entradas, escreve uma célula
//!
//! ```text
//!          col →
//!        ┌────┬────┬────┬────┐
//!  row 0 │ 0  │ 1  │ 2  │ 3  │   q0, q1 = bits da coluna
//!  row 1 │ 4  │ 5  │ 6  │ 7  │   q2     = bit da linha
//!        └────┴────┴────┴────┘
//! ```
//!
//! ## Módulos
//!
//! - [`address`]: conversões endereço ↔ coordenada, [`AddressSpace`]
//! - [`surface`]: [`Surface`] float ou byte
//! - [`renderer`]: contrato [`Renderer`], [`KernelId`], [`KernelArgs`]
//! - [`kernels`]: catálogo de programas por célula
//! - [`cpu`]: [`CpuRenderer`] de referência (rayon)
//! - [`codec`]: float ↔ 4 bytes little-endian
//! - [`config`]: configuração via ambiente / `.env`
//! - [`logging`]: subscriber do `tracing`
//!
//! ## Quick Start
//!
//! ```
//! use qtex_core::prelude::*;
//!
//! let renderer = CpuRenderer::new();
//! let mut state = Surface::new(4, 2).unwrap();
//! renderer
//!     .execute(
//!         KernelId::ClassicalState,
//!         &mut state,
//!         &KernelArgs::new().param(slots::STATE, 5u64),
//!     )
//!     .unwrap();
//!
//! assert_eq!(state.cell(5), Some([1.0, 0.0, 0.0, 0.0]));
//! ```

pub mod address;
pub mod codec;
pub mod config;
pub mod cpu;
pub mod error;
pub mod kernels;
pub mod logging;
pub mod renderer;
pub mod surface;

pub mod prelude;

pub use address::{AddressSpace, Fragment};
pub use config::RendererConfig;
pub use cpu::CpuRenderer;
pub use error::{PipelineError, PipelineResult};
pub use logging::init_tracing;
pub use renderer::{KernelArgs, KernelId, ParamValue, Renderer, slots};
pub use surface::{ByteCell, Cell, Surface, SurfaceFormat};
