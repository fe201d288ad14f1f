//! # Pipeline quântico tipado
//!
//! [`QuantumKernels`] traduz as operações do registrador em execuções de
//! kernels num [`Renderer`]. Cada método valida os argumentos antes de
//! despachar, e o renderer valida dimensões antes de escrever qualquer
//! célula: uma chamada que falha deixa `dst` intacto.
//!
//! ```text
//! fill_classical_state ─▶ apply_qubit_operation ─▶ probabilities_from_amplitudes
//!                     ▲                         ▲
//!               build_mask / select_double_buffer (controles)
//! ```

mod density;
mod elementary;
mod masks;
mod reduction;
mod unitary;

use qtex_core::{CpuRenderer, KernelArgs, KernelId, Renderer, Surface};

use crate::error::{QuantumError, QuantumResult};

/// Executor de kernels quânticos sobre um renderer
#[derive(Debug, Clone, Default)]
pub struct QuantumKernels<R> {
    renderer: R,
}

impl QuantumKernels<CpuRenderer> {
    /// Executor sobre o renderer CPU padrão
    pub fn cpu() -> Self {
        Self::new(CpuRenderer::new())
    }
}

impl<R: Renderer> QuantumKernels<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn run(&self, kernel: KernelId, dst: &mut Surface, args: &KernelArgs<'_>) -> QuantumResult<()> {
        self.renderer.execute(kernel, dst, args)?;
        Ok(())
    }
}

/// Qubit precisa existir no espaço de endereços de `surface`
fn check_qubit(surface: &Surface, qubit: u32) -> QuantumResult<()> {
    if surface.space().contains_qubit(qubit) {
        Ok(())
    } else {
        Err(QuantumError::QubitOutOfRange {
            qubit,
            qubit_count: surface.qubit_count(),
        })
    }
}
