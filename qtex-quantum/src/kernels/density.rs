//! Redução para matriz densidade

use qtex_core::{KernelArgs, KernelId, Renderer, Surface, slots};

use super::{QuantumKernels, check_qubit};
use crate::control::ControlMask;
use crate::error::{QuantumError, QuantumResult};

impl<R: Renderer> QuantumKernels<R> {
    /// `dst(i, j) = Σ_k ensemble[k, i] · conj(ensemble[k, j])`
    ///
    /// `kept` indexa a posição dentro de cada vetor, `margined` indexa o
    /// membro do ensemble. Membros fora de `mask` não contribuem. `dst`
    /// precisa ser `N × N`, `N = 2^kept.len()`.
    pub fn reduce_to_density_matrix(
        &self,
        dst: &mut Surface,
        ensemble: &Surface,
        kept: &[u32],
        margined: &[u32],
        mask: ControlMask,
    ) -> QuantumResult<()> {
        let mut seen = 0u64;
        for &q in kept.iter().chain(margined) {
            check_qubit(ensemble, q)?;
            if seen >> q & 1 == 1 {
                return Err(QuantumError::OverlappingQubits { qubit: q });
            }
            seen |= 1 << q;
        }
        tracing::debug!(
            kept = kept.len(),
            margined = margined.len(),
            %mask,
            "density reduction"
        );

        self.run(
            KernelId::DensityMatrix,
            dst,
            &KernelArgs::new()
                .input(slots::SOURCE, ensemble)
                .param(slots::KEPT, kept)
                .param(slots::MARGINED, margined)
                .param(slots::MASK, mask.mask())
                .param(slots::VALUE, mask.value()),
        )
    }
}
