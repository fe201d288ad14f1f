//! Probabilidades, escala e probabilidades condicionais

use qtex_core::{KernelArgs, KernelId, PipelineError, Renderer, Surface, slots};

use super::{QuantumKernels, check_qubit};
use crate::buffers::SurfacePair;
use crate::control::ControlMask;
use crate::error::QuantumResult;

impl<R: Renderer> QuantumKernels<R> {
    /// Um passo da soma aos pares sobre `bit`
    pub fn conditional_probability_step(
        &self,
        dst: &mut Surface,
        src: &Surface,
        bit: u32,
        keep_odd: bool,
    ) -> QuantumResult<()> {
        check_qubit(src, bit)?;
        self.run(
            KernelId::ConditionalProbabilitiesStep,
            dst,
            &KernelArgs::new()
                .input(slots::SOURCE, src)
                .param(slots::BIT, bit)
                .param(slots::KEEP_ODD, keep_odd),
        )
    }

    /// Compacta as somas parciais: uma célula de 4 canais por qubit
    pub fn finalize_conditional_probabilities(
        &self,
        dst: &mut Surface,
        src: &Surface,
        mask: u64,
    ) -> QuantumResult<()> {
        self.run(
            KernelId::ConditionalProbabilitiesFinalize,
            dst,
            &KernelArgs::new()
                .input(slots::SOURCE, src)
                .param(slots::MASK, mask),
        )
    }

    /// `dst[a] = |amplitudes[a]|²` no canal 0
    pub fn probabilities_from_amplitudes(&self, dst: &mut Surface, amplitudes: &Surface) -> QuantumResult<()> {
        self.run(
            KernelId::ProbabilitiesFromAmplitudes,
            dst,
            &KernelArgs::new().input(slots::SOURCE, amplitudes),
        )
    }

    /// Probabilidades agrupadas pelas atribuições dos bits de `mask`
    ///
    /// Probabilidades na reserva de `scratch`, um passo condicional por
    /// qubit (alternando as metades do par) e, por fim, a compactação em
    /// `dst` com os bits incluídos em `mask`. Bits de `mask` fora do registrador
    /// e um `dst` com menos células que qubits são rejeitados antes de
    /// qualquer escrita em `scratch`.
    pub fn control_combination_probabilities(
        &self,
        dst: &mut Surface,
        scratch: &mut SurfacePair,
        mask: ControlMask,
        amplitudes: &Surface,
    ) -> QuantumResult<()> {
        let qubits = amplitudes.qubit_count();
        for bit in mask.controlled_bits() {
            check_qubit(amplitudes, bit)?;
        }
        if dst.cell_count() < qubits as usize {
            return Err(PipelineError::ShapeMismatch(format!(
                "{} cells cannot hold one group per qubit of a {qubits}-qubit source",
                dst.cell_count()
            ))
            .into());
        }
        tracing::debug!(%mask, qubits, "control combination probabilities");

        scratch.release();
        let (spare, _) = scratch.split();
        self.probabilities_from_amplitudes(spare, amplitudes)?;
        scratch.flip();

        for bit in 0..qubits {
            let keep_odd = mask.desired_value_for(bit).unwrap_or(false);
            if let (spare, Some(fresh)) = scratch.split() {
                self.conditional_probability_step(spare, fresh, bit, keep_odd)?;
            }
            scratch.flip();
        }

        match scratch.fresh() {
            Some(sums) => self.finalize_conditional_probabilities(dst, sums, mask.mask()),
            None => Ok(()),
        }
    }

    /// `dst[a] = src[a] * factor` em todos os canais
    pub fn scale(&self, dst: &mut Surface, src: &Surface, factor: f32) -> QuantumResult<()> {
        self.run(
            KernelId::Scaled,
            dst,
            &KernelArgs::new()
                .input(slots::SOURCE, src)
                .param(slots::FACTOR, factor),
        )
    }
}
