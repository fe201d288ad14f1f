//! Operações de um qubit e swap

use qtex_core::{KernelArgs, KernelId, Renderer, Surface, slots};

use super::{QuantumKernels, check_qubit};
use crate::buffers::SurfacePair;
use crate::error::{QuantumError, QuantumResult};
use crate::matrix::{Matrix2x2, Operation};

impl<R: Renderer> QuantumKernels<R> {
    /// `(dst[a0], dst[a1]) = matrix · (src[a0], src[a1])` nos pares admitidos por `control`
    pub fn apply_qubit_operation(
        &self,
        dst: &mut Surface,
        src: &Surface,
        matrix: &Matrix2x2,
        target: u32,
        control: &Surface,
    ) -> QuantumResult<()> {
        check_qubit(src, target)?;
        self.run(
            KernelId::QubitOperation,
            dst,
            &KernelArgs::new()
                .input(slots::SOURCE, src)
                .input(slots::CONTROL, control)
                .param(slots::TARGET, target)
                .param(slots::MATRIX, matrix.to_uniform().as_floats()),
        )
    }

    /// Materializa os controles de `op` em `scratch` e aplica a matriz
    pub fn apply_operation(
        &self,
        dst: &mut Surface,
        src: &Surface,
        op: &Operation,
        scratch: &mut SurfacePair,
    ) -> QuantumResult<()> {
        if op.controls.desired_value_for(op.target).is_some() {
            return Err(QuantumError::OverlappingQubits { qubit: op.target });
        }
        check_qubit(src, op.target)?;
        let control = self.select_double_buffer(scratch, op.controls)?;
        self.apply_qubit_operation(dst, src, &op.matrix, op.target, control)
    }

    /// Troca as amplitudes `(a=1, b=0)` ↔ `(a=0, b=1)` nos endereços admitidos
    pub fn apply_swap(
        &self,
        dst: &mut Surface,
        src: &Surface,
        qubit_a: u32,
        qubit_b: u32,
        control: &Surface,
    ) -> QuantumResult<()> {
        check_qubit(src, qubit_a)?;
        check_qubit(src, qubit_b)?;
        if qubit_a == qubit_b {
            return Err(QuantumError::OverlappingQubits { qubit: qubit_a });
        }
        self.run(
            KernelId::SwapOperation,
            dst,
            &KernelArgs::new()
                .input(slots::SOURCE, src)
                .input(slots::CONTROL, control)
                .param(slots::QUBIT_A, qubit_a)
                .param(slots::QUBIT_B, qubit_b),
        )
    }
}
