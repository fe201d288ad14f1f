//! Preenchimento, upload, codec e composição

use qtex_core::codec;
use qtex_core::{KernelArgs, KernelId, Renderer, Surface, slots};

use super::QuantumKernels;
use crate::error::QuantumResult;

impl<R: Renderer> QuantumKernels<R> {
    /// Todas as células recebem `color`
    pub fn fill_uniform(&self, dst: &mut Surface, color: [f32; 4]) -> QuantumResult<()> {
        self.run(
            KernelId::UniformColor,
            dst,
            &KernelArgs::new().param(slots::COLOR, color),
        )
    }

    /// Estado da base computacional `|state⟩`
    pub fn fill_classical_state(&self, dst: &mut Surface, state: usize) -> QuantumResult<()> {
        self.run(
            KernelId::ClassicalState,
            dst,
            &KernelArgs::new().param(slots::STATE, state),
        )
    }

    /// Upload de `4 * W * H` floats, sem clamp
    pub fn upload_floats(&self, dst: &mut Surface, data: &[f32]) -> QuantumResult<()> {
        self.run(
            KernelId::PixelData,
            dst,
            &KernelArgs::new().param(slots::DATA, data),
        )
    }

    /// Codifica `src` em `dst` (superfície de bytes `4W × H`)
    pub fn encode_floats_to_bytes(&self, dst: &mut Surface, src: &Surface) -> QuantumResult<()> {
        self.run(
            KernelId::FloatsToBytes,
            dst,
            &KernelArgs::new().input(slots::SOURCE, src),
        )
    }

    /// Inverso de [`encode_floats_to_bytes`](Self::encode_floats_to_bytes)
    pub fn decode_bytes_to_floats(
        &self,
        bytes: &[u8],
        width: usize,
        height: usize,
    ) -> QuantumResult<Vec<f32>> {
        Ok(codec::decode_bytes_to_floats(bytes, width, height)?)
    }

    /// Cópia de `back` com o bloco `fore` em `(offset_col, offset_row)`
    pub fn overlay(
        &self,
        dst: &mut Surface,
        offset_col: usize,
        offset_row: usize,
        fore: &Surface,
        back: &Surface,
    ) -> QuantumResult<()> {
        self.run(
            KernelId::Overlay,
            dst,
            &KernelArgs::new()
                .input(slots::FOREGROUND, fore)
                .input(slots::BACKGROUND, back)
                .param(slots::OFFSET, vec![offset_col as u64, offset_row as u64]),
        )
    }

    /// Cópia de `back` com as células de `fore` a partir do endereço `offset`
    pub fn linear_overlay(
        &self,
        dst: &mut Surface,
        offset: usize,
        fore: &Surface,
        back: &Surface,
    ) -> QuantumResult<()> {
        self.run(
            KernelId::LinearOverlay,
            dst,
            &KernelArgs::new()
                .input(slots::FOREGROUND, fore)
                .input(slots::BACKGROUND, back)
                .param(slots::OFFSET, offset),
        )
    }
}
