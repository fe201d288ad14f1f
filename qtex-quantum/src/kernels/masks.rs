//! Superfícies de controle

use qtex_core::{KernelArgs, KernelId, Renderer, Surface, slots};

use super::QuantumKernels;
use crate::buffers::SurfacePair;
use crate::control::ControlMask;
use crate::error::QuantumResult;

impl<R: Renderer> QuantumKernels<R> {
    /// 1 onde `bit_of(a, bit) == desired`
    pub fn build_single_bit_mask(&self, dst: &mut Surface, bit: u32, desired: bool) -> QuantumResult<()> {
        self.run(
            KernelId::SingleBitConstraint,
            dst,
            &KernelArgs::new()
                .param(slots::BIT, bit)
                .param(slots::DESIRED, desired),
        )
    }

    /// `base[a] && bit_of(a, bit) == desired`
    pub fn add_bit_constraint(
        &self,
        dst: &mut Surface,
        base: &Surface,
        bit: u32,
        desired: bool,
    ) -> QuantumResult<()> {
        self.run(
            KernelId::AddBitConstraint,
            dst,
            &KernelArgs::new()
                .input(slots::BASE, base)
                .param(slots::BIT, bit)
                .param(slots::DESIRED, desired),
        )
    }

    /// Forma fechada: 1 onde `mask.admits(a)`
    pub fn build_mask(&self, dst: &mut Surface, mask: ControlMask) -> QuantumResult<()> {
        self.run(
            KernelId::ControlMask,
            dst,
            &KernelArgs::new()
                .param(slots::MASK, mask.mask())
                .param(slots::VALUE, mask.value()),
        )
    }

    /// Renderiza `mask` na reserva do par e devolve a superfície fresca
    pub fn select_double_buffer<'p>(
        &self,
        pair: &'p mut SurfacePair,
        mask: ControlMask,
    ) -> QuantumResult<&'p Surface> {
        let (spare, _) = pair.split();
        self.build_mask(spare, mask)?;
        Ok(pair.flip())
    }
}
