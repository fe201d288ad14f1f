//! Kernels de máscara de controle (1.0 = endereço admitido, 0.0 = excluído)

use super::{Context, FloatProgram, scalar_cell};
use crate::address::{Fragment, bit_of};
use crate::error::PipelineResult;
use crate::renderer::slots;
use crate::surface::Cell;

#[inline]
fn admit(admitted: bool) -> Cell {
    scalar_cell(if admitted { 1.0 } else { 0.0 })
}

pub(super) struct SingleBitConstraint {
    bit: u32,
    desired: bool,
}

impl SingleBitConstraint {
    pub(super) fn compile(ctx: &Context<'_>) -> PipelineResult<Self> {
        Ok(Self {
            bit: ctx.bit(slots::BIT)?,
            desired: ctx.flag(slots::DESIRED)?,
        })
    }
}

impl FloatProgram for SingleBitConstraint {
    fn shade(&self, fragment: Fragment) -> Cell {
        admit(bit_of(fragment.address, self.bit) == self.desired)
    }
}

pub(super) struct AddBitConstraint<'a> {
    base: &'a [Cell],
    bit: u32,
    desired: bool,
}

impl<'a> AddBitConstraint<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        Ok(Self {
            base: ctx.peer_cells(slots::BASE)?,
            bit: ctx.bit(slots::BIT)?,
            desired: ctx.flag(slots::DESIRED)?,
        })
    }
}

impl FloatProgram for AddBitConstraint<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        // Zero absorve: uma vez excluído, sempre excluído
        let a = fragment.address;
        admit(self.base[a][0] != 0.0 && bit_of(a, self.bit) == self.desired)
    }
}

/// Forma fechada: `(a & mask) == value`
pub(super) struct MaskMatch {
    mask: usize,
    value: usize,
}

impl MaskMatch {
    pub(super) fn compile(ctx: &Context<'_>) -> PipelineResult<Self> {
        let (mask, value) = ctx.control_mask()?;
        Ok(Self { mask, value })
    }
}

impl FloatProgram for MaskMatch {
    fn shade(&self, fragment: Fragment) -> Cell {
        admit(fragment.address & self.mask == self.value)
    }
}
