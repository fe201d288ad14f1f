//! Kernels de redução: probabilidades, escala e somas parciais aninhadas

use super::{Context, FloatProgram, add_cells, scalar_cell};
use crate::address::Fragment;
use crate::error::PipelineResult;
use crate::renderer::slots;
use crate::surface::Cell;

pub(super) struct Probabilities<'a> {
    source: &'a [Cell],
}

impl<'a> Probabilities<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        Ok(Self {
            source: ctx.peer_cells(slots::SOURCE)?,
        })
    }
}

impl FloatProgram for Probabilities<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let c = self.source[fragment.address];
        scalar_cell(c.iter().map(|v| v * v).sum())
    }
}

pub(super) struct Scaled<'a> {
    source: &'a [Cell],
    factor: f32,
}

impl<'a> Scaled<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        Ok(Self {
            source: ctx.peer_cells(slots::SOURCE)?,
            factor: ctx.scalar(slots::FACTOR)?,
        })
    }
}

impl FloatProgram for Scaled<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        self.source[fragment.address].map(|v| v * self.factor)
    }
}

/// Um passo do pipeline de probabilidades condicionais.
///
/// A metade com o bit em 0 recebe a soma do par; a metade com o bit em 1
/// recebe o seu próprio valor (`keep_odd`) ou o do parceiro.
pub(super) struct ConditionalStep<'a> {
    source: &'a [Cell],
    flag: usize,
    keep_odd: bool,
}

impl<'a> ConditionalStep<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let bit = ctx.qubit(slots::BIT)?;
        Ok(Self {
            source: ctx.peer_cells(slots::SOURCE)?,
            flag: 1 << bit,
            keep_odd: ctx.flag(slots::KEEP_ODD)?,
        })
    }
}

impl FloatProgram for ConditionalStep<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let a = fragment.address;
        if a & self.flag == 0 {
            add_cells(self.source[a], self.source[a | self.flag])
        } else if self.keep_odd {
            self.source[a]
        } else {
            self.source[a & !self.flag]
        }
    }
}

/// Compacta as somas parciais: célula `k` = `[s[0], s[1<<k], s[mask], s[mask ^ 1<<k]]`
pub(super) struct ConditionalFinalize<'a> {
    source: &'a [Cell],
    qubits: u32,
    mask: usize,
}

impl<'a> ConditionalFinalize<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let source = ctx.surface(slots::SOURCE)?;
        let mask = ctx.address(slots::MASK)?;
        if mask >= source.cell_count() {
            return Err(ctx.shape(format!(
                "mask {mask:#x} outside a {}-qubit source",
                source.qubit_count()
            )));
        }
        if ctx.output().cell_count() < source.qubit_count() as usize {
            return Err(ctx.shape(format!(
                "{} cells cannot hold one group per qubit of a {}-qubit source",
                ctx.output().cell_count(),
                source.qubit_count()
            )));
        }
        Ok(Self {
            source: source.float_cells()?,
            qubits: source.qubit_count(),
            mask,
        })
    }
}

impl FloatProgram for ConditionalFinalize<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let k = fragment.address;
        if k >= self.qubits as usize {
            return [0.0; 4];
        }
        let bit = 1usize << k;
        let s = |a: usize| self.source[a][0];
        [s(0), s(bit), s(self.mask), s(self.mask ^ bit)]
    }
}
