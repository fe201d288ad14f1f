//! Kernels unitários: operação 2×2 num qubit e swap, ambos com controle

use num_complex::Complex32;

use super::{Context, FloatProgram};
use crate::address::Fragment;
use crate::error::PipelineResult;
use crate::renderer::slots;
use crate::surface::Cell;

#[inline]
fn amplitude(cell: Cell) -> Complex32 {
    Complex32::new(cell[0], cell[1])
}

pub(super) struct QubitOperation<'a> {
    source: &'a [Cell],
    control: &'a [Cell],
    flag: usize,
    /// [[m00, m01], [m10, m11]]
    matrix: [[Complex32; 2]; 2],
}

impl<'a> QubitOperation<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let target = ctx.qubit(slots::TARGET)?;
        let m = ctx.float_array::<8>(slots::MATRIX)?;
        Ok(Self {
            source: ctx.peer_cells(slots::SOURCE)?,
            control: ctx.peer_cells(slots::CONTROL)?,
            flag: 1 << target,
            matrix: [
                [Complex32::new(m[0], m[1]), Complex32::new(m[2], m[3])],
                [Complex32::new(m[4], m[5]), Complex32::new(m[6], m[7])],
            ],
        })
    }
}

impl FloatProgram for QubitOperation<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let a = fragment.address;
        let a0 = a & !self.flag;
        let a1 = a | self.flag;
        if self.control[a0][0] == 0.0 {
            return self.source[a];
        }

        let row = &self.matrix[usize::from(a & self.flag != 0)];
        let out = row[0] * amplitude(self.source[a0]) + row[1] * amplitude(self.source[a1]);
        [out.re, out.im, 0.0, 0.0]
    }
}

pub(super) struct SwapOperation<'a> {
    source: &'a [Cell],
    control: &'a [Cell],
    flag_a: usize,
    flag_b: usize,
}

impl<'a> SwapOperation<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        Ok(Self {
            source: ctx.peer_cells(slots::SOURCE)?,
            control: ctx.peer_cells(slots::CONTROL)?,
            flag_a: 1 << ctx.qubit(slots::QUBIT_A)?,
            flag_b: 1 << ctx.qubit(slots::QUBIT_B)?,
        })
    }
}

impl FloatProgram for SwapOperation<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let a = fragment.address;
        let differ = (a & self.flag_a != 0) != (a & self.flag_b != 0);
        if !differ || self.control[a][0] == 0.0 {
            self.source[a]
        } else {
            self.source[a ^ self.flag_a ^ self.flag_b]
        }
    }
}
