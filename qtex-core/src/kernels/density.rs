//! Redução para matriz densidade (traço parcial / soma de ensemble)
//!
//! O espaço de endereços da entrada é a concatenação dos qubits mantidos
//! (`kept`, posição dentro de cada vetor) e dos marginalizados (`margined`,
//! índice do membro do ensemble). A célula (linha `i`, coluna `j`) da saída
//! N×N acumula `amp[k,i] · conj(amp[k,j])` sobre os membros `k` admitidos.

use num_complex::Complex64;

use super::{Context, FloatProgram};
use crate::address::Fragment;
use crate::error::PipelineResult;
use crate::renderer::slots;
use crate::surface::Cell;

/// Espalha os bits de `index` nas posições `qubits`
#[inline]
fn scatter(index: usize, qubits: &[u32]) -> usize {
    qubits
        .iter()
        .enumerate()
        .filter(|&(b, _)| (index >> b) & 1 == 1)
        .fold(0, |acc, (_, &q)| acc | 1 << q)
}

pub(super) struct DensityMatrix<'a> {
    source: &'a [Cell],
    kept: Vec<u32>,
    margined: Vec<u32>,
    mask: usize,
    value: usize,
}

impl<'a> DensityMatrix<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let source = ctx.surface(slots::SOURCE)?;
        let qubit_count = source.qubit_count();
        let (mask, value) = ctx.control_mask()?;

        let mut seen = 0u64;
        let mut collect = |name: &str| -> PipelineResult<Vec<u32>> {
            let mut qubits = Vec::new();
            for &q in ctx.uints(name)? {
                if q >= u64::from(qubit_count) {
                    return Err(ctx.shape(format!(
                        "qubit {q} in `{name}` outside a {qubit_count}-qubit source"
                    )));
                }
                if seen & (1 << q) != 0 {
                    return Err(ctx.shape(format!("qubit {q} listed twice")));
                }
                seen |= 1 << q;
                qubits.push(q as u32);
            }
            Ok(qubits)
        };
        let kept = collect(slots::KEPT)?;
        let margined = collect(slots::MARGINED)?;

        if kept.len() + margined.len() != qubit_count as usize {
            return Err(ctx.shape(format!(
                "{} kept + {} margined qubits do not cover a {qubit_count}-qubit source",
                kept.len(),
                margined.len()
            )));
        }

        let n = 1usize << kept.len();
        let out = ctx.output();
        if out.width() != n || out.height() != n {
            return Err(ctx.shape(format!(
                "{} kept qubits need a {n}x{n} output, got {}x{}",
                kept.len(),
                out.width(),
                out.height()
            )));
        }

        Ok(Self {
            source: source.float_cells()?,
            kept,
            margined,
            mask,
            value,
        })
    }

    #[inline]
    fn admitted(&self, address: usize) -> bool {
        address & self.mask == self.value
    }
}

impl FloatProgram for DensityMatrix<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let offset_i = scatter(fragment.row, &self.kept);
        let offset_j = scatter(fragment.col, &self.kept);

        let mut acc = Complex64::new(0.0, 0.0);
        for k in 0..1usize << self.margined.len() {
            let member = scatter(k, &self.margined);
            let (ai, aj) = (member | offset_i, member | offset_j);
            if !self.admitted(ai) || !self.admitted(aj) {
                continue;
            }
            let vi = self.source[ai];
            let vj = self.source[aj];
            let zi = Complex64::new(f64::from(vi[0]), f64::from(vi[1]));
            let zj = Complex64::new(f64::from(vj[0]), f64::from(vj[1]));
            acc += zi * zj.conj();
        }
        [acc.re as f32, acc.im as f32, 0.0, 0.0]
    }
}
