//! # Catálogo de kernels por célula
//!
//! Cada kernel é compilado num [`Program`]: uma função pura
//! `(Fragment, entradas, parâmetros) → célula`. Toda validação (formato,
//! dimensões, parâmetros) acontece em `compile`, antes de qualquer escrita.
//!
//! ```text
//! KernelId + KernelArgs ──compile──▶ Program ──shade(fragment)──▶ Cell
//! ```

mod density;
mod elementary;
mod masks;
mod reduction;
mod unitary;

use crate::address::{AddressSpace, Fragment};
use crate::error::{PipelineError, PipelineResult};
use crate::renderer::{KernelArgs, KernelId, ParamValue};
use crate::surface::{ByteCell, Cell, Surface};

/// Programa que produz células float
pub trait FloatProgram: Sync {
    fn shade(&self, fragment: Fragment) -> Cell;
}

/// Programa que produz células de bytes
pub trait ByteProgram: Sync {
    fn shade(&self, fragment: Fragment) -> ByteCell;
}

/// Kernel compilado, pronto para ser mapeado sobre a saída
pub enum Program<'a> {
    Float(Box<dyn FloatProgram + 'a>),
    Byte(Box<dyn ByteProgram + 'a>),
}

/// Compila `kernel` para uma saída com dimensões `output`
pub fn compile<'a>(
    kernel: KernelId,
    output: AddressSpace,
    args: &'a KernelArgs<'a>,
) -> PipelineResult<Program<'a>> {
    let ctx = Context { kernel, output, args };
    let program = match kernel {
        KernelId::UniformColor => float(elementary::UniformColor::compile(&ctx)?),
        KernelId::ClassicalState => float(elementary::ClassicalState::compile(&ctx)?),
        KernelId::PixelData => float(elementary::PixelData::compile(&ctx)?),
        KernelId::FloatsToBytes => Program::Byte(Box::new(elementary::FloatsToBytes::compile(&ctx)?)),
        KernelId::Overlay => float(elementary::Overlay::compile(&ctx)?),
        KernelId::LinearOverlay => float(elementary::LinearOverlay::compile(&ctx)?),
        KernelId::SingleBitConstraint => float(masks::SingleBitConstraint::compile(&ctx)?),
        KernelId::AddBitConstraint => float(masks::AddBitConstraint::compile(&ctx)?),
        KernelId::ControlMask => float(masks::MaskMatch::compile(&ctx)?),
        KernelId::ProbabilitiesFromAmplitudes => float(reduction::Probabilities::compile(&ctx)?),
        KernelId::Scaled => float(reduction::Scaled::compile(&ctx)?),
        KernelId::ConditionalProbabilitiesStep => float(reduction::ConditionalStep::compile(&ctx)?),
        KernelId::ConditionalProbabilitiesFinalize => {
            float(reduction::ConditionalFinalize::compile(&ctx)?)
        }
        KernelId::QubitOperation => float(unitary::QubitOperation::compile(&ctx)?),
        KernelId::SwapOperation => float(unitary::SwapOperation::compile(&ctx)?),
        KernelId::DensityMatrix => float(density::DensityMatrix::compile(&ctx)?),
    };
    Ok(program)
}

fn float<'a, P: FloatProgram + 'a>(program: P) -> Program<'a> {
    Program::Float(Box::new(program))
}

/// Acesso validado às entradas e parâmetros durante a compilação
pub(crate) struct Context<'a> {
    kernel: KernelId,
    output: AddressSpace,
    args: &'a KernelArgs<'a>,
}

impl<'a> Context<'a> {
    pub(crate) fn output(&self) -> AddressSpace {
        self.output
    }

    fn missing(&self, what: &str) -> PipelineError {
        PipelineError::KernelCompile {
            kernel: self.kernel,
            reason: format!("missing {what}"),
        }
    }

    pub(crate) fn invalid(&self, reason: impl Into<String>) -> PipelineError {
        PipelineError::KernelCompile {
            kernel: self.kernel,
            reason: reason.into(),
        }
    }

    pub(crate) fn shape(&self, detail: impl std::fmt::Display) -> PipelineError {
        PipelineError::shape(format!("{}: {detail}", self.kernel))
    }

    /// Superfície de entrada (qualquer dimensão), exige formato float
    pub(crate) fn surface(&self, name: &str) -> PipelineResult<&'a Surface> {
        let surface = self
            .args
            .get_input(name)
            .ok_or_else(|| self.missing(&format!("input `{name}`")))?;
        surface.float_cells()?;
        Ok(surface)
    }

    /// Células de entrada que precisam ter as dimensões da saída
    pub(crate) fn peer_cells(&self, name: &str) -> PipelineResult<&'a [Cell]> {
        let surface = self.surface(name)?;
        if surface.space() != self.output {
            return Err(self.shape(format!(
                "input `{name}` is {}x{} but output is {}x{}",
                surface.width(),
                surface.height(),
                self.output.width(),
                self.output.height()
            )));
        }
        surface.float_cells()
    }

    fn param(&self, name: &str) -> PipelineResult<&'a ParamValue> {
        self.args
            .get_param(name)
            .ok_or_else(|| self.missing(&format!("param `{name}`")))
    }

    pub(crate) fn uint(&self, name: &str) -> PipelineResult<u64> {
        match self.param(name)? {
            ParamValue::Uint(v) => Ok(*v),
            other => Err(self.invalid(format!("param `{name}` must be an integer, got {other:?}"))),
        }
    }

    /// Inteiro usado como endereço
    pub(crate) fn address(&self, name: &str) -> PipelineResult<usize> {
        let v = self.uint(name)?;
        usize::try_from(v).map_err(|_| self.shape(format!("`{name}` = {v} is not addressable")))
    }

    /// Índice de qubit (bits além de `u32` saturam e leem como 0)
    pub(crate) fn bit(&self, name: &str) -> PipelineResult<u32> {
        Ok(u32::try_from(self.uint(name)?).unwrap_or(u32::MAX))
    }

    /// Índice de qubit que precisa existir no espaço de saída
    pub(crate) fn qubit(&self, name: &str) -> PipelineResult<u32> {
        let q = self.bit(name)?;
        if !self.output.contains_qubit(q) {
            return Err(self.shape(format!(
                "qubit `{name}` = {q} outside a {}-qubit surface",
                self.output.qubit_count()
            )));
        }
        Ok(q)
    }

    pub(crate) fn flag(&self, name: &str) -> PipelineResult<bool> {
        match self.param(name)? {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(self.invalid(format!("param `{name}` must be a bool, got {other:?}"))),
        }
    }

    pub(crate) fn scalar(&self, name: &str) -> PipelineResult<f32> {
        match self.param(name)? {
            ParamValue::Float(v) => Ok(*v),
            other => Err(self.invalid(format!("param `{name}` must be a float, got {other:?}"))),
        }
    }

    pub(crate) fn floats(&self, name: &str) -> PipelineResult<&'a [f32]> {
        match self.param(name)? {
            ParamValue::Floats(v) => Ok(v),
            other => Err(self.invalid(format!("param `{name}` must be a float array, got {other:?}"))),
        }
    }

    /// Array de floats com tamanho fixo
    pub(crate) fn float_array<const N: usize>(&self, name: &str) -> PipelineResult<[f32; N]> {
        let values = self.floats(name)?;
        <[f32; N]>::try_from(values).map_err(|_| {
            self.invalid(format!("param `{name}` needs {N} floats, got {}", values.len()))
        })
    }

    pub(crate) fn uints(&self, name: &str) -> PipelineResult<&'a [u64]> {
        match self.param(name)? {
            ParamValue::Uints(v) => Ok(v),
            other => Err(self.invalid(format!(
                "param `{name}` must be an integer array, got {other:?}"
            ))),
        }
    }

    /// Par `(mask, value)` validado
    pub(crate) fn control_mask(&self) -> PipelineResult<(usize, usize)> {
        use crate::renderer::slots;

        let mask = self.uint(slots::MASK)?;
        let value = self.uint(slots::VALUE)?;
        if value & !mask != 0 {
            return Err(PipelineError::InvalidControlMask { mask, value });
        }
        // Bits acima da largura de usize nunca são satisfeitos
        match (usize::try_from(mask), usize::try_from(value)) {
            (Ok(m), Ok(v)) => Ok((m, v)),
            _ => Ok((0, 1)),
        }
    }
}

/// Célula com apenas o canal 0 preenchido
#[inline]
pub(crate) fn scalar_cell(v: f32) -> Cell {
    [v, 0.0, 0.0, 0.0]
}

#[inline]
pub(crate) fn add_cells(a: Cell, b: Cell) -> Cell {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}
