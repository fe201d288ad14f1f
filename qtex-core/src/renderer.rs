//! # Renderer: Contrato de execução de kernels
//!
//! Um [`Renderer`] executa um kernel nomeado sobre uma superfície de saída,
//! dadas superfícies de entrada nomeadas e parâmetros escalares/array.
//!
//! ```text
//! execute(kernel, output, { inputs: nome → &Surface, params: nome → ParamValue })
//! ```
//!
//! O borrow checker garante o contrato de aliasing: a saída é `&mut` e as
//! entradas são `&`, logo um kernel nunca lê a superfície que está escrevendo.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::surface::{Surface, SurfaceFormat};

/// Nomes de entradas e parâmetros entendidos pelo catálogo de kernels
pub mod slots {
    // Entradas
    pub const SOURCE: &str = "source";
    pub const CONTROL: &str = "control";
    pub const BASE: &str = "base";
    pub const FOREGROUND: &str = "foreground";
    pub const BACKGROUND: &str = "background";

    // Parâmetros
    pub const COLOR: &str = "color";
    pub const STATE: &str = "state";
    pub const DATA: &str = "data";
    pub const OFFSET: &str = "offset";
    pub const BIT: &str = "bit";
    pub const DESIRED: &str = "desired";
    pub const MASK: &str = "mask";
    pub const VALUE: &str = "value";
    pub const FACTOR: &str = "factor";
    pub const KEEP_ODD: &str = "keep_odd";
    pub const TARGET: &str = "target";
    pub const MATRIX: &str = "matrix";
    pub const QUBIT_A: &str = "qubit_a";
    pub const QUBIT_B: &str = "qubit_b";
    pub const KEPT: &str = "kept";
    pub const MARGINED: &str = "margined";
}

/// Identificador de kernel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KernelId {
    /// params: `color` (4 floats)
    UniformColor,
    /// params: `state` (endereço da base computacional)
    ClassicalState,
    /// params: `data` (`4 * W * H` floats)
    PixelData,
    /// inputs: `source` (float); saída em bytes
    FloatsToBytes,
    /// inputs: `foreground`, `background`; params: `offset` ([col, row])
    Overlay,
    /// inputs: `foreground`, `background`; params: `offset` (linear)
    LinearOverlay,
    /// params: `bit`, `desired`
    SingleBitConstraint,
    /// inputs: `base`; params: `bit`, `desired`
    AddBitConstraint,
    /// params: `mask`, `value`
    ControlMask,
    /// inputs: `source`
    ProbabilitiesFromAmplitudes,
    /// inputs: `source`; params: `factor`
    Scaled,
    /// inputs: `source`; params: `bit`, `keep_odd`
    ConditionalProbabilitiesStep,
    /// inputs: `source`; params: `mask`
    ConditionalProbabilitiesFinalize,
    /// inputs: `source`, `control`; params: `target`, `matrix` (8 floats)
    QubitOperation,
    /// inputs: `source`, `control`; params: `qubit_a`, `qubit_b`
    SwapOperation,
    /// inputs: `source`; params: `kept`, `margined`, `mask`, `value`
    DensityMatrix,
}

impl KernelId {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UniformColor => "uniform_color",
            Self::ClassicalState => "classical_state",
            Self::PixelData => "pixel_data",
            Self::FloatsToBytes => "floats_to_bytes",
            Self::Overlay => "overlay",
            Self::LinearOverlay => "linear_overlay",
            Self::SingleBitConstraint => "single_bit_constraint",
            Self::AddBitConstraint => "add_bit_constraint",
            Self::ControlMask => "control_mask",
            Self::ProbabilitiesFromAmplitudes => "probabilities_from_amplitudes",
            Self::Scaled => "scaled",
            Self::ConditionalProbabilitiesStep => "conditional_probabilities_step",
            Self::ConditionalProbabilitiesFinalize => "conditional_probabilities_finalize",
            Self::QubitOperation => "qubit_operation",
            Self::SwapOperation => "swap_operation",
            Self::DensityMatrix => "density_matrix",
        }
    }

    /// Formato exigido da superfície de saída
    pub fn output_format(&self) -> SurfaceFormat {
        match self {
            Self::FloatsToBytes => SurfaceFormat::Byte,
            _ => SurfaceFormat::Float,
        }
    }
}

impl fmt::Display for KernelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Valor de parâmetro (uniform)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Bool(bool),
    Uint(u64),
    Float(f32),
    Floats(Vec<f32>),
    Uints(Vec<u64>),
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<usize> for ParamValue {
    fn from(v: usize) -> Self {
        Self::Uint(v as u64)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<f32>> for ParamValue {
    fn from(v: Vec<f32>) -> Self {
        Self::Floats(v)
    }
}

impl From<&[f32]> for ParamValue {
    fn from(v: &[f32]) -> Self {
        Self::Floats(v.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for ParamValue {
    fn from(v: [f32; N]) -> Self {
        Self::Floats(v.to_vec())
    }
}

impl From<Vec<u64>> for ParamValue {
    fn from(v: Vec<u64>) -> Self {
        Self::Uints(v)
    }
}

impl From<&[u32]> for ParamValue {
    fn from(v: &[u32]) -> Self {
        Self::Uints(v.iter().map(|&q| u64::from(q)).collect())
    }
}

/// Entradas e parâmetros de uma execução de kernel
#[derive(Clone, Debug, Default)]
pub struct KernelArgs<'a> {
    inputs: BTreeMap<&'static str, &'a Surface>,
    params: BTreeMap<&'static str, ParamValue>,
}

impl<'a> KernelArgs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona superfície de entrada
    pub fn input(mut self, name: &'static str, surface: &'a Surface) -> Self {
        self.inputs.insert(name, surface);
        self
    }

    /// Adiciona parâmetro
    pub fn param(mut self, name: &'static str, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name, value.into());
        self
    }

    pub fn get_input(&self, name: &str) -> Option<&'a Surface> {
        self.inputs.get(name).copied()
    }

    pub fn get_param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }
}

/// Executor de kernels por célula
///
/// Implementações podem despachar numa GPU, num loop SIMD ou num thread
/// pool: o contrato é o mesmo. Toda execução sobrescreve a saída inteira ou
/// falha sem escrever nada.
pub trait Renderer: Send + Sync {
    /// Nome do renderer
    fn name(&self) -> &str;

    /// Executa `kernel` escrevendo em `output`
    fn execute(
        &self,
        kernel: KernelId,
        output: &mut Surface,
        args: &KernelArgs<'_>,
    ) -> PipelineResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(
        &self,
        kernel: KernelId,
        output: &mut Surface,
        args: &KernelArgs<'_>,
    ) -> PipelineResult<()> {
        (**self).execute(kernel, output, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_builder() {
        let s = Surface::new(2, 2).unwrap();
        let args = KernelArgs::new()
            .input(slots::SOURCE, &s)
            .param(slots::BIT, 3u32)
            .param(slots::KEEP_ODD, true)
            .param(slots::COLOR, [1.0f32, 2.0, 3.0, 4.0]);

        assert!(args.get_input(slots::SOURCE).is_some());
        assert!(args.get_input(slots::CONTROL).is_none());
        assert_eq!(args.get_param(slots::BIT), Some(&ParamValue::Uint(3)));
        assert_eq!(args.get_param(slots::KEEP_ODD), Some(&ParamValue::Bool(true)));
        assert_eq!(
            args.get_param(slots::COLOR),
            Some(&ParamValue::Floats(vec![1.0, 2.0, 3.0, 4.0]))
        );
    }

    #[test]
    fn test_kernel_output_format() {
        assert_eq!(KernelId::FloatsToBytes.output_format(), SurfaceFormat::Byte);
        assert_eq!(KernelId::DensityMatrix.output_format(), SurfaceFormat::Float);
        assert_eq!(KernelId::QubitOperation.to_string(), "qubit_operation");
    }
}
