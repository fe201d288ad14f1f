//! # Matriz 2×2 complexa
//!
//! Operador de um qubit. Não precisa ser unitário: a matriz nula zera a
//! metade admitida do estado (projeções irreversíveis).

use bytemuck::{Pod, Zeroable};
use num_complex::Complex32;
use serde::{Deserialize, Serialize};

use crate::control::ControlMask;

/// Matriz 2×2 sobre `Complex32`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex32; 2]; 2],
}

impl Matrix2x2 {
    pub const fn new(a: Complex32, b: Complex32, c: Complex32, d: Complex32) -> Self {
        Self {
            elements: [[a, b], [c, d]],
        }
    }

    /// Elementos em ordem de linha
    pub const fn square(cells: [Complex32; 4]) -> Self {
        let [a, b, c, d] = cells;
        Self::new(a, b, c, d)
    }

    pub const fn zero() -> Self {
        let z = Complex32::new(0.0, 0.0);
        Self::new(z, z, z, z)
    }

    pub const fn identity() -> Self {
        let z = Complex32::new(0.0, 0.0);
        let one = Complex32::new(1.0, 0.0);
        Self::new(one, z, z, one)
    }

    /// Aplica a um par de amplitudes [alpha, beta]
    pub fn apply(&self, state: [Complex32; 2]) -> [Complex32; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;
        [a * alpha + b * beta, c * alpha + d * beta]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Self::new(a.conj(), c.conj(), b.conj(), d.conj())
    }

    /// `M · M† ≈ I` dentro de `epsilon`
    pub fn is_unitary(&self, epsilon: f32) -> bool {
        let product = self.mul(&self.dagger());
        let identity = Self::identity();
        product
            .elements
            .iter()
            .flatten()
            .zip(identity.elements.iter().flatten())
            .all(|(p, i)| (p - i).norm() <= epsilon)
    }

    /// Converte para o uniform de 8 floats
    pub fn to_uniform(&self) -> GateMatrix {
        (*self).into()
    }
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Uniform da matriz, linha a linha: `m00re, m00im, m01re, m01im, m10re, …`
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct GateMatrix {
    pub m00_re: f32,
    pub m00_im: f32,
    pub m01_re: f32,
    pub m01_im: f32,
    pub m10_re: f32,
    pub m10_im: f32,
    pub m11_re: f32,
    pub m11_im: f32,
}

impl GateMatrix {
    /// Valores na ordem esperada pelo parâmetro `matrix` do kernel
    pub fn as_floats(&self) -> [f32; 8] {
        bytemuck::cast(*self)
    }
}

impl From<Matrix2x2> for GateMatrix {
    fn from(m: Matrix2x2) -> Self {
        let [[a, b], [c, d]] = m.elements;
        Self {
            m00_re: a.re,
            m00_im: a.im,
            m01_re: b.re,
            m01_im: b.im,
            m10_re: c.re,
            m10_im: c.im,
            m11_re: d.re,
            m11_im: d.im,
        }
    }
}

/// Operação de um qubit: matriz, alvo e controles
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub matrix: Matrix2x2,
    pub target: u32,
    pub controls: ControlMask,
}

impl Operation {
    pub fn new(matrix: Matrix2x2, target: u32) -> Self {
        Self {
            matrix,
            target,
            controls: ControlMask::NO_CONTROLS,
        }
    }

    pub fn controlled_by(mut self, controls: ControlMask) -> Self {
        self.controls = controls;
        self
    }
}
