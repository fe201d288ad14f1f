//! Leitura de uma matriz densidade renderizada

use num_complex::Complex32;
use qtex_core::Surface;

use crate::error::{QuantumError, QuantumResult};

/// Matriz N×N lida dos canais (re, im) de uma superfície quadrada
#[derive(Clone, Debug, PartialEq)]
pub struct DensityMatrix {
    dimension: usize,
    entries: Vec<Complex32>,
}

impl DensityMatrix {
    pub fn from_surface(surface: &Surface) -> QuantumResult<Self> {
        if surface.width() != surface.height() {
            return Err(QuantumError::NotSquare {
                width: surface.width(),
                height: surface.height(),
            });
        }
        let entries = surface
            .float_cells()?
            .iter()
            .map(|c| Complex32::new(c[0], c[1]))
            .collect();
        Ok(Self {
            dimension: surface.width(),
            entries,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Elemento (linha `i`, coluna `j`)
    pub fn get(&self, i: usize, j: usize) -> Option<Complex32> {
        if i >= self.dimension || j >= self.dimension {
            return None;
        }
        self.entries.get(i * self.dimension + j).copied()
    }

    pub fn trace(&self) -> Complex32 {
        (0..self.dimension)
            .map(|i| self.entries[i * self.dimension + i])
            .sum()
    }

    pub fn is_hermitian(&self, epsilon: f32) -> bool {
        let n = self.dimension;
        (0..n).all(|i| {
            (i..n).all(|j| {
                let a = self.entries[i * n + j];
                let b = self.entries[j * n + i];
                (a - b.conj()).norm() <= epsilon
            })
        })
    }

    pub fn entries(&self) -> &[Complex32] {
        &self.entries
    }
}
