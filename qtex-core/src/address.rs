//! # Address Space: Qubits ↔ Coordenadas
//!
//! Um endereço linear `a = row * width + col` identifica uma amplitude.
//! Como `width` é potência de dois, os bits `0..w` de `a` vêm da coluna e os
//! bits `w..w+h` vêm da linha: o qubit `i` é simplesmente o bit `i` de `a`.
//!
//! ```text
//!   address = [ row bits | col bits ]
//!              h-1 .. 0    w-1 .. 0
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Endereço linear a partir de coordenadas
#[inline]
pub const fn to_address(col: usize, row: usize, width: usize) -> usize {
    row * width + col
}

/// Coordenadas `(col, row)` a partir de endereço linear
#[inline]
pub const fn from_address(address: usize, width: usize) -> (usize, usize) {
    (address % width, address / width)
}

/// Valor do bit `bit` de `address`. Bits além da largura de `usize` são 0.
#[inline]
pub const fn bit_of(address: usize, bit: u32) -> bool {
    bit < usize::BITS && (address >> bit) & 1 == 1
}

/// `address` com o bit `bit` forçado para `value`
#[inline]
pub const fn with_bit(address: usize, bit: u32, value: bool) -> usize {
    if bit >= usize::BITS {
        return address;
    }
    if value {
        address | (1 << bit)
    } else {
        address & !(1 << bit)
    }
}

/// Uma célula sendo sombreada: coordenadas e endereço linear
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fragment {
    pub col: usize,
    pub row: usize,
    pub address: usize,
}

/// Dimensões de uma grade W×H (ambas potências de dois)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressSpace {
    width: usize,
    height: usize,
}

impl AddressSpace {
    /// Cria espaço de endereçamento, validando potências de dois
    pub fn new(width: usize, height: usize) -> PipelineResult<Self> {
        if !width.is_power_of_two() || !height.is_power_of_two() {
            return Err(PipelineError::shape(format!(
                "surface dimensions must be powers of two, got {width}x{height}"
            )));
        }
        width
            .checked_mul(height)
            .ok_or_else(|| PipelineError::shape(format!("{width}x{height} overflows")))?;
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Número de células (amplitudes)
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Número de qubits endereçados (`log2(W*H)`)
    pub const fn qubit_count(&self) -> u32 {
        self.cell_count().trailing_zeros()
    }

    /// Bits vindos da coluna (`log2(W)`)
    pub const fn column_bits(&self) -> u32 {
        self.width.trailing_zeros()
    }

    pub const fn address(&self, col: usize, row: usize) -> usize {
        to_address(col, row, self.width)
    }

    pub const fn coords(&self, address: usize) -> (usize, usize) {
        from_address(address, self.width)
    }

    pub const fn fragment(&self, address: usize) -> Fragment {
        let (col, row) = self.coords(address);
        Fragment { col, row, address }
    }

    /// Qubit pertence ao espaço?
    pub const fn contains_qubit(&self, qubit: u32) -> bool {
        qubit < self.qubit_count()
    }
}
