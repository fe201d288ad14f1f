//! # Máscara de controle
//!
//! Par `(mask, value)` com `value & !mask == 0`. Um endereço `a` é
//! **admitido** sse `(a & mask) == value`.
//!
//! ```text
//! mask  = 0b101   value = 0b001
//! admite: 0b001, 0b011   (bit 0 = 1, bit 2 = 0, bit 1 livre)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, QuantumResult};

/// Máscara de controle sobre os bits do endereço
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlMask {
    mask: u64,
    value: u64,
}

impl ControlMask {
    /// Identidade: admite todos os endereços
    pub const NO_CONTROLS: Self = Self { mask: 0, value: 0 };

    pub fn new(mask: u64, value: u64) -> QuantumResult<Self> {
        if value & !mask != 0 {
            return Err(QuantumError::InvalidControlMask { mask, value });
        }
        Ok(Self { mask, value })
    }

    /// Máscara com uma única restrição `bit == desired`
    pub fn from_bit(bit: u32, desired: bool) -> QuantumResult<Self> {
        let flag = 1u64.checked_shl(bit).ok_or(QuantumError::QubitOutOfRange {
            qubit: bit,
            qubit_count: u64::BITS,
        })?;
        Ok(Self {
            mask: flag,
            value: if desired { flag } else { 0 },
        })
    }

    #[inline]
    pub const fn mask(&self) -> u64 {
        self.mask
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub const fn admits(&self, address: usize) -> bool {
        (address as u64) & self.mask == self.value
    }

    /// Valor exigido para `bit`, ou `None` se o bit é livre
    pub fn desired_value_for(&self, bit: u32) -> Option<bool> {
        let flag = 1u64.checked_shl(bit)?;
        (self.mask & flag != 0).then_some(self.value & flag != 0)
    }

    /// Conjunção das duas máscaras
    pub fn combine(&self, other: &ControlMask) -> QuantumResult<Self> {
        let conflicts = self.mask & other.mask & (self.value ^ other.value);
        if conflicts != 0 {
            return Err(QuantumError::ConflictingControls {
                bit: conflicts.trailing_zeros(),
            });
        }
        Ok(Self {
            mask: self.mask | other.mask,
            value: self.value | other.value,
        })
    }

    /// Bits controlados, em ordem crescente
    pub fn controlled_bits(&self) -> impl Iterator<Item = u32> + '_ {
        (0..u64::BITS).filter(|&b| self.mask >> b & 1 == 1)
    }

    #[inline]
    pub const fn is_unconstrained(&self) -> bool {
        self.mask == 0
    }
}

impl fmt::Display for ControlMask {
    /// Um caractere por qubit, a partir do qubit 0: `1`, `0` ou `?` (livre)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return write!(f, "no controls");
        }
        let width = u64::BITS - self.mask.leading_zeros();
        for bit in 0..width {
            let c = match self.desired_value_for(bit) {
                Some(true) => '1',
                Some(false) => '0',
                None => '?',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
