//! Codec float ↔ bytes sem perdas
//!
//! Cada `f32` vira uma célula de bytes com os 4 bytes de `f32::to_bits()`
//! em little-endian. Sinal, expoente e mantissa atravessam bit a bit,
//! inclusive NaN (com payload) e ±∞.

use crate::error::{PipelineError, PipelineResult};
use crate::surface::ByteCell;

/// Bytes por float codificado
pub const BYTES_PER_FLOAT: usize = 4;

#[inline]
pub fn encode_f32(value: f32) -> ByteCell {
    value.to_bits().to_le_bytes()
}

#[inline]
pub fn decode_f32(bytes: ByteCell) -> f32 {
    f32::from_bits(u32::from_le_bytes(bytes))
}

/// Decodifica o readback de uma superfície codificada a partir de uma
/// superfície float `width × height` (`width * height * 4` floats).
pub fn decode_bytes_to_floats(bytes: &[u8], width: usize, height: usize) -> PipelineResult<Vec<f32>> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4 * BYTES_PER_FLOAT))
        .ok_or_else(|| PipelineError::shape(format!("{width}x{height} overflows")))?;
    if bytes.len() != expected {
        return Err(PipelineError::shape(format!(
            "expected {expected} bytes for a {width}x{height} float surface, got {}",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(BYTES_PER_FLOAT)
        .map(|chunk| decode_f32([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
