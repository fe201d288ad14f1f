//! # Surface: Grade 2-D de células de 4 canais
//!
//! Uma `Surface` é a "textura" onde vive o estado: W×H células, cada uma
//! com 4 canais. Superfícies de amplitude usam os canais 0 e 1 como
//! (real, imaginário); os canais 2 e 3 ficam reservados.
//!
//! Dois formatos existem:
//! - [`SurfaceFormat::Float`]: 4 × `f32` por célula
//! - [`SurfaceFormat::Byte`]: 4 × `u8` por célula (destino do codec de readback)

use serde::{Deserialize, Serialize};

use crate::address::AddressSpace;
use crate::error::{PipelineError, PipelineResult};

/// Célula de ponto flutuante (r, g, b, a)
pub type Cell = [f32; 4];

/// Célula de bytes (r, g, b, a)
pub type ByteCell = [u8; 4];

/// Formato dos canais de uma superfície
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceFormat {
    Float,
    Byte,
}

#[derive(Clone, Debug, PartialEq)]
enum Texels {
    Float(Vec<Cell>),
    Byte(Vec<ByteCell>),
}

/// Superfície alocada e destruída pelo chamador
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    space: AddressSpace,
    texels: Texels,
}

impl Surface {
    /// Superfície float zerada
    pub fn new(width: usize, height: usize) -> PipelineResult<Self> {
        let space = AddressSpace::new(width, height)?;
        Ok(Self {
            space,
            texels: Texels::Float(vec![[0.0; 4]; space.cell_count()]),
        })
    }

    /// Superfície de bytes zerada
    pub fn new_bytes(width: usize, height: usize) -> PipelineResult<Self> {
        let space = AddressSpace::new(width, height)?;
        Ok(Self {
            space,
            texels: Texels::Byte(vec![[0; 4]; space.cell_count()]),
        })
    }

    /// Superfície de bytes com uma célula por float de `source` (`4W × H`)
    pub fn for_encoded_floats(source: &Surface) -> PipelineResult<Self> {
        Self::new_bytes(source.width() * 4, source.height())
    }

    pub fn space(&self) -> AddressSpace {
        self.space
    }

    pub fn width(&self) -> usize {
        self.space.width()
    }

    pub fn height(&self) -> usize {
        self.space.height()
    }

    pub fn cell_count(&self) -> usize {
        self.space.cell_count()
    }

    pub fn qubit_count(&self) -> u32 {
        self.space.qubit_count()
    }

    pub fn format(&self) -> SurfaceFormat {
        match self.texels {
            Texels::Float(_) => SurfaceFormat::Float,
            Texels::Byte(_) => SurfaceFormat::Byte,
        }
    }

    /// Mesmas dimensões (o formato não importa)
    pub fn same_shape(&self, other: &Surface) -> bool {
        self.space == other.space
    }

    /// Células float, ou `UnsupportedSurfaceFormat` numa superfície de bytes
    pub fn float_cells(&self) -> PipelineResult<&[Cell]> {
        match &self.texels {
            Texels::Float(cells) => Ok(cells),
            Texels::Byte(_) => Err(self.format_error(SurfaceFormat::Float)),
        }
    }

    pub fn byte_cells(&self) -> PipelineResult<&[ByteCell]> {
        match &self.texels {
            Texels::Byte(cells) => Ok(cells),
            Texels::Float(_) => Err(self.format_error(SurfaceFormat::Byte)),
        }
    }

    pub(crate) fn float_cells_mut(&mut self) -> PipelineResult<&mut [Cell]> {
        let err = self.format_error(SurfaceFormat::Float);
        match &mut self.texels {
            Texels::Float(cells) => Ok(cells),
            Texels::Byte(_) => Err(err),
        }
    }

    pub(crate) fn byte_cells_mut(&mut self) -> PipelineResult<&mut [ByteCell]> {
        let err = self.format_error(SurfaceFormat::Byte);
        match &mut self.texels {
            Texels::Byte(cells) => Ok(cells),
            Texels::Float(_) => Err(err),
        }
    }

    /// Célula float num endereço linear
    pub fn cell(&self, address: usize) -> Option<Cell> {
        match &self.texels {
            Texels::Float(cells) => cells.get(address).copied(),
            Texels::Byte(_) => None,
        }
    }

    /// Readback: `W * H * 4` floats em ordem de endereço
    pub fn read_floats(&self) -> PipelineResult<Vec<f32>> {
        Ok(bytemuck::cast_slice::<Cell, f32>(self.float_cells()?).to_vec())
    }

    /// Readback: `W * H * 4` bytes em ordem de endereço
    pub fn read_bytes(&self) -> PipelineResult<Vec<u8>> {
        Ok(bytemuck::cast_slice::<ByteCell, u8>(self.byte_cells()?).to_vec())
    }

    fn format_error(&self, expected: SurfaceFormat) -> PipelineError {
        PipelineError::UnsupportedSurfaceFormat {
            expected,
            actual: self.format(),
        }
    }
}
