//! # Double buffer
//!
//! Duas superfícies intercambiáveis com o mesmo formato. Um pipeline lê a
//! superfície "fresca" e escreve na "reserva"; depois os papéis trocam.
//! Nenhuma escrita acontece na superfície lida no mesmo passo.

use qtex_core::{PipelineError, Surface};

use crate::error::QuantumResult;

/// Par de superfícies de rascunho
#[derive(Clone, Debug)]
pub struct SurfacePair {
    surfaces: [Surface; 2],
    fresh: Option<usize>,
}

impl SurfacePair {
    /// Aloca duas superfícies float `width × height`
    pub fn new(width: usize, height: usize) -> QuantumResult<Self> {
        Ok(Self {
            surfaces: [Surface::new(width, height)?, Surface::new(width, height)?],
            fresh: None,
        })
    }

    /// Adota duas superfícies do chamador (mesmo formato e dimensões)
    pub fn from_surfaces(a: Surface, b: Surface) -> QuantumResult<Self> {
        if !a.same_shape(&b) || a.format() != b.format() {
            return Err(PipelineError::ShapeMismatch(format!(
                "double buffer halves differ: {}x{} {:?} vs {}x{} {:?}",
                a.width(),
                a.height(),
                a.format(),
                b.width(),
                b.height(),
                b.format()
            ))
            .into());
        }
        Ok(Self {
            surfaces: [a, b],
            fresh: None,
        })
    }

    pub fn width(&self) -> usize {
        self.surfaces[0].width()
    }

    pub fn height(&self) -> usize {
        self.surfaces[0].height()
    }

    /// Superfície escrita por último, se ainda viva
    pub fn fresh(&self) -> Option<&Surface> {
        self.fresh.map(|i| &self.surfaces[i])
    }

    /// Índice da superfície que pode ser sobrescrita
    pub fn spare_index(&self) -> usize {
        match self.fresh {
            Some(0) => 1,
            _ => 0,
        }
    }

    /// Marca as duas superfícies como livres
    pub fn release(&mut self) {
        self.fresh = None;
    }

    pub fn into_inner(self) -> (Surface, Surface) {
        let [a, b] = self.surfaces;
        (a, b)
    }

    /// Reserva (escrita) e fresca (leitura), emprestadas ao mesmo tempo
    pub(crate) fn split(&mut self) -> (&mut Surface, Option<&Surface>) {
        let spare = self.spare_index();
        let fresh = self.fresh;
        let [a, b] = &mut self.surfaces;
        let (write, read) = if spare == 0 { (a, b) } else { (b, a) };
        let read: &Surface = read;
        (write, fresh.is_some().then_some(read))
    }

    /// A reserva passa a ser a fresca
    pub(crate) fn flip(&mut self) -> &Surface {
        let spare = self.spare_index();
        self.fresh = Some(spare);
        &self.surfaces[spare]
    }
}
