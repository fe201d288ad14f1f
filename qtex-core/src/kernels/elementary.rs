//! Kernels elementares: preenchimento, upload, codec e composição de blocos

use super::{ByteProgram, Context, FloatProgram, scalar_cell};
use crate::address::{AddressSpace, Fragment};
use crate::codec::encode_f32;
use crate::error::PipelineResult;
use crate::renderer::slots;
use crate::surface::{ByteCell, Cell};

pub(super) struct UniformColor {
    color: Cell,
}

impl UniformColor {
    pub(super) fn compile(ctx: &Context<'_>) -> PipelineResult<Self> {
        Ok(Self {
            color: ctx.float_array::<4>(slots::COLOR)?,
        })
    }
}

impl FloatProgram for UniformColor {
    fn shade(&self, _: Fragment) -> Cell {
        self.color
    }
}

pub(super) struct ClassicalState {
    state: usize,
}

impl ClassicalState {
    pub(super) fn compile(ctx: &Context<'_>) -> PipelineResult<Self> {
        let state = ctx.address(slots::STATE)?;
        if state >= ctx.output().cell_count() {
            return Err(ctx.shape(format!(
                "basis state {state} outside {} cells",
                ctx.output().cell_count()
            )));
        }
        Ok(Self { state })
    }
}

impl FloatProgram for ClassicalState {
    fn shade(&self, fragment: Fragment) -> Cell {
        scalar_cell(if fragment.address == self.state { 1.0 } else { 0.0 })
    }
}

pub(super) struct PixelData<'a> {
    data: &'a [f32],
}

impl<'a> PixelData<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let data = ctx.floats(slots::DATA)?;
        let expected = ctx.output().cell_count() * 4;
        if data.len() != expected {
            return Err(ctx.shape(format!(
                "expected {expected} floats for a {}x{} surface, got {}",
                ctx.output().width(),
                ctx.output().height(),
                data.len()
            )));
        }
        Ok(Self { data })
    }
}

impl FloatProgram for PixelData<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let i = fragment.address * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

pub(super) struct FloatsToBytes<'a> {
    source: &'a [Cell],
}

impl<'a> FloatsToBytes<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let source = ctx.surface(slots::SOURCE)?;
        if ctx.output().cell_count() != source.cell_count() * 4 {
            return Err(ctx.shape(format!(
                "a {}x{} float surface encodes into {} byte cells, output has {}",
                source.width(),
                source.height(),
                source.cell_count() * 4,
                ctx.output().cell_count()
            )));
        }
        Ok(Self {
            source: source.float_cells()?,
        })
    }
}

impl ByteProgram for FloatsToBytes<'_> {
    fn shade(&self, fragment: Fragment) -> ByteCell {
        let f = fragment.address;
        encode_f32(self.source[f / 4][f % 4])
    }
}

pub(super) struct Overlay<'a> {
    fore: &'a [Cell],
    fore_space: AddressSpace,
    back: &'a [Cell],
    offset_col: usize,
    offset_row: usize,
}

impl<'a> Overlay<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let fore = ctx.surface(slots::FOREGROUND)?;
        let back = ctx.peer_cells(slots::BACKGROUND)?;
        let offset = ctx.uints(slots::OFFSET)?;
        let &[col, row] = offset else {
            return Err(ctx.invalid(format!("param `offset` needs [col, row], got {offset:?}")));
        };
        let (offset_col, offset_row) = match (usize::try_from(col), usize::try_from(row)) {
            (Ok(c), Ok(r)) => (c, r),
            _ => return Err(ctx.shape(format!("offset ({col}, {row}) is not addressable"))),
        };

        let out = ctx.output();
        let fits_cols = offset_col
            .checked_add(fore.width())
            .is_some_and(|end| end <= out.width());
        let fits_rows = offset_row
            .checked_add(fore.height())
            .is_some_and(|end| end <= out.height());
        if !fits_cols || !fits_rows {
            return Err(ctx.shape(format!(
                "{}x{} block at ({offset_col}, {offset_row}) does not fit in {}x{}",
                fore.width(),
                fore.height(),
                out.width(),
                out.height()
            )));
        }

        Ok(Self {
            fore: fore.float_cells()?,
            fore_space: fore.space(),
            back,
            offset_col,
            offset_row,
        })
    }
}

impl FloatProgram for Overlay<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let Fragment { col, row, address } = fragment;
        let inside_cols = col >= self.offset_col && col - self.offset_col < self.fore_space.width();
        let inside_rows = row >= self.offset_row && row - self.offset_row < self.fore_space.height();
        if inside_cols && inside_rows {
            self.fore[self
                .fore_space
                .address(col - self.offset_col, row - self.offset_row)]
        } else {
            self.back[address]
        }
    }
}

pub(super) struct LinearOverlay<'a> {
    fore: &'a [Cell],
    back: &'a [Cell],
    offset: usize,
}

impl<'a> LinearOverlay<'a> {
    pub(super) fn compile(ctx: &Context<'a>) -> PipelineResult<Self> {
        let fore = ctx.surface(slots::FOREGROUND)?.float_cells()?;
        let back = ctx.peer_cells(slots::BACKGROUND)?;
        Ok(Self {
            fore,
            back,
            offset: ctx.address(slots::OFFSET)?,
        })
    }
}

impl FloatProgram for LinearOverlay<'_> {
    fn shade(&self, fragment: Fragment) -> Cell {
        let a = fragment.address;
        // Células de `fore` além do fim de `back` são descartadas
        match a.checked_sub(self.offset) {
            Some(i) if i < self.fore.len() => self.fore[i],
            _ => self.back[a],
        }
    }
}
