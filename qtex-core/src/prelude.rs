//! Prelude com os tipos mais usados

pub use crate::address::{AddressSpace, Fragment, bit_of, from_address, to_address, with_bit};
pub use crate::codec::{decode_bytes_to_floats, decode_f32, encode_f32};
pub use crate::config::RendererConfig;
pub use crate::cpu::CpuRenderer;
pub use crate::error::{PipelineError, PipelineResult};
pub use crate::renderer::{KernelArgs, KernelId, ParamValue, Renderer, slots};
pub use crate::surface::{ByteCell, Cell, Surface, SurfaceFormat};
