//! # 🖥️ CPU Renderer: Referência com rayon
//!
//! Mapeia o programa compilado sobre todas as células da saída. Abaixo do
//! limiar configurado o mapa é serial; acima, roda no pool do rayon.

use rayon::prelude::*;

use crate::address::AddressSpace;
use crate::config::RendererConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::kernels::{self, ByteProgram, FloatProgram, Program};
use crate::renderer::{KernelArgs, KernelId, Renderer};
use crate::surface::{ByteCell, Cell, Surface};

/// Renderer CPU
#[derive(Debug)]
pub struct CpuRenderer {
    config: RendererConfig,
    pool: Option<rayon::ThreadPool>,
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRenderer {
    /// Renderer no pool global do rayon, limiar padrão
    pub fn new() -> Self {
        Self {
            config: RendererConfig::default(),
            pool: None,
        }
    }

    /// Renderer com configuração explícita
    pub fn with_config(config: RendererConfig) -> PipelineResult<Self> {
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("qtex-cpu-{i}"))
                    .build()
                    .map_err(|e| PipelineError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };
        Ok(Self { config, pool })
    }

    /// Renderer configurado pelo ambiente (`QTEX_*`)
    pub fn from_env() -> PipelineResult<Self> {
        Self::with_config(RendererConfig::from_env())
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn parallel(&self, cells: usize) -> bool {
        cells >= self.config.parallel_threshold
    }

    fn run<F: FnOnce() + Send>(&self, job: F) {
        match &self.pool {
            Some(pool) => pool.install(job),
            None => job(),
        }
    }

    fn render_floats(&self, program: &dyn FloatProgram, space: AddressSpace, out: &mut [Cell]) {
        if self.parallel(out.len()) {
            self.run(|| {
                out.par_iter_mut()
                    .enumerate()
                    .for_each(|(a, cell)| *cell = program.shade(space.fragment(a)));
            });
        } else {
            for (a, cell) in out.iter_mut().enumerate() {
                *cell = program.shade(space.fragment(a));
            }
        }
    }

    fn render_bytes(&self, program: &dyn ByteProgram, space: AddressSpace, out: &mut [ByteCell]) {
        if self.parallel(out.len()) {
            self.run(|| {
                out.par_iter_mut()
                    .enumerate()
                    .for_each(|(a, cell)| *cell = program.shade(space.fragment(a)));
            });
        } else {
            for (a, cell) in out.iter_mut().enumerate() {
                *cell = program.shade(space.fragment(a));
            }
        }
    }
}

impl Renderer for CpuRenderer {
    fn name(&self) -> &str {
        "CPU"
    }

    fn execute(
        &self,
        kernel: KernelId,
        output: &mut Surface,
        args: &KernelArgs<'_>,
    ) -> PipelineResult<()> {
        let expected = kernel.output_format();
        if output.format() != expected {
            return Err(PipelineError::UnsupportedSurfaceFormat {
                expected,
                actual: output.format(),
            });
        }

        let space = output.space();
        let program = kernels::compile(kernel, space, args)?;
        tracing::trace!(
            kernel = %kernel,
            width = space.width(),
            height = space.height(),
            parallel = self.parallel(space.cell_count()),
            "render"
        );

        match program {
            Program::Float(program) => {
                self.render_floats(program.as_ref(), space, output.float_cells_mut()?)
            }
            Program::Byte(program) => {
                self.render_bytes(program.as_ref(), space, output.byte_cells_mut()?)
            }
        }
        Ok(())
    }
}
