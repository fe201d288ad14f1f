//! # Kernel Benchmarks
//!
//! Measures single kernel dispatch on the CPU renderer, serial vs rayon.
//!
//! Run: `cargo bench --bench kernel_bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use qtex_core::prelude::*;

fn random_state(width: usize, height: usize) -> Surface {
    let data: Vec<f32> = (0..width * height * 4)
        .map(|i| ((i * 7919) % 1000) as f32 / 1000.0)
        .collect();
    let mut s = Surface::new(width, height).unwrap();
    CpuRenderer::new()
        .execute(KernelId::PixelData, &mut s, &KernelArgs::new().param(slots::DATA, data))
        .unwrap();
    s
}

/// Benchmark qubit operation across surface sizes
fn bench_qubit_operation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qubit_operation");
    let h = std::f32::consts::FRAC_1_SQRT_2;

    let serial = CpuRenderer::with_config(RendererConfig::serial()).unwrap();
    let parallel = CpuRenderer::with_config(RendererConfig {
        parallel_threshold: 0,
        num_threads: None,
    })
    .unwrap();

    for side in [16usize, 64, 256] {
        let src = random_state(side, side);
        let mut control = Surface::new(side, side).unwrap();
        serial
            .execute(
                KernelId::ControlMask,
                &mut control,
                &KernelArgs::new().param(slots::MASK, 0u64).param(slots::VALUE, 0u64),
            )
            .unwrap();
        let args = KernelArgs::new()
            .input(slots::SOURCE, &src)
            .input(slots::CONTROL, &control)
            .param(slots::TARGET, 3u32)
            .param(slots::MATRIX, [h, 0.0, h, 0.0, h, 0.0, -h, 0.0]);
        let mut out = Surface::new(side, side).unwrap();

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("serial", side), &side, |b, _| {
            b.iter(|| serial.execute(KernelId::QubitOperation, black_box(&mut out), &args))
        });
        group.bench_with_input(BenchmarkId::new("rayon", side), &side, |b, _| {
            b.iter(|| parallel.execute(KernelId::QubitOperation, black_box(&mut out), &args))
        });
    }

    group.finish();
}

/// Benchmark float → byte encoding
fn bench_encode(c: &mut Criterion) {
    let renderer = CpuRenderer::new();
    let src = random_state(64, 64);
    let mut bytes = Surface::for_encoded_floats(&src).unwrap();
    let args = KernelArgs::new().input(slots::SOURCE, &src);

    c.bench_function("floats_to_bytes_64x64", |b| {
        b.iter(|| renderer.execute(KernelId::FloatsToBytes, black_box(&mut bytes), &args))
    });
}

criterion_group!(benches, bench_qubit_operation, bench_encode);
criterion_main!(benches);
