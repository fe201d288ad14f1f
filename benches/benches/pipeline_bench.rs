//! # Pipeline Benchmarks
//!
//! Multi-pass pipelines: control-combination probabilities and density reduction.
//!
//! Run: `cargo bench --bench pipeline_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qtex_core::Surface;
use qtex_quantum::{ControlMask, QuantumKernels, SurfacePair};

fn amplitudes(qk: &QuantumKernels<qtex_core::CpuRenderer>, width: usize, height: usize) -> Surface {
    let data: Vec<f32> = (0..width * height)
        .flat_map(|i| {
            let t = i as f32 * 0.37;
            [t.cos(), t.sin(), 0.0, 0.0]
        })
        .collect();
    let mut s = Surface::new(width, height).unwrap();
    qk.upload_floats(&mut s, &data).unwrap();
    s
}

/// Benchmark control-combination probabilities
fn bench_control_combination(c: &mut Criterion) {
    let mut group = c.benchmark_group("control_combination");
    let qk = QuantumKernels::cpu();
    let mask = ControlMask::new(0b101, 0b001).unwrap();

    for side in [8usize, 32, 128] {
        let amps = amplitudes(&qk, side, side);
        let mut scratch = SurfacePair::new(side, side).unwrap();
        let mut out = Surface::new(8, 4).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                qk.control_combination_probabilities(black_box(&mut out), &mut scratch, mask, &amps)
            })
        });
    }

    group.finish();
}

/// Benchmark density reduction (partial trace over the row qubits)
fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density_matrix");
    let qk = QuantumKernels::cpu();

    for bits in [2u32, 3, 4] {
        let side = 1usize << bits;
        let amps = amplitudes(&qk, side, side);
        let kept: Vec<u32> = (0..bits).collect();
        let margined: Vec<u32> = (bits..2 * bits).collect();
        let mut out = Surface::new(side, side).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                qk.reduce_to_density_matrix(
                    black_box(&mut out),
                    &amps,
                    &kept,
                    &margined,
                    ControlMask::NO_CONTROLS,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_control_combination, bench_density);
criterion_main!(benches);
