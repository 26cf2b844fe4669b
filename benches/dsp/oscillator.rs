//! Benchmarks for sine generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_dtmf::dsp::oscillator::OscillatorBlock;
use saavy_dtmf::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Lowest row tone
        let ctx = RenderCtx::from_freq(48_000.0, 697.0);
        let mut osc = OscillatorBlock::sine();
        group.bench_with_input(BenchmarkId::new("sine_697", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Highest column tone at a telephony rate, wraps phase more often
        let ctx = RenderCtx::from_freq(8_000.0, 1477.0);
        let mut osc = OscillatorBlock::sine();
        group.bench_with_input(BenchmarkId::new("sine_1477_8k", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
