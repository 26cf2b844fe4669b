//! Benchmarks for complete tone chains.
//!
//! Covers both the per-block render the audio callback does and the cost of
//! building a fresh chain, which happens on every tone start.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_dtmf::{
    dtmf,
    tone::{ToneChain, ToneShape},
};

use crate::BLOCK_SIZES;

pub fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone/chain");
    let pair = dtmf::lookup('5').unwrap_or(saavy_dtmf::FrequencyPair::DIAL_TONE);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut chain = ToneChain::new(pair, ToneShape::default(), 48_000.0);
        group.bench_with_input(BenchmarkId::new("render_48k", size), &size, |b, _| {
            b.iter(|| {
                chain.render(black_box(&mut buffer));
            })
        });

        // 8 kHz clamps the filter cutoff below Nyquist
        let mut chain = ToneChain::new(pair, ToneShape::default(), 8_000.0);
        group.bench_with_input(BenchmarkId::new("render_8k", size), &size, |b, _| {
            b.iter(|| {
                chain.render(black_box(&mut buffer));
            })
        });
    }

    group.bench_function("build", |b| {
        b.iter(|| ToneChain::new(black_box(pair), ToneShape::default(), 48_000.0))
    });

    group.finish();
}
