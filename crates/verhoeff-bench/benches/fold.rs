//! Fold, generate, and validate throughput across number lengths.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use verhoeff_bench::{SizeTier, generate_placeholder, generate_valid};
use verhoeff_core::{DigitSequence, Layout, compute_check_digit, fold, validate};

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");

    for tier in SizeTier::ALL {
        let written = generate_valid(tier.digits(), 42, Layout::CheckDigitLast);
        let seq = DigitSequence::from_written(&written, Layout::CheckDigitLast).expect("non-empty");
        let placeholder = generate_placeholder(tier.digits(), 42);

        group.throughput(Throughput::Elements(seq.len() as u64));

        group.bench_with_input(BenchmarkId::new("fold", tier.label()), &seq, |b, seq| {
            b.iter(|| fold(black_box(seq)));
        });

        group.bench_with_input(
            BenchmarkId::new("generate", tier.label()),
            &placeholder,
            |b, seq| {
                b.iter(|| compute_check_digit(black_box(seq)));
            },
        );

        group.bench_with_input(BenchmarkId::new("validate", tier.label()), &seq, |b, seq| {
            b.iter(|| validate(black_box(seq)));
        });
    }
    group.finish();
}

fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("processing_order");

    for tier in SizeTier::ALL {
        let written = generate_valid(tier.digits(), 7, Layout::CheckDigitFirst);
        group.throughput(Throughput::Elements(written.len() as u64));

        for layout in [Layout::CheckDigitFirst, Layout::CheckDigitLast] {
            let id = format!("{layout:?}");
            group.bench_with_input(BenchmarkId::new(id, tier.label()), &written, |b, w| {
                b.iter(|| DigitSequence::from_written(black_box(w), layout));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fold, bench_reorder);
criterion_main!(benches);
