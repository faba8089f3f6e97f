//! Digit-string parsing throughput, end to end with validation.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use verhoeff_bench::{SizeTier, generate_text};
use verhoeff_core::{DigitSequence, Layout, parse_digits, validate};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for tier in SizeTier::ALL {
        let text = generate_text(tier.digits(), 42);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", tier.label()), &text, |b, text| {
            b.iter(|| parse_digits(black_box(text), usize::MAX));
        });

        group.bench_with_input(
            BenchmarkId::new("parse_and_validate", tier.label()),
            &text,
            |b, text| {
                b.iter(|| {
                    let digits = parse_digits(black_box(text), usize::MAX).expect("digits");
                    let seq = DigitSequence::from_written(&digits, Layout::CheckDigitLast)
                        .expect("non-empty");
                    validate(&seq)
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
