//! Pattern assembly and matching benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use regex_builder::{Engine, EngineConfig, PatternBuilder, SubPattern, escape_literal};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
    tempor incididunt ut labore et dolore magna aliqua sed. Ut enim ad minim veniam, quis \
    nostrud ullamco laboris nisi ut aliquip ex ea commodo consequat.";

fn bench_escape(c: &mut Criterion) {
    let text = r"\/\/!t|-| (1+1=2?) [a-z]{3} $5.00";

    c.bench_function("escape_literal", |b| {
        b.iter(|| escape_literal(black_box(text)));
    });
}

fn bench_assembly(c: &mut Criterion) {
    c.bench_function("assemble_lookaround_pattern", |b| {
        b.iter(|| {
            let mut builder = PatternBuilder::new();
            builder
                .begins_with(SubPattern::nested(|p| {
                    p.symbols("magna").space();
                }))
                .word(black_box("aliqua"))
                .ends_with(SubPattern::nested(|p| {
                    p.space().symbols("sed");
                }));
            builder.as_bare()
        });
    });

    c.bench_function("optional_symbols_rewrite", |b| {
        b.iter(|| {
            let mut builder = PatternBuilder::new();
            builder.word("consequat").optional_symbols(black_box("qu"));
            builder.as_bare()
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all");

    let mut builder = PatternBuilder::new();
    builder.words(["eiusmod", "consequat", "ex"]);
    let pattern = builder.as_bare();

    for cache_size in [0, 100] {
        let engine = Engine::new(EngineConfig::new().cache_size(cache_size));
        group.bench_with_input(
            BenchmarkId::new("cache_size", cache_size),
            &pattern,
            |b, pattern| {
                b.iter(|| engine.find_all(black_box(pattern), black_box(LOREM)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_escape, bench_assembly, bench_matching);
criterion_main!(benches);
