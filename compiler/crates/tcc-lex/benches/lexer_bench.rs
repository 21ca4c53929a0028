//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package tcc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tcc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).count()
}

fn bench_lexer_short_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int main(void) { return 42; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("short_function", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_nested_unary(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_nested_unary");

    let source = "int main(void) { return ~-~-~-~-~-~-~-~-~-~100; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_unary", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_long_identifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("long_function_name", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "int a_very_long_descriptive_function_name(void) { return 0; }",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_short_function,
    bench_lexer_nested_unary,
    bench_lexer_long_identifier
);
criterion_main!(benches);
