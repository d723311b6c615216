//! Performance benchmarks for the aligner
//!
//! Run with: cargo bench --bench aligner_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dictee_core::{compare_transcriptions, tokenize, Aligner};
use std::hint::black_box;

const BASE_SENTENCE: &str = "the weather today is sunny with a light breeze from the west ";

/// Generate a reference transcript of roughly `words` words
fn generate_reference(words: usize) -> String {
    let per_sentence = BASE_SENTENCE.split_whitespace().count();
    BASE_SENTENCE.repeat(words / per_sentence + 1)
}

/// Degrade a reference: drop every 7th word, garble every 5th
fn generate_attempt(reference: &str) -> String {
    reference
        .split_whitespace()
        .enumerate()
        .filter(|(i, _)| i % 7 != 6)
        .map(|(i, w)| {
            if i % 5 == 4 {
                format!("{w}x")
            } else {
                w.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Benchmark alignment over growing transcripts
fn bench_transcript_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript_sizes");
    let aligner = Aligner::default();

    for words in [50, 500, 5_000] {
        let reference = tokenize(&generate_reference(words), None);
        let attempt = tokenize(&generate_attempt(&generate_reference(words)), None);

        group.throughput(Throughput::Elements(reference.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("align", words),
            &(attempt, reference),
            |b, (attempt, reference)| {
                b.iter(|| aligner.align(black_box(attempt), black_box(reference)));
            },
        );
    }

    group.finish();
}

/// Worst case: nothing ever matches, so every word triggers a full bounded search
fn bench_disjoint_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("disjoint");
    let aligner = Aligner::default();

    for words in [100, 1_000] {
        let reference = tokenize(&generate_reference(words), None);
        let attempt = tokenize(&"zzz qqq ".repeat(words / 2), None);

        group.bench_with_input(
            BenchmarkId::new("align", words),
            &(attempt, reference),
            |b, (attempt, reference)| {
                b.iter(|| aligner.align(black_box(attempt), black_box(reference)));
            },
        );
    }

    group.finish();
}

/// Benchmark the whole-text quick score
fn bench_quick_score(c: &mut Criterion) {
    let reference = generate_reference(500);
    let attempt = generate_attempt(&reference);

    c.bench_function("compare_transcriptions_500", |b| {
        b.iter(|| compare_transcriptions(black_box(&attempt), black_box(&reference)));
    });
}

criterion_group!(
    benches,
    bench_transcript_sizes,
    bench_disjoint_input,
    bench_quick_score
);
criterion_main!(benches);
