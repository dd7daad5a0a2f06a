use std::num::NonZeroUsize;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kashi_core::romaji::transliterate;
use kashi_core::segment::{LexiconSegmenter, Segmenter};
use kashi_core::Composer;

static INPUTS: &[(&str, &str)] = &[
    ("short", "君の名は"),
    ("medium", "今日は空が美しい、一緒に歌おう"),
    (
        "long",
        "私は毎日この道を走る。夢を信じて、二人の未来へ行こう。Hello, 東京!",
    ),
];

fn bench_segment(c: &mut Criterion) {
    let segmenter = LexiconSegmenter::builtin();
    let mut group = c.benchmark_group("process/segment");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| segmenter.segment(text));
        });
    }
    group.finish();
}

fn bench_process(c: &mut Criterion) {
    let composer = Composer::new(LexiconSegmenter::builtin());
    let mut group = c.benchmark_group("process/uncached");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| composer.process(text));
        });
    }
    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let composer = Composer::new(LexiconSegmenter::builtin())
        .with_cache(NonZeroUsize::new(16).expect("non-zero"));
    let mut group = c.benchmark_group("process/cached");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| composer.process(text));
        });
    }
    group.finish();
}

fn bench_transliterate(c: &mut Criterion) {
    let stream = ["わたし", "は", "まいにち", "がっこう", "へ", "いっ", "て", "さんぽ"];
    c.bench_function("process/transliterate", |b| {
        b.iter(|| transliterate(&stream));
    });
}

criterion_group!(
    benches,
    bench_segment,
    bench_process,
    bench_cached,
    bench_transliterate
);
criterion_main!(benches);
