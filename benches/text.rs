use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textfmt::{
    collapse_whitespace, sentence_case, title_case, truncate_middle, word_count, Locale,
    DEFAULT_FILL, DEFAULT_KEEP_END,
};

const PARAGRAPH: &str = "hello, how are you?  i'm fine, you? i'm good.   nice weather! \
    the quick brown fox jumps over the lazy dog. istanbul is not constantinople.";

fn benchmark_case(c: &mut Criterion) {
    c.bench_function("title_case_root", |b| {
        b.iter(|| title_case(black_box(Some(PARAGRAPH)), Locale::Root))
    });

    c.bench_function("title_case_turkic", |b| {
        b.iter(|| title_case(black_box(Some(PARAGRAPH)), Locale::Turkic))
    });

    c.bench_function("sentence_case", |b| {
        b.iter(|| sentence_case(black_box(Some(PARAGRAPH))))
    });
}

fn benchmark_whitespace(c: &mut Criterion) {
    c.bench_function("collapse_whitespace", |b| {
        b.iter(|| collapse_whitespace(black_box(Some(PARAGRAPH))))
    });

    c.bench_function("word_count", |b| {
        b.iter(|| word_count(black_box(Some(PARAGRAPH))))
    });
}

fn benchmark_truncate(c: &mut Criterion) {
    c.bench_function("truncate_middle", |b| {
        b.iter(|| {
            truncate_middle(
                black_box(Some(PARAGRAPH)),
                black_box(40),
                DEFAULT_FILL,
                DEFAULT_KEEP_END,
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_case,
    benchmark_whitespace,
    benchmark_truncate
);
criterion_main!(benches);
