use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rexlit::{alternation, class_body, escape, string_pattern, RegexFlavor};

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape_backtracking", |b| {
        b.iter(|| black_box(escape(black_box('.'), RegexFlavor::Backtracking)))
    });
    c.bench_function("escape_linear_time", |b| {
        b.iter(|| black_box(escape(black_box('🐶'), RegexFlavor::LinearTime)))
    });
}

fn bench_string_pattern(c: &mut Criterion) {
    let text = "https://www.example.com/path?query=value#fragment";

    c.bench_function("string_pattern", |b| {
        b.iter(|| black_box(string_pattern(black_box(text), RegexFlavor::Backtracking)))
    });
}

fn bench_alternation(c: &mut Criterion) {
    let words: Vec<String> = (0..128).map(|n| format!("word-{n}")).collect();

    c.bench_function("alternation_128_words", |b| {
        b.iter(|| black_box(alternation(black_box(&words), RegexFlavor::Backtracking)))
    });
}

fn bench_class_body(c: &mut Criterion) {
    let chars: Vec<char> = ('a'..='z').chain('0'..='9').chain('Ā'..='ſ').collect();

    c.bench_function("class_body_compaction", |b| {
        b.iter(|| {
            black_box(class_body(
                black_box(chars.iter().copied()),
                RegexFlavor::LinearTime,
            ))
        })
    });
}

criterion_group!(
    benches,
    bench_escape,
    bench_string_pattern,
    bench_alternation,
    bench_class_body,
);

criterion_main!(benches);
