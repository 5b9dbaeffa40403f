//! Benchmarks for the paths a keystroke or menu command goes through.
//!
//! Run with: cargo bench

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jotter_buffer::{DEFAULT_HISTORY_LIMIT, Position, TextBuffer};
use jotter_core::Gutter;

/// A notes file of `lines` lines.
fn notes(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("{i:>6} | meeting notes, todo items and a sample sentence\n"))
        .collect()
}

/// Loading a file into a fresh buffer.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("open");

    for lines in [1_000, 10_000, 100_000] {
        let text = notes(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| TextBuffer::from_text(black_box(text), DEFAULT_HISTORY_LIMIT))
        });
    }

    group.finish();
}

/// The widget hands back its whole text after each keystroke.
fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("typing");

    let text = notes(10_000);
    let mid = text.len() / 2;
    let mut typed = text.clone();
    typed.insert(mid, 'x');
    let mut erased = text.clone();
    erased.remove(mid);

    for (name, target) in [("insert_char", &typed), ("backspace", &erased)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || TextBuffer::from(text.as_str()),
                |mut buffer| buffer.sync_to(black_box(target)),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Replace All, and taking it back.
fn bench_replace_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_all");

    let text = notes(10_000);

    for (name, pattern) in [("every_line", "sample"), ("no_match", "absent")] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || TextBuffer::from(text.as_str()),
                |mut buffer| buffer.replace_all(black_box(pattern), "example"),
                BatchSize::LargeInput,
            )
        });
    }

    group.bench_function("undo", |b| {
        b.iter_batched(
            || {
                let mut buffer = TextBuffer::from(text.as_str());
                buffer.replace_all("sample", "example");
                buffer
            },
            |mut buffer| buffer.undo(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

/// Caret mapping and gutter regeneration done for every status refresh.
fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");

    let buffer = TextBuffer::from(notes(100_000).as_str());
    let caret = Position::new(50_000, 12);

    group.bench_function("caret_to_index", |b| {
        b.iter(|| buffer.position_to_char_idx(black_box(caret)))
    });

    group.bench_function("index_to_caret", |b| {
        let idx = buffer.len_chars() / 2;
        b.iter(|| buffer.char_idx_to_position(black_box(idx)))
    });

    group.bench_function("gutter", |b| {
        let mut gutter = Gutter::new();
        b.iter(|| gutter.refresh(black_box(buffer.len_lines())))
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_typing, bench_replace_all, bench_refresh);
criterion_main!(benches);
